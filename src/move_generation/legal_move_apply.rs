//! Board-level effects of a move.
//!
//! These functions assume the move has already been validated. They relocate
//! the piece and carry out the side effects the rules attach to it: promotion,
//! removing a pawn captured en passant, and moving the rook when the king
//! castles. Simulation for check detection goes through the same code so the
//! simulated board always matches what committing the move would produce.

use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_rules::rook_home;
use crate::game_state::chess_types::{Piece, PieceType};
use crate::game_state::square::{File, Rank, Square};
use crate::moves::move_descriptions::CastleKind;

/// What applying a move did to the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedMove {
    pub capture: Option<PieceType>,
    pub en_passant: bool,
    pub castle: CastleKind,
    pub promotion: Option<PieceType>,
}

/// A pawn changing file onto an empty square captures en passant.
#[inline]
pub fn is_en_passant_capture(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    piece.piece_type == PieceType::Pawn && from.file() != to.file() && board.is_empty(to)
}

#[inline]
pub fn is_promotion(piece: Piece, to: Square) -> bool {
    piece.piece_type == PieceType::Pawn && to.rank() == piece.color.promotion_rank()
}

/// Castle kind of a king move; `None` unless the king travels two files.
///
/// # Panics
/// If a king moves two files onto anything but the c- or g-file.
pub fn castle_kind(piece: Piece, from: Square, to: Square) -> CastleKind {
    if piece.piece_type != PieceType::King || to.file().sub(from.file()).abs() != 2 {
        return CastleKind::None;
    }

    match to.file() {
        File::G => CastleKind::Short,
        File::C => CastleKind::Long,
        _ => panic!("invalid castle from {from} to {to}"),
    }
}

/// Rook origin and destination for a castle on `rank`.
pub fn castle_rook_squares(castle: CastleKind, rank: Rank) -> Option<(Square, Square)> {
    match castle {
        CastleKind::Short => Some((Square::new(File::H, rank), Square::new(File::F, rank))),
        CastleKind::Long => Some((Square::new(File::A, rank), Square::new(File::D, rank))),
        CastleKind::None => None,
    }
}

/// Commit `piece` from `from` to `to` on `board`.
///
/// `promotion` is only consulted when a pawn reaches its last rank; without
/// one the pawn stays a pawn, which is what check simulation wants.
pub fn apply_to_board(
    board: &mut Board,
    piece: Piece,
    from: Square,
    to: Square,
    promotion: Option<PieceType>,
) -> AppliedMove {
    let mut applied = AppliedMove {
        capture: board.piece(to).map(|captured| captured.piece_type),
        ..AppliedMove::default()
    };
    let en_passant = is_en_passant_capture(board, piece, from, to);

    board.move_piece(from, to);

    if is_promotion(piece, to) {
        if let Some(promotion) = promotion {
            board.set_piece(to, Piece::new(promotion, piece.color));
            applied.promotion = Some(promotion);
        }
    }

    if en_passant {
        board.remove_piece(Square::new(to.file(), from.rank()));
        applied.en_passant = true;
        applied.capture = Some(PieceType::Pawn);
    }

    applied.castle = castle_kind(piece, from, to);
    if let Some((rook_from, rook_to)) = castle_rook_squares(applied.castle, to.rank()) {
        board.move_piece(rook_from, rook_to);
    }

    applied
}

/// A copy of `board` with the piece on `from` moved to `to`.
pub fn simulate_move(board: &Board, from: Square, to: Square) -> Board {
    let mut next = board.clone();
    if let Some(piece) = board.piece(from) {
        apply_to_board(&mut next, piece, from, to, None);
    }
    next
}

/// Persistent rights after `piece` moves `from` -> `to`.
///
/// A king move revokes both sides for its color, a rook leaving its corner
/// revokes that side, and anything landing on an enemy rook corner revokes
/// the enemy's right there.
pub fn update_castle_rights(
    rights: CastleRights,
    piece: Piece,
    from: Square,
    to: Square,
) -> CastleRights {
    let color = piece.color;
    let enemy = color.opposite();
    let mut rights = rights;

    match piece.piece_type {
        PieceType::King => rights = rights.disable_both(color),
        PieceType::Rook if from == rook_home(color, true) => {
            rights = rights.disable_kingside(color)
        }
        PieceType::Rook if from == rook_home(color, false) => {
            rights = rights.disable_queenside(color)
        }
        _ => {}
    }

    if to == rook_home(enemy, true) {
        rights = rights.disable_kingside(enemy);
    } else if to == rook_home(enemy, false) {
        rights = rights.disable_queenside(enemy);
    }

    rights
}
