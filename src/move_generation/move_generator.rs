//! Pseudo-legal target generation dispatched over the closed piece set.
//!
//! The result ignores pins, checks and blockers on rays; the game state
//! machine filters it down to legal moves.

use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::{Piece, PieceType};
use crate::game_state::square::{File, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

pub fn pseudo_legal_targets(
    piece: Piece,
    square: Square,
    board: &Board,
    en_passant_file: Option<File>,
    castle_rights: CastleRights,
) -> Vec<Square> {
    match piece.piece_type {
        PieceType::Pawn => pawn_moves(square, piece.color, en_passant_file, board),
        PieceType::Knight => knight_moves(square),
        PieceType::Bishop => bishop_moves(square),
        PieceType::Rook => rook_moves(square),
        PieceType::Queen => queen_moves(square),
        PieceType::King => king_moves(square, piece.color, castle_rights),
    }
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_targets;
    use crate::game_state::board::Board;
    use crate::game_state::castle_rights::CastleRights;
    use crate::game_state::chess_types::{Color, Piece, PieceType};
    use crate::game_state::square::Square;

    #[test]
    fn start_position_pseudo_counts() {
        let board = Board::standard();
        let counts: Vec<(PieceType, usize)> = board
            .pieces_of(Color::White)
            .into_iter()
            .map(|bp| {
                let targets = pseudo_legal_targets(
                    bp.piece,
                    bp.square,
                    &board,
                    None,
                    CastleRights::all(),
                );
                (bp.piece_type(), targets.len())
            })
            .collect();

        // Rays and offsets are not yet filtered against own pieces.
        let rook_a1 = counts[0];
        assert_eq!(rook_a1, (PieceType::Rook, 14));
        let knight_b1 = counts[1];
        assert_eq!(knight_b1, (PieceType::Knight, 3));
        let king_e1 = counts[4];
        assert_eq!(king_e1, (PieceType::King, 7));
        let pawn_a2 = counts[8];
        assert_eq!(pawn_a2, (PieceType::Pawn, 2));
    }

    #[test]
    fn dispatch_matches_piece_color() {
        let board = Board::empty();
        let e7: Square = "e7".parse().expect("e7 should parse");
        let black = pseudo_legal_targets(
            Piece::new(PieceType::Pawn, Color::Black),
            e7,
            &board,
            None,
            CastleRights::none(),
        );
        assert_eq!(black.len(), 2);
        assert!(black.contains(&"e5".parse().expect("e5 should parse")));
    }
}
