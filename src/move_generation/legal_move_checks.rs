//! Line of sight, attack and check queries.
//!
//! Every check question in the engine (public check status, the self-check
//! filter on legal moves, castling through an attacked square) is answered by
//! `is_king_in_check` on a board that already reflects the hypothetical move,
//! so all three agree on what "attacked" means.

use crate::game_state::board::{Board, BoardPiece};
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::Color;
use crate::game_state::square::Square;
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_shared::squares_between;
use crate::move_generation::move_generator::pseudo_legal_targets;

/// True if every square strictly between `from` and `to` is empty.
///
/// Unaligned or identical squares never have line of sight.
pub fn line_of_sight(board: &Board, from: Square, to: Square) -> bool {
    squares_between(from, to)
        .is_some_and(|between| between.iter().all(|square| board.is_empty(*square)))
}

/// Whether `attacker` could move onto the occupied square `target`.
///
/// Castling and en passant never attack, so both are disabled here.
pub fn attacks_square(board: &Board, attacker: BoardPiece, target: Square) -> bool {
    let targets = pseudo_legal_targets(
        attacker.piece,
        attacker.square,
        board,
        None,
        CastleRights::none(),
    );
    targets.contains(&target)
        && (!attacker.piece_type().is_slider() || line_of_sight(board, attacker.square, target))
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .into_iter()
        .any(|bp| attacks_square(board, bp, square))
}

/// # Panics
/// If `color` has no king on `board`.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let king = board.king(color);
    is_square_attacked(board, king.square, color.opposite())
}

/// Whether moving the piece on `from` to `to` leaves its own king attacked.
pub fn leaves_king_in_check(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let next = simulate_move(board, from, to);
    is_king_in_check(&next, color)
}

#[cfg(test)]
mod tests {
    use super::{
        attacks_square, is_king_in_check, is_square_attacked, leaves_king_in_check,
        line_of_sight,
    };
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceType};
    use crate::game_state::square::Square;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    fn place(board: &mut Board, square: &str, piece_type: PieceType, color: Color) {
        board.set_piece(sq(square), Piece::new(piece_type, color));
    }

    #[test]
    fn line_of_sight_stops_at_blockers() {
        let board = Board::standard();
        assert!(!line_of_sight(&board, sq("a1"), sq("a3")));
        assert!(line_of_sight(&board, sq("a2"), sq("a7")));
        assert!(line_of_sight(&board, sq("e1"), sq("e2")));
        assert!(!line_of_sight(&board, sq("g1"), sq("f3")));
    }

    #[test]
    fn start_position_is_not_check() {
        let board = Board::standard();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn blocked_slider_does_not_give_check() {
        let mut board = Board::empty();
        place(&mut board, "e1", PieceType::King, Color::White);
        place(&mut board, "e8", PieceType::King, Color::Black);
        place(&mut board, "e5", PieceType::Rook, Color::Black);
        assert!(is_king_in_check(&board, Color::White));

        place(&mut board, "e3", PieceType::Knight, Color::White);
        assert!(!is_king_in_check(&board, Color::White));
        assert!(leaves_king_in_check(&board, Color::White, sq("e3"), sq("c4")));
        assert!(!leaves_king_in_check(&board, Color::White, sq("e1"), sq("d1")));
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let mut board = Board::empty();
        place(&mut board, "e4", PieceType::King, Color::White);
        place(&mut board, "e8", PieceType::King, Color::Black);
        place(&mut board, "e5", PieceType::Pawn, Color::Black);
        assert!(!is_king_in_check(&board, Color::White));

        assert!(!is_square_attacked(&board, sq("e4"), Color::Black));

        place(&mut board, "d5", PieceType::Pawn, Color::Black);
        assert!(is_square_attacked(&board, sq("e4"), Color::Black));
        let attackers: Vec<Square> = board
            .pieces_of(Color::Black)
            .into_iter()
            .filter(|bp| attacks_square(&board, *bp, sq("e4")))
            .map(|bp| bp.square)
            .collect();
        assert_eq!(attackers, vec![sq("d5")]);
    }

    #[test]
    fn en_passant_simulation_removes_the_captured_pawn() {
        // White king on a5 shielded along the rank by both pawns.
        let mut board = Board::empty();
        place(&mut board, "a5", PieceType::King, Color::White);
        place(&mut board, "h5", PieceType::Rook, Color::Black);
        place(&mut board, "e8", PieceType::King, Color::Black);
        place(&mut board, "d5", PieceType::Pawn, Color::White);
        place(&mut board, "e5", PieceType::Pawn, Color::Black);

        assert!(!is_king_in_check(&board, Color::White));
        assert!(leaves_king_in_check(&board, Color::White, sq("d5"), sq("e6")));
    }
}
