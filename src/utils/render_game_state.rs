//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view with coordinates for the text driver,
//! tests, and diagnostics.

use crate::game_state::board::Board;
use crate::game_state::game_state::ChessGame;
use crate::game_state::square::{File, Rank, Square};
use crate::moves::move_descriptions::GameStatus;
use crate::utils::algebraic::move_text;

const FILE_LABELS: &str = "  a b c d e f g h";

/// Render the board with rank and file labels, rank 8 at the top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str(FILE_LABELS);
    out.push('\n');

    for rank in Rank::ALL.into_iter().rev() {
        out.push(rank.to_char());
        out.push(' ');

        for file in File::ALL {
            match board.piece(Square::new(file, rank)) {
                Some(piece) => out.push(piece.symbol()),
                None => out.push('·'),
            }

            if file != File::H {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank.to_char());
        out.push('\n');
    }

    out.push_str(FILE_LABELS);

    out
}

/// Board, side to move or result, and the move text so far.
pub fn render_game_state(game: &ChessGame) -> String {
    let mut out = render_board(&game.board());
    out.push('\n');

    let status = game.status();
    match status {
        GameStatus::InProgress => out.push_str(&format!("{} to move", game.to_move())),
        GameStatus::Check => out.push_str(&format!("{} to move, in check", game.to_move())),
        _ => out.push_str(&status.to_string()),
    }

    let moves = move_text(game);
    if !moves.is_empty() {
        out.push('\n');
        out.push_str(&moves);
    }

    out
}
