//! Text forms of moves.
//!
//! Parses the `from,to[,promotion]` lines the text driver reads and renders
//! committed moves as numbered algebraic move text.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, PieceType};
use crate::game_state::game_state::ChessGame;
use crate::moves::move_descriptions::{Move, QualifiedMove};

/// Parse a driver line such as `e2,e4` or `e7,e8,Q`.
///
/// Squares are coordinates (`e4`); the promotion is a letter or a full piece
/// name, in any case. Whitespace around fields is ignored.
pub fn parse_move_line(line: &str) -> ChessResult<Move> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    match fields.as_slice() {
        [from, to] => Ok(Move::new(from.parse()?, to.parse()?)),
        [from, to, promotion] => Ok(Move::with_promotion(
            from.parse()?,
            to.parse()?,
            parse_promotion(promotion)?,
        )),
        _ => Err(ChessError::InvalidMoveLine(line.to_owned())),
    }
}

/// Parse a promotion piece. Only queen, rook, bishop and knight are accepted.
pub fn parse_promotion(text: &str) -> ChessResult<PieceType> {
    let piece: PieceType = text.parse()?;
    if piece.is_promotion_target() {
        Ok(piece)
    } else {
        Err(ChessError::InvalidPieceName(text.to_owned()))
    }
}

/// `1. e4` for a white ply, `1... e5` for a black one.
///
/// `ply` counts from 1 and `first_mover` is the side that made ply 1.
pub fn numbered_move(ply: usize, first_mover: Color, mv: &QualifiedMove) -> String {
    let half_moves = half_moves_before(ply, first_mover);
    let number = half_moves / 2 + 1;
    if half_moves % 2 == 0 {
        format!("{number}. {mv}")
    } else {
        format!("{number}... {mv}")
    }
}

/// Half-moves since white's first move, counting a missing white ply when
/// black moved first.
fn half_moves_before(ply: usize, first_mover: Color) -> usize {
    ply - 1 + usize::from(first_mover == Color::Black)
}

/// The game so far as move text, e.g. `1. e4 e5 2. Nf3`.
pub fn move_text(game: &ChessGame) -> String {
    let history = game.history();
    let Some(first_mover) = history.first().map(|state| state.to_move) else {
        return String::new();
    };

    let mut parts = Vec::with_capacity(history.len());
    for (ply, mv) in history
        .iter()
        .enumerate()
        .filter_map(|(ply, state)| state.last_move.as_ref().map(|mv| (ply, mv)))
    {
        let is_black_reply = half_moves_before(ply, first_mover) % 2 == 1 && ply > 1;
        if is_black_reply {
            parts.push(mv.to_string());
        } else {
            parts.push(numbered_move(ply, first_mover, mv));
        }
    }
    parts.join(" ")
}
