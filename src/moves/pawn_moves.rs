//! Pawn pushes and captures.
//!
//! Pushes need empty squares; diagonal targets need any piece on the square
//! (own-piece captures are removed by the legality filter) or a live
//! en-passant file with the pawn on its fifth rank.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::square::{File, Rank, Square};

#[inline]
fn start_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::Two,
        Color::Black => Rank::Seven,
    }
}

/// Rank a pawn must stand on to capture en passant.
#[inline]
pub fn en_passant_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::Five,
        Color::Black => Rank::Four,
    }
}

pub fn pawn_moves(
    square: Square,
    color: Color,
    en_passant_file: Option<File>,
    board: &Board,
) -> Vec<Square> {
    let mut out = Vec::with_capacity(4);
    let forward = color.forward();

    let Some(one_step) = square.add(0, forward) else {
        return out;
    };

    if board.is_empty(one_step) {
        out.push(one_step);

        if square.rank() == start_rank(color) {
            if let Some(two_step) = square.add(0, 2 * forward) {
                if board.is_empty(two_step) {
                    out.push(two_step);
                }
            }
        }
    }

    let en_passant_live = square.rank() == en_passant_rank(color);
    for d_file in [-1i8, 1] {
        let Some(target) = square.add(d_file, forward) else {
            continue;
        };
        let en_passant = en_passant_live && en_passant_file == Some(target.file());
        if !board.is_empty(target) || en_passant {
            out.push(target);
        }
    }

    out
}
