//! King step and castling targets.
//!
//! The castle rights passed in must already be the transient rights for the
//! current position: whether the king is in check, crosses an attacked square
//! or has pieces in its way is decided by the game state machine before this
//! generator is called.

use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_rules::king_home;
use crate::game_state::chess_types::Color;
use crate::game_state::square::{File, Square};
use crate::move_generation::legal_move_shared::offset_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub fn king_moves(square: Square, color: Color, castle_rights: CastleRights) -> Vec<Square> {
    let mut out = offset_targets(square, &KING_OFFSETS);

    if square != king_home(color) {
        return out;
    }

    let rank = color.back_rank();
    if castle_rights.kingside(color) {
        out.push(Square::new(File::G, rank));
    }
    if castle_rights.queenside(color) {
        out.push(Square::new(File::C, rank));
    }

    out
}
