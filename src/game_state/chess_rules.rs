//! Rule thresholds and fixed squares of the standard game.
//!
//! `RulesConfig` carries the draw thresholds a `ChessGame` classifies with.
//! The defaults are the engine's canonical rules; tests and the text driver
//! override them to reach draw conditions in short sequences.

use crate::game_state::chess_types::Color;
use crate::game_state::square::{File, Square};

/// Plies without a capture or pawn move after which the game is drawn.
pub const DEFAULT_FIFTY_MOVE_PLIES: u16 = 50;

/// Occurrences of one position (counting the current one) that draw the game.
pub const DEFAULT_REPETITION_COUNT: usize = 3;

/// Draw thresholds used by game-status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    pub fifty_move_plies: u16,
    pub repetition_count: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            fifty_move_plies: DEFAULT_FIFTY_MOVE_PLIES,
            repetition_count: DEFAULT_REPETITION_COUNT,
        }
    }
}

/// Square the king of `color` starts on.
#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(File::E, color.back_rank())
}

/// Starting square of the rook on the kingside (`H`) or queenside (`A`).
#[inline]
pub const fn rook_home(color: Color, kingside: bool) -> Square {
    let file = if kingside { File::H } else { File::A };
    Square::new(file, color.back_rank())
}
