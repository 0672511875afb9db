//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single recoverable error type of the crate. Everything
//! a caller can reasonably get wrong (an illegal move, a missing promotion
//! piece, a malformed square or driver line) is reported through it and never
//! leaves the game in a partially updated state.
//!
//! Usage guidelines:
//! - Public operations return `ChessResult<T>` for expected failure modes.
//! - Corrupted internal state (no king on the board during a check query, a
//!   castle onto an impossible file, an undo index outside the history) is a
//!   bug in the caller or the engine and panics instead of being reported
//!   here.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceType};
use crate::game_state::square::Square;

/// Unified error type for the rules engine.
///
/// When matching on `ChessError`:
/// - `IllegalMove`, `MissingPromotion` and `InvalidPromotion` come from
///   `ChessGame::make_move` and mean the game was left untouched.
/// - `InvalidSquare`, `InvalidPieceName` and `InvalidMoveLine` come from text
///   parsing and are suitable for showing to end users.
/// - `InvalidBoardHash`, `MissingKing`, `DuplicateKing` and `OpponentInCheck`
///   come from setting up a position from caller-supplied data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The candidate move is not in the legal move list of its source square.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// A pawn reached the back rank but no promotion piece was supplied.
    #[error("missing promotion piece for pawn move to {square}")]
    MissingPromotion { square: Square },

    /// Promotion to a pawn or a king was requested.
    #[error("cannot promote to {piece}")]
    InvalidPromotion { piece: PieceType },

    /// A square string was not a file letter followed by a rank digit.
    ///
    /// Payload: the offending text.
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    /// A piece name or letter could not be interpreted.
    ///
    /// Payload: the offending text.
    #[error("invalid piece name: {0:?}")]
    InvalidPieceName(String),

    /// A driver line did not have the `from,to[,promotion]` shape.
    ///
    /// Payload: the original line.
    #[error("invalid move line: {0:?}")]
    InvalidMoveLine(String),

    /// A board hash had the wrong length or an unknown piece character.
    ///
    /// Payload: the original hash string.
    #[error("invalid board hash: {0:?}")]
    InvalidBoardHash(String),

    /// A position was set up without a king for the given color.
    #[error("no {0} king on the board")]
    MissingKing(Color),

    /// A position was set up with more than one king for the given color.
    #[error("more than one {0} king on the board")]
    DuplicateKing(Color),

    /// The side not to move is in check, so its king could be captured.
    ///
    /// Payload: the color of the attacked king.
    #[error("{0} king is in check but it is not {0}'s turn")]
    OpponentInCheck(Color),
}

/// Result alias for rules-engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
