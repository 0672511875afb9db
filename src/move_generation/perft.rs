//! Move-path enumeration for validating the rules engine.
//!
//! Perft walks every legal move sequence to a fixed depth through the public
//! `ChessGame` API (make a move, recurse, undo) and tallies what the leaf
//! moves did. Published node counts for well-known positions make it the
//! quickest way to catch a missing or extra legal move.

use crate::errors::ChessResult;
use crate::game_state::game_state::ChessGame;
use crate::moves::move_descriptions::{CastleKind, GameStatus, Move, QualifiedMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    /// Leaf moves that give check, checkmates included.
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, mv: &QualifiedMove) {
        self.nodes += 1;
        if mv.capture.is_some() {
            self.captures += 1;
        }
        if mv.en_passant {
            self.en_passant += 1;
        }
        if mv.castle != CastleKind::None {
            self.castles += 1;
        }
        if mv.promotion.is_some() {
            self.promotions += 1;
        }
        match mv.status {
            GameStatus::Check => self.checks += 1,
            GameStatus::WhiteWins | GameStatus::BlackWins => {
                self.checks += 1;
                self.checkmates += 1;
            }
            _ => {}
        }
    }
}

/// Count leaf move paths of length `depth` from the current position.
///
/// The game is returned to its starting position before this returns, also
/// when an error is propagated.
pub fn perft(game: &mut ChessGame, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in game.all_legal_moves() {
        total.merge(perft_move(game, mv, depth)?);
    }
    Ok(total)
}

/// Per-root-move breakdown, in move generation order.
pub fn perft_divide(game: &mut ChessGame, depth: u8) -> ChessResult<Vec<(Move, PerftCounts)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    game.all_legal_moves()
        .into_iter()
        .map(|mv| perft_move(game, mv, depth).map(|counts| (mv, counts)))
        .collect()
}

fn perft_move(game: &mut ChessGame, mv: Move, depth: u8) -> ChessResult<PerftCounts> {
    let qualified = game.make_move(mv)?;
    let counts = if depth == 1 {
        let mut leaf = PerftCounts::default();
        leaf.record_leaf(&qualified);
        Ok(leaf)
    } else {
        perft(game, depth - 1)
    };
    game.undo();
    counts
}
