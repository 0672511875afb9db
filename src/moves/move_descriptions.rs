//! Move records exchanged with callers.
//!
//! `Move` is the unvalidated candidate a caller submits. `QualifiedMove` is the
//! engine's record of what a committed move actually did, including the
//! status of the position it produced; it carries enough to render algebraic
//! notation or replay the move in a presentation layer.

use std::fmt;

use crate::game_state::chess_types::{Color, Piece, PieceType};
use crate::game_state::square::Square;

/// Candidate move supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceType) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CastleKind {
    #[default]
    None,
    /// Kingside.
    Short,
    /// Queenside.
    Long,
}

/// Classification of a position for the side to move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    #[default]
    InProgress,
    Check,
    Stalemate,
    Draw,
    InsufficientMaterial,
    WhiteWins,
    BlackWins,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress | GameStatus::Check)
    }

    /// The checkmate status in favour of `winner`.
    #[inline]
    pub const fn win_for(winner: Color) -> Self {
        match winner {
            Color::White => GameStatus::WhiteWins,
            Color::Black => GameStatus::BlackWins,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::InProgress => "In progress",
            GameStatus::Check => "Check",
            GameStatus::Stalemate => "Stalemate",
            GameStatus::Draw => "Draw",
            GameStatus::InsufficientMaterial => "Insufficient material",
            GameStatus::WhiteWins => "White wins",
            GameStatus::BlackWins => "Black wins",
        };
        f.write_str(text)
    }
}

/// A committed move and its consequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedMove {
    pub status: GameStatus,
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub castle: CastleKind,
    pub en_passant: bool,
    pub capture: Option<PieceType>,
    pub promotion: Option<PieceType>,
    pub disambiguate_file: bool,
    pub disambiguate_rank: bool,
}

impl QualifiedMove {
    /// Algebraic notation without move numbers, e.g. `Nbd7`, `exd6`,
    /// `fxg1=N+`, `O-O-O`, `Qh4#`.
    pub fn partial_algebraic_notation(&self) -> String {
        let mut out = String::with_capacity(8);

        match self.castle {
            CastleKind::Short => out.push_str("O-O"),
            CastleKind::Long => out.push_str("O-O-O"),
            CastleKind::None => {
                let is_pawn = self.piece.piece_type == PieceType::Pawn;
                if !is_pawn {
                    out.push(self.piece.piece_type.letter());
                }
                if self.disambiguate_file || (is_pawn && self.capture.is_some()) {
                    out.push(self.from.file().to_char());
                }
                if self.disambiguate_rank {
                    out.push(self.from.rank().to_char());
                }
                if self.capture.is_some() {
                    out.push('x');
                }
                out.push_str(&self.to.to_string());
                if let Some(promotion) = self.promotion {
                    out.push('=');
                    out.push(promotion.letter());
                }
            }
        }

        match self.status {
            GameStatus::WhiteWins | GameStatus::BlackWins => out.push('#'),
            GameStatus::Check => out.push('+'),
            _ => {}
        }

        out
    }

    /// The candidate move that reproduces this one.
    pub fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

impl fmt::Display for QualifiedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.partial_algebraic_notation())
    }
}

/// Accumulates the facts of a move while it is being applied.
#[derive(Debug, Clone)]
pub struct QualifiedMoveBuilder {
    status: GameStatus,
    piece: Piece,
    from: Square,
    to: Square,
    castle: CastleKind,
    en_passant: bool,
    capture: Option<PieceType>,
    promotion: Option<PieceType>,
    disambiguate_file: bool,
    disambiguate_rank: bool,
}

impl QualifiedMoveBuilder {
    pub fn new(piece: Piece, from: Square, to: Square) -> Self {
        Self {
            status: GameStatus::InProgress,
            piece,
            from,
            to,
            castle: CastleKind::None,
            en_passant: false,
            capture: None,
            promotion: None,
            disambiguate_file: false,
            disambiguate_rank: false,
        }
    }

    pub fn status(&mut self, status: GameStatus) -> &mut Self {
        self.status = status;
        self
    }

    pub fn castle(&mut self, castle: CastleKind) -> &mut Self {
        self.castle = castle;
        self
    }

    pub fn en_passant(&mut self, en_passant: bool) -> &mut Self {
        self.en_passant = en_passant;
        self
    }

    pub fn capture(&mut self, capture: Option<PieceType>) -> &mut Self {
        self.capture = capture;
        self
    }

    pub fn promotion(&mut self, promotion: Option<PieceType>) -> &mut Self {
        self.promotion = promotion;
        self
    }

    pub fn disambiguate_file(&mut self) -> &mut Self {
        self.disambiguate_file = true;
        self
    }

    pub fn disambiguate_rank(&mut self) -> &mut Self {
        self.disambiguate_rank = true;
        self
    }

    pub fn build(&self) -> QualifiedMove {
        QualifiedMove {
            status: self.status,
            piece: self.piece,
            from: self.from,
            to: self.to,
            castle: self.castle,
            en_passant: self.en_passant,
            capture: self.capture,
            promotion: self.promotion,
            disambiguate_file: self.disambiguate_file,
            disambiguate_rank: self.disambiguate_rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleKind, GameStatus, Move, QualifiedMoveBuilder};
    use crate::game_state::chess_types::{Color, Piece, PieceType};
    use crate::game_state::square::Square;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn quiet_piece_move() {
        let mv = QualifiedMoveBuilder::new(
            Piece::new(PieceType::Knight, Color::White),
            sq("g1"),
            sq("f3"),
        )
        .build();
        assert_eq!(mv.partial_algebraic_notation(), "Nf3");
    }

    #[test]
    fn pawn_capture_always_names_its_file() {
        let mv = QualifiedMoveBuilder::new(
            Piece::new(PieceType::Pawn, Color::White),
            sq("e5"),
            sq("d6"),
        )
        .capture(Some(PieceType::Pawn))
        .en_passant(true)
        .build();
        assert_eq!(mv.to_string(), "exd6");
    }

    #[test]
    fn disambiguation_and_suffixes() {
        let mv = QualifiedMoveBuilder::new(
            Piece::new(PieceType::Rook, Color::Black),
            sq("a8"),
            sq("a4"),
        )
        .disambiguate_rank()
        .status(GameStatus::Check)
        .build();
        assert_eq!(mv.partial_algebraic_notation(), "R8a4+");

        let mv = QualifiedMoveBuilder::new(
            Piece::new(PieceType::Queen, Color::White),
            sq("h4"),
            sq("e1"),
        )
        .disambiguate_file()
        .disambiguate_rank()
        .capture(Some(PieceType::Rook))
        .status(GameStatus::WhiteWins)
        .build();
        assert_eq!(mv.partial_algebraic_notation(), "Qh4xe1#");
    }

    #[test]
    fn promotion_and_castles() {
        let mv = QualifiedMoveBuilder::new(
            Piece::new(PieceType::Pawn, Color::Black),
            sq("f2"),
            sq("g1"),
        )
        .capture(Some(PieceType::Knight))
        .promotion(Some(PieceType::Knight))
        .status(GameStatus::Check)
        .build();
        assert_eq!(mv.partial_algebraic_notation(), "fxg1=N+");
        assert_eq!(
            mv.as_move(),
            Move::with_promotion(sq("f2"), sq("g1"), PieceType::Knight)
        );

        let mut builder = QualifiedMoveBuilder::new(
            Piece::new(PieceType::King, Color::White),
            sq("e1"),
            sq("c1"),
        );
        builder.castle(CastleKind::Long);
        assert_eq!(builder.build().partial_algebraic_notation(), "O-O-O");
        builder.castle(CastleKind::Short).status(GameStatus::Check);
        assert_eq!(builder.build().partial_algebraic_notation(), "O-O+");
    }

    #[test]
    fn terminal_statuses() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(!GameStatus::Check.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(GameStatus::InsufficientMaterial.is_terminal());
        assert_eq!(GameStatus::win_for(Color::Black), GameStatus::BlackWins);
    }

    #[test]
    fn candidate_move_display() {
        let mv = Move::with_promotion(sq("e7"), sq("e8"), PieceType::Queen);
        assert_eq!(mv.to_string(), "e7e8q");
        assert_eq!(Move::new(sq("g1"), sq("f3")).to_string(), "g1f3");
    }
}
