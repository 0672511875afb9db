//! 8x8 mailbox board.
//!
//! `Board` is a plain grid of optional pieces. Its mutations are unchecked:
//! they never consult the rules, only the square type's bounds. The game state
//! machine owns the authoritative board; everyone else works on clones.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceType};
use crate::game_state::square::{File, Rank, Square};

/// Length of a board hash: one character per square.
pub const BOARD_HASH_LEN: usize = 64;

const EMPTY_SQUARE_CHAR: char = '.';

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// A piece together with the square it stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPiece {
    pub piece: Piece,
    pub square: Square,
}

impl BoardPiece {
    #[inline]
    pub fn piece_type(&self) -> PieceType {
        self.piece.piece_type
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.piece.color
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // [rank][file]
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (file, piece_type) in File::ALL.into_iter().zip(BACK_RANK) {
            for color in [Color::White, Color::Black] {
                let back = color.back_rank();
                let pawns = back.add(color.forward()).unwrap_or(back);
                board.set_piece(Square::new(file, back), Piece::new(piece_type, color));
                board.set_piece(Square::new(file, pawns), Piece::new(PieceType::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn piece(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank().index()][square.file().index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece(square).is_none()
    }

    /// Every occupied square, in a1..h8 order.
    pub fn pieces(&self) -> Vec<BoardPiece> {
        Square::all()
            .filter_map(|square| self.piece(square).map(|piece| BoardPiece { piece, square }))
            .collect()
    }

    /// Occupied squares of one color.
    pub fn pieces_of(&self, color: Color) -> Vec<BoardPiece> {
        self.pieces()
            .into_iter()
            .filter(|bp| bp.color() == color)
            .collect()
    }

    /// The king of `color`, if there is one on the board.
    pub fn find_king(&self, color: Color) -> Option<BoardPiece> {
        let king = Piece::new(PieceType::King, color);
        Square::all()
            .find(|square| self.piece(*square) == Some(king))
            .map(|square| BoardPiece { piece: king, square })
    }

    /// The king of `color`.
    ///
    /// # Panics
    /// If `color` has no king; a game position without one is corrupted.
    pub fn king(&self, color: Color) -> BoardPiece {
        match self.find_king(color) {
            Some(king) => king,
            None => panic!("no {color} king on the board"),
        }
    }

    /// Unchecked relocation; whatever stood on `to` is overwritten.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let piece = self.squares[from.rank().index()][from.file().index()].take();
        self.squares[to.rank().index()][to.file().index()] = piece;
    }

    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.squares[square.rank().index()][square.file().index()] = Some(piece);
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank().index()][square.file().index()].take()
    }

    /// Fixed-width placement fingerprint, a1 first, `.` for empty squares.
    pub fn to_hash(&self) -> String {
        Square::all()
            .map(|square| {
                self.piece(square)
                    .map_or(EMPTY_SQUARE_CHAR, Piece::to_char)
            })
            .collect()
    }

    /// Inverse of `to_hash`.
    pub fn from_hash(hash: &str) -> ChessResult<Self> {
        if hash.chars().count() != BOARD_HASH_LEN {
            return Err(ChessError::InvalidBoardHash(hash.to_owned()));
        }

        let mut board = Self::empty();
        for (square, ch) in Square::all().zip(hash.chars()) {
            if ch == EMPTY_SQUARE_CHAR {
                continue;
            }
            let piece =
                Piece::from_char(ch).ok_or_else(|| ChessError::InvalidBoardHash(hash.to_owned()))?;
            board.set_piece(square, piece);
        }
        Ok(board)
    }

    /// Replace this board's placement with the one encoded in `hash`.
    pub fn restore_hash(&mut self, hash: &str) -> ChessResult<()> {
        *self = Self::from_hash(hash)?;
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                let square = Square::new(file, rank);
                match self.piece(square) {
                    Some(piece) => write!(f, "{}", piece.symbol())?,
                    None => write!(f, "·")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
