//! Board coordinates.
//!
//! Files and ranks are 8-valued ordinals and a `Square` is a pair of them, so
//! an out-of-range square can never be constructed. Offsetting goes through
//! `add`, which returns `None` when the result would leave the board.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;

/// Board file, `A` (queenside) through `H` (kingside).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// File at zero-based `index`, or `None` outside `0..=7`.
    #[inline]
    pub fn from_index(index: i8) -> Option<Self> {
        if (0..8).contains(&index) {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    #[inline]
    pub fn add(self, delta: i8) -> Option<Self> {
        Self::from_index(self.index() as i8 + delta)
    }

    /// Signed ordinal distance `self - other`.
    #[inline]
    pub fn sub(self, other: File) -> i8 {
        self.index() as i8 - other.index() as i8
    }

    #[inline]
    pub fn to_char(self) -> char {
        char::from(b'a' + self.index() as u8)
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            c @ 'a'..='h' => Self::from_index((c as u8 - b'a') as i8),
            _ => None,
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Board rank, `One` (white's back rank) through `Eight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rank at zero-based `index`, or `None` outside `0..=7`.
    #[inline]
    pub fn from_index(index: i8) -> Option<Self> {
        if (0..8).contains(&index) {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    #[inline]
    pub fn add(self, delta: i8) -> Option<Self> {
        Self::from_index(self.index() as i8 + delta)
    }

    /// Signed ordinal distance `self - other`.
    #[inline]
    pub fn sub(self, other: Rank) -> i8 {
        self.index() as i8 - other.index() as i8
    }

    #[inline]
    pub fn to_char(self) -> char {
        char::from(b'1' + self.index() as u8)
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1'..='8' => Self::from_index((ch as u8 - b'1') as i8),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Index in `0..64` with `a1 == 0`, `h1 == 7` and `h8 == 63`.
    #[inline]
    pub const fn index(self) -> usize {
        self.rank.index() * 8 + self.file.index()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= 64 {
            return None;
        }
        Some(Self::new(File::ALL[index % 8], Rank::ALL[index / 8]))
    }

    /// Every square in index order (a1, b1, ... h8).
    pub fn all() -> impl Iterator<Item = Square> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| File::ALL.into_iter().map(move |file| Square::new(file, rank)))
    }

    /// The square `d_file` files and `d_rank` ranks away, if it is on the board.
    #[inline]
    pub fn add(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Some(Self::new(self.file.add(d_file)?, self.rank.add(d_rank)?))
    }

    /// Like `add` for offsets the caller has already proven valid.
    ///
    /// # Panics
    /// If the resulting square is off the board.
    pub fn unchecked_add(self, d_file: i8, d_rank: i8) -> Self {
        match self.add(d_file, d_rank) {
            Some(square) => square,
            None => panic!("square {self} offset by ({d_file}, {d_rank}) leaves the board"),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChessError::InvalidSquare(s.to_owned()));
        };

        match (File::from_char(file), Rank::from_char(rank)) {
            (Some(file), Some(rank)) => Ok(Square::new(file, rank)),
            _ => Err(ChessError::InvalidSquare(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{File, Rank, Square};
    use crate::errors::ChessError;

    #[test]
    fn add_stays_inside_the_board() {
        let a1 = Square::new(File::A, Rank::One);
        assert_eq!(a1.add(-1, 0), None);
        assert_eq!(a1.add(0, -1), None);
        assert_eq!(a1.add(7, 7), Some(Square::new(File::H, Rank::Eight)));
        assert_eq!(File::H.add(1), None);
        assert_eq!(Rank::Eight.add(-7), Some(Rank::One));
    }

    #[test]
    #[should_panic]
    fn unchecked_add_panics_off_board() {
        let h1 = Square::new(File::H, Rank::One);
        let _ = h1.unchecked_add(1, 0);
    }

    #[test]
    fn index_and_display_agree_with_algebraic_coordinates() {
        let e4: Square = "e4".parse().expect("e4 should parse");
        assert_eq!(e4, Square::new(File::E, Rank::Four));
        assert_eq!(e4.index(), 28);
        assert_eq!(e4.to_string(), "e4");
        assert_eq!(Square::from_index(63), Some(Square::new(File::H, Rank::Eight)));
        assert_eq!(Square::from_index(64), None);
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::all().nth(8), Some(Square::new(File::A, Rank::Two)));
    }

    #[test]
    fn parse_rejects_malformed_squares() {
        for text in ["", "e", "e9", "i4", "e44", "4e"] {
            assert_eq!(
                text.parse::<Square>(),
                Err(ChessError::InvalidSquare(text.to_owned()))
            );
        }
        assert_eq!("E2".parse::<Square>(), Ok(Square::new(File::E, Rank::Two)));
    }

    #[test]
    fn sub_is_signed_distance() {
        assert_eq!(File::G.sub(File::E), 2);
        assert_eq!(Rank::Two.sub(Rank::Four), -2);
    }
}
