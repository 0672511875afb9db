use crate::game_state::chess_types::Color;

/// Castling availability for both sides.
///
/// Values are immutable; every transition returns a new value. Rights are
/// only ever revoked by play and come back only through undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    white_kingside: bool,
    white_queenside: bool,
    black_kingside: bool,
    black_queenside: bool,
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastleRights {
    pub const fn new(
        white_kingside: bool,
        white_queenside: bool,
        black_kingside: bool,
        black_queenside: bool,
    ) -> Self {
        Self {
            white_kingside,
            white_queenside,
            black_kingside,
            black_queenside,
        }
    }

    pub const fn all() -> Self {
        Self::new(true, true, true, true)
    }

    pub const fn none() -> Self {
        Self::new(false, false, false, false)
    }

    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    #[must_use]
    pub const fn disable_kingside(self, color: Color) -> Self {
        match color {
            Color::White => Self {
                white_kingside: false,
                ..self
            },
            Color::Black => Self {
                black_kingside: false,
                ..self
            },
        }
    }

    #[must_use]
    pub const fn disable_queenside(self, color: Color) -> Self {
        match color {
            Color::White => Self {
                white_queenside: false,
                ..self
            },
            Color::Black => Self {
                black_queenside: false,
                ..self
            },
        }
    }

    #[must_use]
    pub const fn disable_both(self, color: Color) -> Self {
        self.disable_kingside(color).disable_queenside(color)
    }

    /// Keep a right only where `other` also grants it.
    #[must_use]
    pub const fn intersect(self, other: CastleRights) -> Self {
        Self::new(
            self.white_kingside && other.white_kingside,
            self.white_queenside && other.white_queenside,
            self.black_kingside && other.black_kingside,
            self.black_queenside && other.black_queenside,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::CastleRights;
    use crate::game_state::chess_types::Color;

    #[test]
    fn transitions_only_touch_one_color() {
        let rights = CastleRights::all().disable_kingside(Color::White);
        assert!(!rights.kingside(Color::White));
        assert!(rights.queenside(Color::White));
        assert!(rights.kingside(Color::Black));

        let rights = rights.disable_both(Color::Black);
        assert_eq!(rights, CastleRights::new(false, true, false, false));

        let rights = rights.disable_queenside(Color::White);
        assert_eq!(rights, CastleRights::none());
    }

    #[test]
    fn intersect_keeps_common_rights() {
        let a = CastleRights::new(true, true, false, true);
        let b = CastleRights::new(true, false, true, true);
        assert_eq!(a.intersect(b), CastleRights::new(true, false, false, true));
    }
}
