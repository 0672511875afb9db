use crate::game_state::square::Square;
use crate::move_generation::legal_move_shared::ray_targets;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Every square on the rank and file of `square`, blockers ignored.
#[inline]
pub fn rook_moves(square: Square) -> Vec<Square> {
    ray_targets(square, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::rook_moves;

    #[test]
    fn rook_always_sees_fourteen_squares() {
        for text in ["a1", "d4", "h8", "e1"] {
            let square = text.parse().expect("test square should parse");
            assert_eq!(rook_moves(square).len(), 14, "rook on {text}");
        }
    }
}
