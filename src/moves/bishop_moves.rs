use crate::game_state::square::Square;
use crate::move_generation::legal_move_shared::ray_targets;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Every square on the four diagonals through `square`. Blocking is applied
/// later by the line-of-sight filter.
#[inline]
pub fn bishop_moves(square: Square) -> Vec<Square> {
    ray_targets(square, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::bishop_moves;

    #[test]
    fn bishop_rays_from_d4_have_thirteen_squares() {
        let d4 = "d4".parse().expect("d4 should parse");
        assert_eq!(bishop_moves(d4).len(), 13);
    }

    #[test]
    fn bishop_rays_ignore_blockers() {
        let c1 = "c1".parse().expect("c1 should parse");
        let targets = bishop_moves(c1);
        assert_eq!(targets.len(), 7);
        assert!(targets.contains(&"h6".parse().expect("h6 should parse")));
    }
}
