use crate::game_state::square::Square;
use crate::move_generation::legal_move_shared::offset_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Knight targets from `square`, occupancy ignored.
#[inline]
pub fn knight_moves(square: Square) -> Vec<Square> {
    offset_targets(square, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::knight_moves;

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let d4 = "d4".parse().expect("d4 should parse");
        assert_eq!(knight_moves(d4).len(), 8);
    }

    #[test]
    fn knight_in_the_corner_has_two_targets() {
        let h8 = "h8".parse().expect("h8 should parse");
        let targets = knight_moves(h8);
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&"f7".parse().expect("f7 should parse")));
        assert!(targets.contains(&"g6".parse().expect("g6 should parse")));
    }
}
