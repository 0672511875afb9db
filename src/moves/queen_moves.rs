use crate::game_state::square::Square;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

#[inline]
pub fn queen_moves(square: Square) -> Vec<Square> {
    let mut out = bishop_moves(square);
    out.extend(rook_moves(square));
    out
}

#[cfg(test)]
mod tests {
    use super::queen_moves;

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        let d4 = "d4".parse().expect("d4 should parse");
        assert_eq!(queen_moves(d4).len(), 27);
    }
}
