//! Geometry helpers shared by the per-piece generators and legality checks.

use crate::game_state::square::Square;

/// Squares reached by applying each `(d_file, d_rank)` offset once, clipped to
/// the board.
pub fn offset_targets(square: Square, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_file, d_rank)| square.add(d_file, d_rank))
        .collect()
}

/// Every square along each direction up to the board edge, ignoring
/// occupancy.
pub fn ray_targets(square: Square, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    for &(d_file, d_rank) in directions {
        let mut current = square;
        while let Some(next) = current.add(d_file, d_rank) {
            out.push(next);
            current = next;
        }
    }
    out
}

/// Squares strictly between `from` and `to` when they share a rank, file or
/// diagonal; `None` when they are not aligned or are the same square.
pub fn squares_between(from: Square, to: Square) -> Option<Vec<Square>> {
    let d_file = to.file().sub(from.file());
    let d_rank = to.rank().sub(from.rank());

    let aligned = d_file == 0 || d_rank == 0 || d_file.abs() == d_rank.abs();
    if from == to || !aligned {
        return None;
    }

    let step_file = d_file.signum();
    let step_rank = d_rank.signum();
    let mut out = Vec::new();
    let mut current = from.unchecked_add(step_file, step_rank);
    while current != to {
        out.push(current);
        current = current.unchecked_add(step_file, step_rank);
    }
    Some(out)
}
