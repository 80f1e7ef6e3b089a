use crate::square_set::SquareSet;

use super::state::{Score, State};

/// Less is better, 0 means solved.
///
/// Pairs the i-th box with the i-th goal (both sorted) and sums their manhattan distances.
/// This is not the cheapest assignment of boxes to goals, so it's neither admissible
/// nor consistent, but it's cheap and it's exactly 0 when the boxes cover the goals.
pub(crate) fn score(goals: &SquareSet, state: &State) -> Score {
    state
        .boxes
        .iter()
        .zip(goals.iter())
        .map(|(&box_pos, &goal)| box_pos.dist(goal))
        .sum()
}
