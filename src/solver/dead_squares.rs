use log::{debug, trace};

use crate::config::SolverConfig;
use crate::level::Level;
use crate::square_set::SquareSet;

use super::Solver;

/// Finds floor squares from which a lone box can't reach any goal.
///
/// For every floor (except under the player) and every goal, a box is put on the floor
/// and we try to get it to the goal with the player where it starts. Other boxes are ignored,
/// so some squares might only be dead (or only alive) because of how boxes interact.
///
/// The sub-searches run without dead squares, otherwise this would recurse forever.
pub(crate) fn find_dead_squares(level: &Level) -> SquareSet {
    debug!("Finding dead squares");

    let mut dead_squares = SquareSet::new();
    let mut solver = Solver::nested(SolverConfig::new(false));

    'floor: for &box_pos in &level.floors {
        if box_pos == level.player {
            continue;
        }

        for &goal in &level.goals {
            let fake_level = Level::new(
                level.player,
                Some(box_pos).into_iter().collect(),
                Some(goal).into_iter().collect(),
                level.floors.clone(),
            );
            // need to find only one goal
            match solver.solve(&fake_level) {
                Ok(ref steps) if !steps.is_empty() => {
                    trace!("{} can reach goal {}", box_pos, goal);
                    continue 'floor;
                }
                Ok(_) => {}
                Err(err) => trace!("Skipping {} -> {}: {}", box_pos, goal, err),
            }
        }

        trace!("{} is dead", box_pos);
        dead_squares.add(box_pos);
    }

    debug!("Found {} dead squares", dead_squares.len());
    dead_squares
}
