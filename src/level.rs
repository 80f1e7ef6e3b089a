use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Square, MAX_SIZE};
use crate::solver::SolverErr;
use crate::square_set::SquareSet;

/// A full board configuration.
///
/// Anything that isn't in `floors` is a wall. During a solve the floors and goals never change,
/// each step of a solution is the same level with a different player and boxes.
#[derive(Clone, PartialEq, Eq)]
pub struct Level {
    pub player: Square,
    pub boxes: SquareSet,
    pub goals: SquareSet,
    /// Superset of player, boxes and goals.
    pub floors: SquareSet,
}

impl Level {
    pub fn new(player: Square, boxes: SquareSet, goals: SquareSet, floors: SquareSet) -> Self {
        Level {
            player,
            boxes,
            goals,
            floors,
        }
    }

    /// Checks everything the solver assumes about a level.
    pub fn validate(&self) -> Result<(), SolverErr> {
        // keeps a square and its neighbors from wrapping around the coordinate range
        let in_bounds = |sq: &Square| {
            (0..MAX_SIZE as i8).contains(&sq.x) && (0..MAX_SIZE as i8).contains(&sq.y)
        };
        if !self.floors.iter().all(in_bounds) {
            return Err(SolverErr::OutOfBounds);
        }
        if !self.floors.contains(self.player) {
            return Err(SolverErr::PlayerNotOnFloor);
        }
        if self.boxes.contains(self.player) {
            return Err(SolverErr::PlayerOnBox);
        }
        if self.boxes.len() != self.goals.len() {
            return Err(SolverErr::BoxesGoals);
        }
        if !self.boxes.is_subset(&self.floors) {
            return Err(SolverErr::BoxNotOnFloor);
        }
        if !self.goals.is_subset(&self.floors) {
            return Err(SolverErr::GoalNotOnFloor);
        }
        Ok(())
    }

    pub fn is_solved(&self) -> bool {
        self.boxes == self.goals
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // walls are implicit so print one extra row and column past the last floor
        let max_x = self.floors.iter().map(|sq| sq.x).max().unwrap_or(0);
        let max_y = self.floors.iter().map(|sq| sq.y).max().unwrap_or(0);

        for y in 0..=max_y.saturating_add(1) {
            for x in 0..=max_x.saturating_add(1) {
                let square = Square::new(x, y);
                let is_goal = self.goals.contains(square);
                let c = if self.player == square {
                    if is_goal {
                        '+'
                    } else {
                        '@'
                    }
                } else if self.boxes.contains(square) {
                    if is_goal {
                        '*'
                    } else {
                        '$'
                    }
                } else if is_goal {
                    '.'
                } else if self.floors.contains(square) {
                    ' '
                } else {
                    '#'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "player: {}", self.player)?;
        write!(f, "{}", self)
    }
}
