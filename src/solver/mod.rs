mod dead_squares;
mod expand;
mod heuristic;
mod index;
mod state;
mod stats;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use log::{info, log, Level as LogLevel};

use crate::config::SolverConfig;
use crate::level::Level;
use crate::square_set::SquareSet;
use crate::Solve;

use self::index::StateIndex;
use self::state::{Arena, StateId, NO_PREDECESSOR};

pub use self::state::{Score, State, StateRecord};
pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    OutOfBounds,
    PlayerNotOnFloor,
    PlayerOnBox,
    BoxesGoals,
    BoxNotOnFloor,
    GoalNotOnFloor,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::OutOfBounds => write!(
                f,
                "Floor outside of the {0}x{0} level area",
                crate::data::MAX_SIZE
            ),
            SolverErr::PlayerNotOnFloor => write!(f, "Player is not on a floor square"),
            SolverErr::PlayerOnBox => write!(f, "Player is on the same square as a box"),
            SolverErr::BoxesGoals => write!(f, "Different number of boxes and goals"),
            SolverErr::BoxNotOnFloor => write!(f, "Box is not on a floor square"),
            SolverErr::GoalNotOnFloor => write!(f, "Goal is not on a floor square"),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// From the initial level to the solved one, empty if there's no solution.
    pub steps: Vec<Level>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(steps: Vec<Level>, stats: Stats) -> Self {
        SolverOk { steps, stats }
    }

    pub fn is_solved(&self) -> bool {
        !self.steps.is_empty()
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            writeln!(f, "No solution")?;
        } else {
            writeln!(f, "Moves: {}", self.steps.len() - 1)?;
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, config: SolverConfig) -> Result<SolverOk, SolverErr> {
        let mut solver = Solver::new(config);
        let steps = solver.solve(self)?;
        Ok(SolverOk::new(steps, *solver.stats()))
    }
}

/// Greedy best-first search over (boxes, player) states.
///
/// Always expands the state with the lowest score, ties go to the state created first.
/// Path length is not taken into account so the solution found is usually not the shortest.
///
/// All the bookkeeping lives here and is reset by every call to `solve`,
/// afterwards it stays around so it can be inspected.
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    level: Level,
    dead_squares: SquareSet,
    arena: Arena,
    index: StateIndex,
    to_visit: BinaryHeap<Reverse<(Score, StateId)>>,
    stats: Stats,
    /// Level of the per-search log records, sub-searches only log at trace.
    log_level: LogLevel,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self::with_log_level(config, LogLevel::Debug)
    }

    /// Solver for searches run as a part of another one.
    pub(crate) fn nested(config: SolverConfig) -> Self {
        Self::with_log_level(config, LogLevel::Trace)
    }

    fn with_log_level(config: SolverConfig, log_level: LogLevel) -> Self {
        Solver {
            config,
            level: Level::new(
                Default::default(),
                SquareSet::new(),
                SquareSet::new(),
                SquareSet::new(),
            ),
            dead_squares: SquareSet::new(),
            arena: Arena::new(),
            index: StateIndex::new(),
            to_visit: BinaryHeap::new(),
            stats: Stats::new(),
            log_level,
        }
    }

    /// Returns the levels from the initial one to a solved one,
    /// or an empty vector if there is no solution.
    pub fn solve(&mut self, level: &Level) -> Result<Vec<Level>, SolverErr> {
        level.validate()?;
        self.reset(level);

        if self.config.dead_squares {
            self.dead_squares = dead_squares::find_dead_squares(&self.level);
        }

        let steps = match self.search() {
            Some(last) => self.steps(last),
            None => Vec::new(),
        };
        log!(
            self.log_level,
            "Search done: {} states, {} queued",
            self.state_count(),
            self.queue_len()
        );
        if self.log_level != LogLevel::Trace {
            info!("{}", self.stats);
        }
        Ok(steps)
    }

    /// Number of unique states seen by the last search.
    pub fn state_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of states still waiting in the queue after the last search.
    pub fn queue_len(&self) -> usize {
        self.to_visit.len()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn dead_squares(&self) -> &SquareSet {
        &self.dead_squares
    }

    /// Every state admitted by the last search in the order they were found.
    pub fn states(&self) -> impl Iterator<Item = &StateRecord> {
        self.arena.iter()
    }

    fn reset(&mut self, level: &Level) {
        self.level = level.clone();
        self.dead_squares.clear();
        self.arena.clear();
        self.index.clear();
        self.to_visit.clear();
        self.stats = Stats::new();
    }

    fn search(&mut self) -> Option<StateId> {
        log!(self.log_level, "Search called");

        let initial = State::new(self.level.boxes.clone(), self.level.player);
        self.stats.add_created();
        self.admit(NO_PREDECESSOR, initial);

        while let Some(Reverse((score, cur_id))) = self.to_visit.pop() {
            let depth = self.arena.get(cur_id).depth;
            if self.stats.add_visited(depth) {
                log!(self.log_level, "Visited new depth: {}", depth);
            }

            if score == 0 {
                log!(self.log_level, "Solved, backtracking path");
                return Some(cur_id);
            }

            let new_states = expand::expand(
                &self.level,
                &self.dead_squares,
                &self.arena.get(cur_id).state,
            );
            for new_state in new_states {
                self.stats.add_created();
                if !self.admit(cur_id, new_state) {
                    self.stats.add_duplicate();
                }
            }
        }

        None
    }

    /// Scores and queues the state unless it's been seen before.
    fn admit(&mut self, prev: StateId, state: State) -> bool {
        let goals = &self.level.goals;
        let new_id = self
            .index
            .admit(&mut self.arena, prev, state, |s| heuristic::score(goals, s));
        match new_id {
            Some(id) => {
                let score = self.arena.get(id).score;
                self.to_visit.push(Reverse((score, id)));
                true
            }
            None => false,
        }
    }

    fn steps(&self, last: StateId) -> Vec<Level> {
        self.arena
            .backtrack(last)
            .into_iter()
            .map(|state| {
                let mut step = self.level.clone();
                step.player = state.player;
                step.boxes = state.boxes.clone();
                step
            })
            .collect()
    }
}
