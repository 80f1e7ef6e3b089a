/// Runtime options of the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Precompute squares from which a lone box can never reach a goal
    /// and refuse to push boxes onto them.
    pub dead_squares: bool,
}

impl SolverConfig {
    pub fn new(dead_squares: bool) -> Self {
        SolverConfig { dead_squares }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig { dead_squares: true }
    }
}
