use std::fmt::{self, Display, Formatter};

use separator::Separatable;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    created: usize,
    duplicates: usize,
    visited: usize,
    max_depth: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    /// States produced by expanding, including duplicates. Counts the initial state too.
    pub fn total_created(&self) -> usize {
        self.created
    }

    /// Created states rejected because they were seen before.
    pub fn total_duplicates(&self) -> usize {
        self.duplicates
    }

    /// States taken out of the queue.
    pub fn total_visited(&self) -> usize {
        self.visited
    }

    /// Number of moves of the deepest visited state.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub(crate) fn add_created(&mut self) {
        self.created += 1;
    }

    pub(crate) fn add_duplicate(&mut self) {
        self.duplicates += 1;
    }

    /// Returns true if `depth` is deeper than anything visited so far.
    pub(crate) fn add_visited(&mut self, depth: usize) -> bool {
        self.visited += 1;
        if depth > self.max_depth || self.visited == 1 {
            self.max_depth = depth;
            true
        } else {
            false
        }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let unique = self.created - self.duplicates;
        writeln!(f, "States created total: {}", self.created.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", self.duplicates.separated_string())?;
        writeln!(f, "Unique states total: {}", unique.separated_string())?;
        writeln!(f, "Visited total: {}", self.visited.separated_string())?;
        writeln!(f, "Created but not visited total: {}", (unique - self.visited).separated_string())?;
        write!(f, "Max depth visited: {}", self.max_depth.separated_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting() {
        let mut stats = Stats::new();
        for _ in 0..1500 {
            stats.add_created();
        }
        stats.add_duplicate();
        assert!(stats.add_visited(0));
        assert!(stats.add_visited(1));
        assert!(!stats.add_visited(1));
        assert!(!stats.add_visited(0));

        assert_eq!(stats.total_created(), 1500);
        assert_eq!(stats.total_duplicates(), 1);
        assert_eq!(stats.total_visited(), 4);
        assert_eq!(stats.max_depth(), 1);
    }

    #[test]
    fn formatting() {
        let mut stats = Stats::new();
        for _ in 0..2000 {
            stats.add_created();
        }
        for _ in 0..10 {
            stats.add_duplicate();
        }
        stats.add_visited(0);
        stats.add_visited(3);

        let expected = "\
States created total: 2,000
Reached duplicates total: 10
Unique states total: 1,990
Visited total: 2
Created but not visited total: 1,988
Max depth visited: 3";
        assert_eq!(stats.to_string(), expected);
    }
}
