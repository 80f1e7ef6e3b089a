use std::hash::{BuildHasher, Hash, Hasher};

use fnv::{FnvBuildHasher, FnvHashMap};

use super::state::{Arena, Score, State, StateId};

/// Remembers which states have already been admitted into the arena.
///
/// Only ids are stored, the states themselves stay in the arena. Ids are bucketed
/// by a hash of the state's contents, boxes are always iterated in sorted order
/// so the hash is stable for equal states.
#[derive(Debug, Default)]
pub(crate) struct StateIndex {
    hasher: FnvBuildHasher,
    buckets: FnvHashMap<u64, Vec<StateId>>,
}

impl StateIndex {
    pub(crate) fn new() -> Self {
        StateIndex {
            hasher: FnvBuildHasher::default(),
            buckets: FnvHashMap::default(),
        }
    }

    /// Pushes `state` into `arena` unless an equal state is already there.
    ///
    /// `score` is only called for new states. Returns the id of the new record.
    pub(crate) fn admit<F>(
        &mut self,
        arena: &mut Arena,
        prev: StateId,
        state: State,
        score: F,
    ) -> Option<StateId>
    where
        F: FnOnce(&State) -> Score,
    {
        let hash = self.hash(&state);
        let bucket = self.buckets.entry(hash).or_insert_with(Vec::new);
        if bucket.iter().any(|&id| arena.get(id).state == state) {
            return None;
        }

        let score = score(&state);
        let id = arena.push(prev, score, state);
        bucket.push(id);
        Some(id)
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
    }

    fn hash(&self, state: &State) -> u64 {
        let mut hasher = self.hasher.build_hasher();
        state.hash(&mut hasher);
        hasher.finish()
    }
}
