use crate::data::Square;
use crate::square_set::SquareSet;

/// Index of a record in the `Arena`.
pub type StateId = usize;

/// Predecessor of the initial state.
pub const NO_PREDECESSOR: StateId = StateId::max_value();

pub type Score = u32;

/// One node of the search graph - everything that can change during a solve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub boxes: SquareSet,
    pub player: Square,
}

impl State {
    pub fn new(boxes: SquareSet, player: Square) -> Self {
        State { boxes, player }
    }
}

#[derive(Debug, Clone)]
pub struct StateRecord {
    pub prev: StateId,
    pub score: Score,
    /// Number of moves from the initial state.
    pub depth: usize,
    pub state: State,
}

/// Append-only storage of every state admitted during one search.
/// A record's id is its position, records are never removed or changed.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    records: Vec<StateRecord>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Arena {
            records: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, prev: StateId, score: Score, state: State) -> StateId {
        let id = self.records.len();
        let depth = if prev == NO_PREDECESSOR {
            0
        } else {
            self.records[prev].depth + 1
        };
        self.records.push(StateRecord {
            prev,
            score,
            depth,
            state,
        });
        id
    }

    pub(crate) fn get(&self, id: StateId) -> &StateRecord {
        &self.records[id]
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &StateRecord> {
        self.records.iter()
    }

    /// States from the root to `last` in chronological order.
    pub(crate) fn backtrack(&self, last: StateId) -> Vec<&State> {
        let mut path = Vec::new();
        let mut id = last;
        while id != NO_PREDECESSOR {
            let record = &self.records[id];
            path.push(&record.state);
            id = record.prev;
        }
        path.reverse();
        path
    }
}
