//! The undo log.
//!
//! A single global stack of `MoveRecord`s in commit order. Backed by
//! `im::Vector` so a snapshot of the whole history clones in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::record::MoveRecord;

/// Append-only (except for undo) log of committed actions.
///
/// ```
/// use klondike_engine::history::{MoveRecord, UndoLog};
/// use klondike_engine::core::CardId;
///
/// let mut log = UndoLog::new();
/// log.push(MoveRecord::Draw { card: CardId::from_raw(0).unwrap() });
///
/// assert_eq!(log.len(), 1);
/// assert!(log.pop().is_some());
/// assert!(log.pop().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoLog {
    entries: Vector<MoveRecord>,
}

impl UndoLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed action.
    pub fn push(&mut self, record: MoveRecord) {
        self.entries.push_back(record);
    }

    /// Remove and return the most recent action. `None` when empty.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.entries.pop_back()
    }

    /// The most recent action.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.entries.iter()
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
