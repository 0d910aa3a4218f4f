use log::warn;

use crate::history::{HistoryEntry, HistoryStore};
use crate::identity::identity_of;
use crate::payload::Payload;
use crate::thumbnail::DEFAULT_PREVIEW_HEIGHT;

/// Outcome of one observe cycle.
#[derive(Debug)]
pub enum Action {
    NoOp,
    Insert(HistoryEntry),
}

/// Decides whether a freshly polled snapshot is a genuine change.
///
/// Comparison is always against the newest entry only: the question being
/// answered is "did the clipboard change since the last observation", not
/// "have we ever seen this". Re-copying something from deeper in history is a
/// genuine change and legitimately re-surfaces it at the top.
#[derive(Debug, Clone)]
pub struct ChangeDetector {
    preview_height: u32,
}

impl Default for ChangeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_HEIGHT)
    }
}

impl ChangeDetector {
    pub fn new(preview_height: u32) -> Self {
        Self { preview_height }
    }

    /// Compare a snapshot against the newest entry and build the insertion if
    /// it represents a change.
    ///
    /// Payload-level failures (unencodable or zero-sized images) are logged
    /// and recovered as `NoOp`; missing an update is preferable to inserting
    /// a malformed entry.
    pub fn observe(&self, store: &HistoryStore, snapshot: Option<Payload>) -> Action {
        let Some(payload) = snapshot else {
            return Action::NoOp;
        };

        let identity = match identity_of(&payload) {
            Ok(identity) => identity,
            Err(err) => {
                warn!("skipping snapshot, identity computation failed: {err}");
                return Action::NoOp;
            }
        };

        if let Some(newest) = store.newest() {
            if *newest.identity() == identity {
                return Action::NoOp;
            }
        }

        match HistoryEntry::from_parts(payload, identity, self.preview_height) {
            Ok(entry) => Action::Insert(entry),
            Err(err) => {
                warn!("skipping snapshot, entry construction failed: {err}");
                Action::NoOp
            }
        }
    }

    /// Run one full cycle: observe, then insert on change. Returns whether
    /// the store was updated.
    pub fn observe_and_apply(&self, store: &mut HistoryStore, snapshot: Option<Payload>) -> bool {
        match self.observe(store, snapshot) {
            Action::Insert(entry) => {
                store.insert_front(entry);
                true
            }
            Action::NoOp => false,
        }
    }
}
