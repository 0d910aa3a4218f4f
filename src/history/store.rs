use std::collections::VecDeque;

use log::debug;
use uuid::Uuid;

use super::entry::{EntryView, HistoryEntry};

/// Number of entries retained when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 20;

/// Bounded, insertion-ordered clipboard history, index 0 = most recent.
///
/// The store exclusively owns its entries; eviction drops them, releasing
/// derived previews with them. Exceeding capacity is only ever transient
/// inside `insert_front`, never observable from outside.
#[derive(Debug)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently inserted entry, if any.
    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Prepend an entry and evict from the tail until the bound holds.
    ///
    /// Atomic from the caller's perspective: by the time this returns,
    /// `len() <= capacity()` again. With capacity 0 the entry is dropped
    /// immediately and the store stays empty.
    pub fn insert_front(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.evict_tail();
        }
        assert!(
            self.entries.len() <= self.capacity,
            "history store exceeded capacity after insert"
        );
    }

    /// Drop the oldest entry, releasing its payload and preview.
    pub fn evict_tail(&mut self) {
        if let Some(evicted) = self.entries.pop_back() {
            debug!("evicting history entry {} ({})", evicted.id(), evicted.title());
        }
    }

    /// Read-only views for presentation, newest first. Ownership of the
    /// underlying entries stays with the store.
    pub fn snapshot(&self) -> Vec<EntryView> {
        self.entries.iter().map(HistoryEntry::view).collect()
    }
}
