pub mod entry;
pub mod store;

pub use entry::{EntryView, HistoryEntry};
pub use store::{HistoryStore, DEFAULT_CAPACITY};
