//! Clipboard history engine: turns polled clipboard snapshots into a bounded,
//! deduplicated, newest-first history of text and image entries.
//!
//! Platform clipboard access stays behind the [`Clipboard`] trait; everything
//! else (change detection, identity hashing, previews, the bounded store, and
//! the polling monitor) lives here.

mod clipboard;
mod detector;
mod error;
mod history;
mod identity;
mod monitor;
mod payload;
mod settings;
pub mod thumbnail;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use detector::{Action, ChangeDetector};
pub use error::SnapshotError;
pub use history::{EntryView, HistoryEntry, HistoryStore, DEFAULT_CAPACITY};
pub use identity::{identity_of, IdentityKey};
pub use monitor::MonitorController;
pub use payload::{ImageData, Payload};
pub use settings::{MonitorSettings, SettingsStore, DEFAULT_POLL_INTERVAL_MS};
