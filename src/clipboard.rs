use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::payload::Payload;

/// Seam to the shared clipboard resource.
///
/// Platform backends (Win32, Wayland, X11, ...) live outside this crate; the
/// engine only needs a poll that must not block indefinitely and a
/// fire-and-forget write used when an entry is restored.
pub trait Clipboard: Send {
    /// Current clipboard content, or `None` when empty/unreadable.
    fn poll(&mut self) -> Result<Option<Payload>>;

    /// Push a payload back onto the clipboard.
    fn write(&mut self, payload: &Payload) -> Result<()>;
}

/// In-process clipboard, used by tests and headless embeddings.
///
/// Clones share the same slot, so a test can keep a handle while the monitor
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    slot: Arc<Mutex<Option<Payload>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, payload: Option<Payload>) {
        *self.slot.lock().unwrap() = payload;
    }

    pub fn current(&self) -> Option<Payload> {
        self.slot.lock().unwrap().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn poll(&mut self) -> Result<Option<Payload>> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn write(&mut self, payload: &Payload) -> Result<()> {
        *self.slot.lock().unwrap() = Some(payload.clone());
        Ok(())
    }
}
