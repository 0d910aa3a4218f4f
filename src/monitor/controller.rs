use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};
use log::info;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::clipboard::Clipboard;
use crate::detector::ChangeDetector;
use crate::history::{EntryView, HistoryStore};
use crate::settings::MonitorSettings;

use super::loop_worker::{monitor_loop, SharedClipboard, SharedStore};

/// Owns the polling task and the shared history store.
///
/// `start` spawns the monitor loop; `stop` cancels it and joins the task.
/// Presentation reads go through `history_snapshot`, restores through
/// `restore`; both are safe while the loop is running because all store
/// access funnels through one mutex.
pub struct MonitorController {
    store: SharedStore,
    clipboard: Option<SharedClipboard>,
    handle: Option<JoinHandle<()>>,
    cancel_token: Option<CancellationToken>,
}

impl MonitorController {
    pub fn new(settings: &MonitorSettings) -> Self {
        Self {
            store: Arc::new(Mutex::new(HistoryStore::new(settings.capacity))),
            clipboard: None,
            handle: None,
            cancel_token: None,
        }
    }

    pub fn start(
        &mut self,
        clipboard: impl Clipboard + 'static,
        settings: &MonitorSettings,
    ) -> Result<()> {
        if self.handle.is_some() {
            bail!("clipboard monitor already running");
        }

        let clipboard: SharedClipboard = Arc::new(Mutex::new(Box::new(clipboard)));
        let detector = ChangeDetector::new(settings.preview_height);
        let cancel_token = CancellationToken::new();

        info!(
            "starting clipboard monitor (capacity {}, poll every {}ms)",
            settings.capacity, settings.poll_interval_ms
        );
        let handle = tokio::spawn(monitor_loop(
            clipboard.clone(),
            self.store.clone(),
            detector,
            Duration::from_millis(settings.poll_interval_ms),
            cancel_token.clone(),
        ));

        self.clipboard = Some(clipboard);
        self.handle = Some(handle);
        self.cancel_token = Some(cancel_token);
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<()> {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        if let Some(handle) = self.handle.take() {
            handle
                .await
                .context("clipboard monitor task failed to join")?;
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Shared handle to the store, for embedders that render directly.
    pub fn history(&self) -> SharedStore {
        self.store.clone()
    }

    /// Ordered read-only views of the current history, newest first.
    pub fn history_snapshot(&self) -> Vec<EntryView> {
        self.store.lock().unwrap().snapshot()
    }

    /// Write the payload of a history entry back onto the clipboard.
    pub fn restore(&self, id: Uuid) -> Result<()> {
        let payload = {
            let store = self.store.lock().unwrap();
            match store.get(id) {
                Some(entry) => entry.payload().clone(),
                None => bail!("no history entry with id {id}"),
            }
        };

        let Some(clipboard) = &self.clipboard else {
            bail!("clipboard monitor not started");
        };
        clipboard
            .lock()
            .unwrap()
            .write(&payload)
            .context("failed to write restored payload to clipboard")?;
        info!("restored history entry {id}");
        Ok(())
    }
}
