use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use log::{error, info};
use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::clipboard::Clipboard;
use crate::detector::{Action, ChangeDetector};
use crate::history::HistoryStore;

pub(crate) type SharedClipboard = Arc<Mutex<Box<dyn Clipboard>>>;
pub(crate) type SharedStore = Arc<Mutex<HistoryStore>>;

pub(crate) async fn monitor_loop(
    clipboard: SharedClipboard,
    store: SharedStore,
    detector: ChangeDetector,
    poll_interval: Duration,
    cancel_token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(err) = poll_once(&clipboard, &store, &detector) {
                    error!("clipboard poll cycle failed: {err:?}");
                }
            }
            _ = cancel_token.cancelled() => {
                info!("clipboard monitor shutting down");
                break;
            }
        }
    }
}

/// One observe-and-update cycle. Runs to completion before the next tick;
/// the ticker serializes cycles, so the store lock is only ever contended by
/// presentation reads.
fn poll_once(
    clipboard: &SharedClipboard,
    store: &SharedStore,
    detector: &ChangeDetector,
) -> Result<()> {
    let snapshot = clipboard
        .lock()
        .unwrap()
        .poll()
        .context("clipboard poll failed")?;

    let mut store = store.lock().unwrap();
    match detector.observe(&store, snapshot) {
        Action::Insert(entry) => {
            info!("clipboard changed: {}", entry.title());
            store.insert_front(entry);
        }
        Action::NoOp => {}
    }
    Ok(())
}
