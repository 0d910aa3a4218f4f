use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::history::DEFAULT_CAPACITY;
use crate::thumbnail::DEFAULT_PREVIEW_HEIGHT;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSettings {
    /// Maximum number of history entries retained.
    pub capacity: usize,
    /// Height of derived image previews, in pixels.
    pub preview_height: u32,
    /// Clipboard poll cadence.
    pub poll_interval_ms: u64,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            preview_height: DEFAULT_PREVIEW_HEIGHT,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

/// JSON-backed settings with write-through persistence.
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<MonitorSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            MonitorSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn monitor(&self) -> MonitorSettings {
        self.data.read().unwrap().clone()
    }

    pub fn update(&self, settings: MonitorSettings) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            *guard = settings;
            self.persist(&guard)?;
        }
        Ok(())
    }

    fn persist(&self, data: &MonitorSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("clipwatch-settings-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let store = SettingsStore::new(scratch_path()).unwrap();
        let s = store.monitor();
        assert_eq!(s.capacity, 20);
        assert_eq!(s.preview_height, 70);
        assert_eq!(s.poll_interval_ms, 1000);
    }

    #[test]
    fn update_persists_and_reloads() {
        let path = scratch_path();
        let store = SettingsStore::new(path.clone()).unwrap();
        store
            .update(MonitorSettings {
                capacity: 5,
                preview_height: 32,
                poll_interval_ms: 250,
            })
            .unwrap();

        let reloaded = SettingsStore::new(path.clone()).unwrap();
        assert_eq!(reloaded.monitor().capacity, 5);
        assert_eq!(reloaded.monitor().preview_height, 32);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let path = scratch_path();
        fs::write(&path, "not json").unwrap();
        let store = SettingsStore::new(path.clone()).unwrap();
        assert_eq!(store.monitor().capacity, 20);
        fs::remove_file(path).unwrap();
    }
}
