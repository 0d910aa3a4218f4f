use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::SnapshotError;
use crate::identity::{identity_of, IdentityKey};
use crate::payload::{ImageData, Payload};
use crate::thumbnail;

/// One immutable record in the clipboard history.
///
/// Fields are fixed at construction: the payload, its identity key, and (for
/// images) a derived preview. "Updating" an entry is always modeled as
/// inserting a new one and letting the old one fall off the tail.
#[derive(Debug)]
pub struct HistoryEntry {
    id: Uuid,
    payload: Payload,
    preview: Option<ImageData>,
    identity: IdentityKey,
    observed_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Build an entry from a payload, computing identity and preview.
    pub fn from_payload(payload: Payload, preview_height: u32) -> Result<Self, SnapshotError> {
        let identity = identity_of(&payload)?;
        Self::from_parts(payload, identity, preview_height)
    }

    /// Build an entry from a payload whose identity is already known.
    pub(crate) fn from_parts(
        payload: Payload,
        identity: IdentityKey,
        preview_height: u32,
    ) -> Result<Self, SnapshotError> {
        let preview = match &payload {
            Payload::Image(img) => Some(thumbnail::generate(img, preview_height)?),
            Payload::Text(_) => None,
        };
        debug_assert_eq!(preview.is_some(), payload.is_image());

        Ok(Self {
            id: Uuid::new_v4(),
            payload,
            preview,
            identity,
            observed_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn preview(&self) -> Option<&ImageData> {
        self.preview.as_ref()
    }

    pub fn identity(&self) -> &IdentityKey {
        &self.identity
    }

    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }

    pub fn title(&self) -> String {
        self.payload.title()
    }

    pub fn view(&self) -> EntryView {
        EntryView {
            id: self.id,
            title: self.title(),
            preview: self.preview.clone(),
            observed_at: self.observed_at,
        }
    }
}

/// Read-only rendering view of an entry, detached from store ownership.
#[derive(Debug, Clone)]
pub struct EntryView {
    pub id: Uuid,
    pub title: String,
    pub preview: Option<ImageData>,
    pub observed_at: DateTime<Utc>,
}
