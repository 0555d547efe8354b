//! Best-effort persistence of the in-progress draft.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;
use crate::value::DraftRecord;
use tracing::{debug, warn};

/// Well-known key the draft is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "briefing-form-data";

/// A persistent string slot store, such as a directory of files or browser local storage.
pub trait DraftStorage: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Keeps exactly one draft under one key. Never fails: every storage problem is logged
/// and the session carries on as if no draft had been stored.
pub struct DraftStore {
    storage: Box<dyn DraftStorage>,
    key: String,
}

impl DraftStore {
    pub fn new(storage: impl DraftStorage + 'static) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: impl DraftStorage + 'static, key: &str) -> Self {
        Self {
            storage: Box::new(storage),
            key: key.to_string(),
        }
    }

    /// A store that forgets everything when dropped.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the stored draft, or an empty one if none exists or it cannot be read.
    pub fn load(&self) -> DraftRecord {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return DraftRecord::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored draft");
                return DraftRecord::new();
            }
        };

        match DraftRecord::from_json(&raw) {
            Ok(draft) => {
                debug!(key = %self.key, fields = draft.len(), "restored draft");
                draft
            }
            Err(source) => {
                let e = StorageError::Decode {
                    key: self.key.clone(),
                    source,
                };
                warn!(error = %e, "discarding unreadable draft");
                DraftRecord::new()
            }
        }
    }

    /// Overwrites the stored draft with `draft`.
    pub fn save(&mut self, draft: &DraftRecord) {
        let result = draft
            .to_json()
            .map_err(StorageError::Encode)
            .and_then(|json| self.storage.set(&self.key, &json));
        if let Err(e) = result {
            warn!(key = %self.key, error = %e, "failed to save draft");
        }
    }

    /// Deletes the stored draft.
    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove(&self.key) {
            warn!(key = %self.key, error = %e, "failed to clear stored draft");
        }
    }
}

impl std::fmt::Debug for DraftStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftStore").field("key", &self.key).finish()
    }
}
