//! In-memory key-value store for tests and embedding.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::todo::domain::TaskData;
use crate::todo::ports::{STORAGE_KEY, TaskStore, TaskStoreError, TaskStoreResult};

/// String-keyed in-memory task store.
///
/// Holds serialised blobs by key, the same shape as a browser's local
/// storage. Cloning shares the underlying map, so a second handle observes
/// earlier saves; restart round-trip tests rely on this.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaskStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a raw blob at the task list key.
    ///
    /// Used to exercise malformed-state handling.
    #[must_use]
    pub fn with_raw(blob: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(STORAGE_KEY.to_owned(), blob.into());
        }
        store
    }

    /// Returns the raw blob currently stored at the task list key.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(STORAGE_KEY).cloned())
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&self) -> TaskStoreResult<Option<Vec<TaskData>>> {
        let entries = self.entries.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        match entries.get(STORAGE_KEY) {
            None => Ok(None),
            Some(blob) => serde_json::from_str(blob)
                .map(Some)
                .map_err(TaskStoreError::malformed),
        }
    }

    fn save(&self, records: &[TaskData]) -> TaskStoreResult<()> {
        let blob = serde_json::to_string(records).map_err(TaskStoreError::malformed)?;
        let mut entries = self.entries.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        entries.insert(STORAGE_KEY.to_owned(), blob);
        Ok(())
    }
}
