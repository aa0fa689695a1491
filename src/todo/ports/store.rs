//! Persistence port for the task list snapshot.

use crate::todo::domain::TaskData;
use std::sync::Arc;
use thiserror::Error;

/// Storage key under which the serialised task list lives.
///
/// The whole list is held as a single JSON-array blob at this key; every save
/// replaces the entire stored value.
pub const STORAGE_KEY: &str = "todo-list";

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task list persistence contract.
///
/// Implementations store a full snapshot of the task sequence as ordered
/// [`TaskData`] records. Loads happen once, at controller construction; saves
/// happen after every mutation.
pub trait TaskStore {
    /// Loads the persisted task sequence.
    ///
    /// Returns `Ok(None)` when the storage key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Malformed`] when the stored blob fails to
    /// decode, or [`TaskStoreError::Persistence`] on storage-layer failure.
    fn load(&self) -> TaskStoreResult<Option<Vec<TaskData>>>;

    /// Replaces the stored value with a snapshot of `records`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] on storage-layer failure.
    fn save(&self, records: &[TaskData]) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The stored blob is not a valid task record array.
    #[error("stored task list is malformed: {0}")]
    Malformed(Arc<serde_json::Error>),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a decode error.
    #[must_use]
    pub fn malformed(err: serde_json::Error) -> Self {
        Self::Malformed(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
