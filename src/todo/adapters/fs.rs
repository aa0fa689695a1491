//! Capability-based filesystem store.

use std::io;

use cap_std::fs_utf8::Dir;

use crate::todo::domain::TaskData;
use crate::todo::ports::{TaskStore, TaskStoreError, TaskStoreResult};

/// File name holding the serialised task list inside the store directory.
///
/// The [`crate::todo::ports::STORAGE_KEY`] mapped onto the filesystem.
const STORAGE_FILE: &str = "todo-list.json";

/// Task store backed by a single JSON file in a capability-scoped directory.
///
/// The store can only touch files inside the [`Dir`] it was opened with.
#[derive(Debug)]
pub struct FsTaskStore {
    dir: Dir,
}

impl FsTaskStore {
    /// Creates a store over an already-opened directory capability.
    #[must_use]
    pub const fn new(dir: Dir) -> Self {
        Self { dir }
    }

    /// Opens a store rooted at `path` using ambient authority.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the directory cannot be opened.
    pub fn open_ambient(path: &str) -> io::Result<Self> {
        let dir = Dir::open_ambient_dir(path, cap_std::ambient_authority())?;
        Ok(Self::new(dir))
    }
}

impl TaskStore for FsTaskStore {
    fn load(&self) -> TaskStoreResult<Option<Vec<TaskData>>> {
        let blob = match self.dir.read_to_string(STORAGE_FILE) {
            Ok(blob) => blob,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(TaskStoreError::persistence(err)),
        };
        serde_json::from_str(&blob)
            .map(Some)
            .map_err(TaskStoreError::malformed)
    }

    fn save(&self, records: &[TaskData]) -> TaskStoreResult<()> {
        let blob = serde_json::to_string(records).map_err(TaskStoreError::malformed)?;
        self.dir
            .write(STORAGE_FILE, blob)
            .map_err(TaskStoreError::persistence)
    }
}
