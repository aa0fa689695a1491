//! Port contracts for persistence and view application.

mod store;
mod surface;

pub use store::{STORAGE_KEY, TaskStore, TaskStoreError, TaskStoreResult};
pub use surface::{ViewSurface, ViewSurfaceError, ViewSurfaceResult};
