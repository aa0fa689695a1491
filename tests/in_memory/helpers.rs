//! Shared helpers for in-memory integration tests.

use rota::todo::adapters::MemoryTaskStore;
use rota::todo::domain::{Task, TaskData};
use rota::todo::services::TodoController;
use rota::todo::view::HtmlSurface;

/// Controller type exercised by the integration suite.
pub type TestController = TodoController<MemoryTaskStore, HtmlSurface>;

/// Builds a controller over the given store with a fresh HTML surface.
pub fn controller(store: MemoryTaskStore) -> TestController {
    TodoController::new(store, HtmlSurface::new()).expect("controller construction should succeed")
}

/// Builds a validated task.
pub fn task(description: &str) -> Task {
    Task::new(TaskData::new(description)).expect("task construction should succeed")
}
