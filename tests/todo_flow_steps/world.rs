//! Shared world state for task list BDD scenarios.

use rota::todo::adapters::MemoryTaskStore;
use rota::todo::services::{TodoController, TodoError, TodoResult};
use rota::todo::view::HtmlSurface;
use rstest::fixture;

/// Controller type used by the BDD world.
pub type TestController = TodoController<MemoryTaskStore, HtmlSurface>;

/// Scenario world for task list behaviour tests.
pub struct TodoWorld {
    pub store: MemoryTaskStore,
    pub controller: TestController,
    pub last_result: Option<TodoResult<()>>,
}

impl TodoWorld {
    /// Creates a world over a fresh in-memory store.
    ///
    /// # Panics
    ///
    /// Panics when the empty store fails to hydrate, which cannot happen.
    #[must_use]
    pub fn new() -> Self {
        let store = MemoryTaskStore::new();
        let controller = TodoController::new(store.clone(), HtmlSurface::new())
            .expect("empty store should hydrate");

        Self {
            store,
            controller,
            last_result: None,
        }
    }

    /// Replaces the controller with one freshly hydrated from the same store.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError`] when hydration fails.
    pub fn restart(&mut self) -> Result<(), TodoError> {
        self.controller = TodoController::new(self.store.clone(), HtmlSurface::new())?;
        Ok(())
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}
