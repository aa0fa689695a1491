//! Ordered task list aggregate with index-checked mutation.

use super::{IndexOutOfBounds, Task};

/// The ordered in-memory collection of [`Task`] values.
///
/// Insertion order is display order. Indices are positional: removing a task
/// shifts every later task down by one, and a full re-render is expected to
/// follow any mutation before indices are reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    tasks: Vec<Task>,
}

impl TodoList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the live ordered task sequence.
    ///
    /// Callers receive a view of the backing storage, not a defensive copy.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Checks that `index` addresses an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] when `index >= count`. Out-of-range
    /// indices are reported, never clamped.
    pub fn validate_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.tasks.len() {
            return Err(IndexOutOfBounds {
                index,
                count: self.tasks.len(),
            });
        }
        Ok(())
    }

    /// Appends a task to the end of the list.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes and returns the task at `index`.
    ///
    /// Subsequent tasks shift down by one position.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] when `index` is invalid; the list is left
    /// unchanged.
    pub fn remove_task(&mut self, index: usize) -> Result<Task, IndexOutOfBounds> {
        self.validate_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Clears the list unconditionally.
    ///
    /// A no-op when the list is already empty.
    pub fn remove_all_tasks(&mut self) {
        self.tasks.clear();
    }

    /// Toggles the completed flag of the task at `index`.
    ///
    /// Delegates to [`Task::toggle_completed`], so toggling a blocked task
    /// validates the index but leaves the task unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] when `index` is invalid.
    pub fn toggle_completed(&mut self, index: usize) -> Result<(), IndexOutOfBounds> {
        let count = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(IndexOutOfBounds { index, count })?;
        task.toggle_completed();
        Ok(())
    }

    /// Toggles the blocked flag of the task at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] when `index` is invalid.
    pub fn toggle_blocked(&mut self, index: usize) -> Result<(), IndexOutOfBounds> {
        let count = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(IndexOutOfBounds { index, count })?;
        task.toggle_blocked();
        Ok(())
    }
}
