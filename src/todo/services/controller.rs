//! Controller mediating mutation, persistence, and re-rendering.

use thiserror::Error;

use crate::todo::domain::{IndexOutOfBounds, Task, TaskData, TaskValidationError, TodoList};
use crate::todo::ports::{TaskStore, TaskStoreError, ViewSurface, ViewSurfaceError};
use crate::todo::view::present;

/// Errors surfaced by controller operations.
///
/// Nothing is swallowed: a failed index check, a rejected description, and a
/// storage or rendering failure all reach the caller as typed variants.
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    /// Task construction data failed validation.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// A positional index fell outside the list bounds.
    #[error(transparent)]
    Index(#[from] IndexOutOfBounds),

    /// The persistence layer failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// The view surface failed.
    #[error(transparent)]
    Surface(#[from] ViewSurfaceError),
}

/// Result type for controller operations.
pub type TodoResult<T> = Result<T, TodoError>;

/// A persisted record skipped during hydration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position of the record in the stored array.
    pub position: usize,
    /// Why the record failed re-validation.
    pub reason: TaskValidationError,
}

/// Outcome of loading persisted state at controller construction.
///
/// An unparseable blob fails construction outright; a parseable record that
/// fails task validation is skipped and reported here instead of silently
/// dropped or inherited as undefined behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrationReport {
    /// Number of records successfully re-validated and loaded.
    pub loaded: usize,
    /// Records skipped during hydration, in stored order.
    pub skipped: Vec<SkippedRecord>,
}

/// User interaction dispatched from a rendered view.
///
/// Indices are the positional values captured at render time; a full
/// re-render follows every mutation, so they are valid until the next
/// dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// The entry form submitted a new task description.
    Submit {
        /// Raw description text from the form.
        description: String,
    },
    /// A row body was activated to toggle completion.
    ToggleCompleted {
        /// Render-time row index.
        index: usize,
    },
    /// A row's lock control was activated.
    ToggleBlocked {
        /// Render-time row index.
        index: usize,
    },
    /// A row's close control was activated.
    Remove {
        /// Render-time row index.
        index: usize,
    },
}

/// Single authority over the task list.
///
/// Owns the [`TodoList`] for the process lifetime and guarantees that every
/// state change is followed by a full snapshot save and a full re-render,
/// synchronously and in that fixed order. The renderer only ever observes
/// fully persisted states.
#[derive(Debug)]
pub struct TodoController<S, V>
where
    S: TaskStore,
    V: ViewSurface,
{
    list: TodoList,
    store: S,
    surface: V,
    hydration: HydrationReport,
}

impl<S, V> TodoController<S, V>
where
    S: TaskStore,
    V: ViewSurface,
{
    /// Creates a controller, hydrating the list from the store.
    ///
    /// Reads the store exactly once. Each persisted record is re-validated
    /// through [`Task::new`] and appended in stored order; records that fail
    /// validation are skipped and reported via [`Self::hydration`]. An absent
    /// key yields an empty list. No initial render is performed; the host
    /// calls [`Self::render_view`] once wiring is complete.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Store`] when the store cannot be read or the
    /// stored blob is malformed.
    pub fn new(store: S, surface: V) -> TodoResult<Self> {
        let mut list = TodoList::new();
        let mut hydration = HydrationReport::default();

        if let Some(records) = store.load()? {
            for (position, record) in records.into_iter().enumerate() {
                match Task::new(record) {
                    Ok(task) => {
                        list.add_task(task);
                        hydration.loaded += 1;
                    }
                    Err(reason) => hydration.skipped.push(SkippedRecord { position, reason }),
                }
            }
        }

        Ok(Self {
            list,
            store,
            surface,
            hydration,
        })
    }

    /// Returns the hydration outcome observed at construction.
    #[must_use]
    pub const fn hydration(&self) -> &HydrationReport {
        &self.hydration
    }

    /// Returns the live ordered task sequence.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn count(&self) -> usize {
        self.list.count()
    }

    /// Appends a task, then persists and re-renders.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Store`] or [`TodoError::Surface`] when the
    /// post-mutation save or redraw fails.
    pub fn add_task(&mut self, task: Task) -> TodoResult<()> {
        self.list.add_task(task);
        self.commit()
    }

    /// Removes and returns the task at `index`, then persists and re-renders.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Index`] when `index` is invalid; the list,
    /// storage, and view are left untouched.
    pub fn remove_task(&mut self, index: usize) -> TodoResult<Task> {
        let removed = self.list.remove_task(index)?;
        self.commit()?;
        Ok(removed)
    }

    /// Clears the whole list, then persists and re-renders.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Store`] or [`TodoError::Surface`] when the
    /// post-mutation save or redraw fails.
    pub fn remove_all_tasks(&mut self) -> TodoResult<()> {
        self.list.remove_all_tasks();
        self.commit()
    }

    /// Toggles completion of the task at `index`, then persists and
    /// re-renders.
    ///
    /// Toggling a blocked task validates the index, leaves the task
    /// unchanged, and still persists and re-renders.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Index`] when `index` is invalid.
    pub fn toggle_completed(&mut self, index: usize) -> TodoResult<()> {
        self.list.toggle_completed(index)?;
        self.commit()
    }

    /// Toggles the blocked flag of the task at `index`, then persists and
    /// re-renders.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Index`] when `index` is invalid.
    pub fn toggle_blocked(&mut self, index: usize) -> TodoResult<()> {
        self.list.toggle_blocked(index)?;
        self.commit()
    }

    /// Dispatches a user interaction to the matching operation.
    ///
    /// A submitted description is validated through [`Task::new`]; the
    /// resulting [`TodoError::Validation`] reaches the caller rather than
    /// halting the interaction silently.
    ///
    /// # Errors
    ///
    /// Propagates the error of the dispatched operation.
    pub fn handle(&mut self, action: UserAction) -> TodoResult<()> {
        match action {
            UserAction::Submit { description } => {
                let task = Task::new(TaskData::new(description))?;
                self.add_task(task)
            }
            UserAction::ToggleCompleted { index } => self.toggle_completed(index),
            UserAction::ToggleBlocked { index } => self.toggle_blocked(index),
            UserAction::Remove { index } => {
                self.remove_task(index)?;
                Ok(())
            }
        }
    }

    /// Writes a full snapshot of the current task sequence to the store.
    ///
    /// Replaces any prior stored value wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Store`] when the save fails.
    pub fn save_state(&self) -> TodoResult<()> {
        let records: Vec<TaskData> = self.list.tasks().iter().map(Task::to_data).collect();
        self.store.save(&records)?;
        Ok(())
    }

    /// Performs a full redraw from current state through the view surface.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Surface`] when the surface rejects the view.
    pub fn render_view(&mut self) -> TodoResult<()> {
        let view = present(self.list.tasks());
        self.surface.apply(&view)?;
        Ok(())
    }

    /// Returns a shared reference to the view surface.
    #[must_use]
    pub const fn surface(&self) -> &V {
        &self.surface
    }

    fn commit(&mut self) -> TodoResult<()> {
        self.save_state()?;
        self.render_view()
    }
}
