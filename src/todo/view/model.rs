//! Declarative view description of the task list.

use crate::todo::domain::Task;
use serde::Serialize;

/// Lock indicator shown on a task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LockIcon {
    /// The task is blocked.
    Lock,
    /// The task accepts completion toggling.
    LockOpen,
}

impl LockIcon {
    /// Returns the canonical icon name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lock => "lock",
            Self::LockOpen => "lock_open",
        }
    }

    /// Derives the icon from a task's blocked flag.
    #[must_use]
    pub const fn for_blocked(blocked: bool) -> Self {
        if blocked { Self::Lock } else { Self::LockOpen }
    }
}

/// One rendered task row.
///
/// The index is captured at render time and is positional, not a stable task
/// identity; a full re-render always follows any mutation, so captured
/// indices never outlive the state they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// Position of the task at render time.
    pub index: usize,
    /// Task description text.
    pub description: String,
    /// Whether the row renders in its checked styling.
    pub completed: bool,
    /// Whether the row's lock control shows the closed icon.
    pub blocked: bool,
    /// Lock indicator derived from `blocked`.
    pub lock_icon: LockIcon,
}

impl TaskRow {
    /// Builds a row from a task and its render-time position.
    #[must_use]
    pub fn from_task(index: usize, task: &Task) -> Self {
        Self {
            index,
            description: task.description().to_owned(),
            completed: task.is_completed(),
            blocked: task.is_blocked(),
            lock_icon: LockIcon::for_blocked(task.is_blocked()),
        }
    }
}

/// Declarative description of the whole rendered list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoListView {
    rows: Vec<TaskRow>,
}

impl TodoListView {
    /// Returns the ordered rows.
    #[must_use]
    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }
}

/// Projects the current task sequence into a view description.
///
/// Pure: one row per task, order preserved, visual state a function of each
/// task's current flags.
#[must_use]
pub fn present(tasks: &[Task]) -> TodoListView {
    TodoListView {
        rows: tasks
            .iter()
            .enumerate()
            .map(|(index, task)| TaskRow::from_task(index, task))
            .collect(),
    }
}
