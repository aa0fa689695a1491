//! Validated task entity and its raw construction record.

use super::TaskValidationError;
use serde::{Deserialize, Serialize};

/// Raw construction data for a task.
///
/// Doubles as the persistence wire record: each stored element is a JSON
/// object with exactly the fields `description`, `blocked`, and `completed`.
/// Absent flags default to `false` on deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskData {
    /// Task description text.
    pub description: String,
    /// Whether the task is blocked from completion toggling.
    #[serde(default)]
    pub blocked: bool,
    /// Whether the task has been completed.
    #[serde(default)]
    pub completed: bool,
}

/// Outcome of a non-failing validation check over [`TaskData`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataCheck {
    /// `true` when [`Task::new`] would succeed on the same data.
    pub valid: bool,
    /// Human-readable outcome description.
    pub message: String,
}

impl TaskData {
    /// Creates construction data with both flags unset.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            blocked: false,
            completed: false,
        }
    }

    /// Sets the completed flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Sets the blocked flag.
    #[must_use]
    pub const fn with_blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    /// Reports validation outcome without failing.
    ///
    /// Runs the same rules as [`Task::new`] and returns the result as data,
    /// for pre-validation of form input.
    #[must_use]
    pub fn check(&self) -> DataCheck {
        self.validate().map_or_else(
            |error| DataCheck {
                valid: false,
                message: error.to_string(),
            },
            |()| DataCheck {
                valid: true,
                message: "all fields are valid.".to_owned(),
            },
        )
    }

    fn validate(&self) -> Result<(), TaskValidationError> {
        if self.description.trim().is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// One to-do item with a description and completed/blocked flags.
///
/// The description is immutable after construction; the flags change only
/// through the toggle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    completed: bool,
    blocked: bool,
}

impl Task {
    /// Constructs a validated task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::EmptyDescription`] when the description
    /// is empty or whitespace-only.
    pub fn new(data: TaskData) -> Result<Self, TaskValidationError> {
        data.validate()?;
        Ok(Self {
            description: data.description,
            completed: data.completed,
            blocked: data.blocked,
        })
    }

    /// Returns the description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns whether the task is blocked.
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Flips the completed flag, unless the task is blocked.
    ///
    /// Toggling a blocked task is a silent no-op.
    pub const fn toggle_completed(&mut self) {
        if self.blocked {
            return;
        }
        self.completed = !self.completed;
    }

    /// Unconditionally flips the blocked flag.
    ///
    /// Never inspects or changes `completed`: a task completed first and
    /// blocked later stays completed.
    pub const fn toggle_blocked(&mut self) {
        self.blocked = !self.blocked;
    }

    /// Projects the task into its persistence record.
    #[must_use]
    pub fn to_data(&self) -> TaskData {
        TaskData {
            description: self.description.clone(),
            blocked: self.blocked,
            completed: self.completed,
        }
    }
}
