//! Error types for task construction and list mutation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The description is absent or empty after trimming.
    #[error("the 'description' field is required and must not be empty")]
    EmptyDescription,
}

/// Error returned when a positional index falls outside the list bounds.
///
/// Indices are positional, not stable identifiers: removing a task shifts
/// every later task down by one position.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("index {index} out of bounds for a list of {count} tasks")]
pub struct IndexOutOfBounds {
    /// The rejected index.
    pub index: usize,
    /// The list length at the time of the call.
    pub count: usize,
}
