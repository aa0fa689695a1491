//! Domain model for the to-do list.
//!
//! The domain models validated task records, in-place completion and blocking
//! toggles, and an ordered list aggregate with index-checked mutation, while
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod list;
mod task;

pub use error::{IndexOutOfBounds, TaskValidationError};
pub use list::TodoList;
pub use task::{DataCheck, Task, TaskData};
