//! Presentation layer: pure view models and the HTML adapter.
//!
//! [`present`] projects the task sequence into a declarative description of
//! the rendered list; the HTML types apply that description to a template.
//! Keeping the projection pure keeps the controller and model testable
//! without a UI harness.

mod html;
mod model;

pub use html::{DEFAULT_TEMPLATE, HtmlRenderer, HtmlSurface};
pub use model::{LockIcon, TaskRow, TodoListView, present};
