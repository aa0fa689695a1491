//! Orchestration services for the to-do list.

mod controller;

pub use controller::{
    HydrationReport, SkippedRecord, TodoController, TodoError, TodoResult, UserAction,
};
