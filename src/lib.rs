//! Rota: a single-user task list manager.
//!
//! This crate provides the model, controller, and view plumbing for a small
//! persistent to-do list: validated task records, an ordered list aggregate,
//! a controller that persists and re-renders after every mutation, and a
//! declarative view layer with an HTML adapter.
//!
//! # Architecture
//!
//! Rota follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task and list logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and view surfaces
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`todo`]: Task validation, list mutation, persistence, and rendering

pub mod todo;
