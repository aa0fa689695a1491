//! Task list management for Rota.
//!
//! This module implements the full create/complete/block/delete lifecycle of
//! a single-user to-do list. Tasks are validated at construction, mutated
//! only through the controller, persisted as a full snapshot after every
//! change, and projected into a declarative view description. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Presentation in [`view`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod view;

#[cfg(test)]
mod tests;
