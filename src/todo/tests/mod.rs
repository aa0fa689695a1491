//! Unit tests for the todo module.
