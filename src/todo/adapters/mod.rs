//! Adapter implementations of the persistence port.

pub mod fs;
pub mod memory;

pub use fs::FsTaskStore;
pub use memory::MemoryTaskStore;
