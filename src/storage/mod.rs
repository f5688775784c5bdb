//! Storage layer for agenda.
//!
//! Tasks live in two plain-text stores of the same line format:
//! - the active store, holding open tasks
//! - the archive store, holding completed tasks (append-only here)

mod file;
mod load;

#[cfg(test)]
pub use file::MockLineStore;
pub use file::{FileStore, LineStore};
pub use load::{load_tasks, LineError, LoadedTasks};
