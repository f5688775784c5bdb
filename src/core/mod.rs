//! Core task model for agenda.
//!
//! Pure logic with no I/O: the task type, the line parser that builds it,
//! and the ranker that orders tasks for display.

pub mod parser;
pub mod ranker;
mod task;

pub use parser::parse_line;
pub use ranker::{compare, rank, rank_by};
pub use task::{Priority, PriorityBand, Task, TaskDate, TaskTime};
