//! Core data structures for task tracking.

mod task;

pub use task::Task;
