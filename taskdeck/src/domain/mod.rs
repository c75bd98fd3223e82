//! Task-list operations and due-date rules.

pub mod dates;
mod store;

pub use store::{format_tasks, TaskStore};
