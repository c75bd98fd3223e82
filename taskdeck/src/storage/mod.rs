//! Persistence: JSON codec and the flat-file gateway.

pub mod codec;
mod file;

pub use file::{FileGateway, DEFAULT_TASKS_FILE};
