//! Single-user task tracker: in-memory task list, due-date rules, and JSON
//! flat-file persistence.
//!
//! The interactive menu lives in the `taskdeck` binary; everything here is
//! plain synchronous library code with no ambient state.

pub mod domain;
pub mod entities;
pub mod errors;
pub mod storage;
pub mod ui;

pub use entities::Task;
