//! Error types for the taskdeck crate.

use thiserror::Error;

/// Error types for task tracking and persistence
#[derive(Error, Debug)]
pub enum TaskdeckError {
    // Input errors
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDueDate { input: String },

    #[error("Invalid date '{input}': this date has already ended")]
    DueDatePassed { input: String },

    #[error("Invalid Task ID '{input}': please enter a number")]
    InvalidTaskId { input: String },

    // Storage errors
    #[error("Failed to read file '{path}': {reason}")]
    FileRead { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    FileWrite { path: String, reason: String },

    #[error("Failed to encode tasks as JSON: {reason}")]
    JsonEncode { reason: String },

    // Console errors
    #[error("Prompt error: {reason}")]
    Prompt { reason: String },
}

impl From<serde_json::Error> for TaskdeckError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonEncode {
            reason: err.to_string(),
        }
    }
}

impl From<dialoguer::Error> for TaskdeckError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for taskdeck operations
pub type TaskdeckResult<T> = Result<T, TaskdeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskdeckError::InvalidDueDate {
            input: "2024-13-40".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date '2024-13-40': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: TaskdeckError = json_err.into();
        assert!(matches!(err, TaskdeckError::JsonEncode { .. }));
    }
}
