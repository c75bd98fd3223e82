//! Flat-file gateway for the persisted task list.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::codec;
use crate::entities::Task;
use crate::errors::{TaskdeckError, TaskdeckResult};

/// Default backing file, created in the working directory
pub const DEFAULT_TASKS_FILE: &str = "tasks2.json";

/// Reads and writes the whole task file. The file is a plain blob here;
/// the codec owns its interpretation.
#[derive(Debug, Clone)]
pub struct FileGateway {
    path: PathBuf,
}

impl FileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents verbatim; a missing file reads as the empty JSON array.
    /// Every other I/O failure surfaces as an error.
    pub fn read(&self) -> TaskdeckResult<String> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no task file yet, starting empty");
                Ok("[]".to_string())
            }
            Err(err) => Err(TaskdeckError::FileRead {
                path: self.path.display().to_string(),
                reason: err.to_string(),
            }),
        }
    }

    /// Overwrite the file in full; last writer wins
    pub fn write(&self, data: &str) -> TaskdeckResult<()> {
        fs::write(&self.path, data).map_err(|err| TaskdeckError::FileWrite {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        })
    }

    /// Read and decode the persisted task list
    pub fn load(&self) -> TaskdeckResult<Vec<Task>> {
        Ok(codec::decode(&self.read()?))
    }

    /// Encode and persist the task list
    pub fn save(&self, tasks: &[Task]) -> TaskdeckResult<()> {
        self.write(&codec::encode(tasks)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_returns_empty_array_literal() {
        let temp_dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(temp_dir.path().join("absent.json"));
        assert_eq!(gateway.read().unwrap(), "[]");
    }

    #[test]
    fn test_write_then_read_returns_contents_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(temp_dir.path().join("tasks2.json"));

        gateway.write("raw text, not even JSON").unwrap();
        assert_eq!(gateway.read().unwrap(), "raw text, not even JSON");
    }

    #[test]
    fn test_write_overwrites_in_full() {
        let temp_dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(temp_dir.path().join("tasks2.json"));

        gateway.write("a much longer first version").unwrap();
        gateway.write("[]").unwrap();
        assert_eq!(gateway.read().unwrap(), "[]");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(temp_dir.path().join("tasks2.json"));

        let mut task = Task::new("Review", "2998-06-15", "low");
        task.id = 1;
        gateway.save(std::slice::from_ref(&task)).unwrap();

        assert_eq!(gateway.load().unwrap(), vec![task]);
    }

    #[test]
    fn test_load_of_corrupt_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(temp_dir.path().join("tasks2.json"));

        gateway.write("{ definitely: not tasks").unwrap();
        assert!(gateway.load().unwrap().is_empty());
    }
}
