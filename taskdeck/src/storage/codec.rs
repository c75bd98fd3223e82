//! JSON encoding and decoding of the task list.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::warn;

use crate::entities::Task;
use crate::errors::TaskdeckResult;

/// Serialize tasks as a pretty-printed JSON array, 4-space indentation
pub fn encode(tasks: &[Task]) -> TaskdeckResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tasks.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse a JSON array of tasks. Anything else (malformed JSON, an object,
/// `null`) yields the empty list; nothing is surfaced to the caller.
pub fn decode(data: &str) -> Vec<Task> {
    match serde_json::from_str::<Vec<Task>>(data) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(%err, "discarding unreadable task data");
            Vec::new()
        }
    }
}
