//! Task entity and its serialized shape.

use serde::{Deserialize, Serialize};

/// Core task structure
///
/// Field order here is the field order in the persisted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 1-based position in ascending due-date order; reassigned on every add
    #[serde(default)]
    pub id: u32,

    /// What the task is about
    pub description: String,

    /// Free text; "high" and "low" by convention, never validated
    pub priority: String,

    /// Calendar date formatted YYYY-MM-DD
    pub due_date: String,

    /// Completion flag
    #[serde(default)]
    pub completed: bool,

    /// Reserved field carried through serialization; never computed or read
    #[serde(default)]
    pub nearly_overdue: bool,
}

impl Task {
    /// Create a new, not yet sequenced task (id 0 until the store re-sorts)
    pub fn new(
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            description: description.into(),
            priority: priority.into(),
            due_date: due_date.into(),
            completed: false,
            nearly_overdue: false,
        }
    }
}
