//! In-memory task list: add, delete, update, filter, format.

use chrono::NaiveDate;

use crate::domain::dates::DATE_FORMAT;
use crate::entities::Task;
use crate::errors::{TaskdeckError, TaskdeckResult};

/// Owner of the task list. All mutation goes through these methods so the
/// ID/order invariant holds: after any add, IDs are contiguous `1..=N` in
/// ascending due-date order.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already loaded task list. IDs are taken as-is; the next add
    /// re-sequences everything.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Current task list in storage order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a new task, then re-sort by due date and re-number.
    ///
    /// Fails without touching the list when `due_date` does not parse; the
    /// menu validates first, so this is a backstop.
    pub fn add(
        &mut self,
        description: &str,
        due_date: &str,
        priority: &str,
    ) -> TaskdeckResult<()> {
        NaiveDate::parse_from_str(due_date, DATE_FORMAT).map_err(|_| {
            TaskdeckError::InvalidDueDate {
                input: due_date.to_string(),
            }
        })?;

        self.tasks.push(Task::new(description, due_date, priority));
        self.resequence();
        Ok(())
    }

    /// Remove the task with the given ID; unknown IDs are a no-op
    pub fn delete(&mut self, id: u32) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Replace the priority text of a task; unknown IDs are a no-op.
    /// The new priority is stored verbatim, not checked against any enum.
    pub fn update_priority(&mut self, id: u32, new_priority: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.priority = new_priority.to_string();
        }
    }

    /// Set the completion flag from free-form status text: only a
    /// case-insensitive "completed" marks the task done, anything else
    /// clears the flag. Unknown IDs are a no-op.
    pub fn update_status(&mut self, id: u32, status_text: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = status_text.eq_ignore_ascii_case("completed");
        }
    }

    /// Tasks whose priority text equals `priority` exactly (case-sensitive)
    pub fn filter_by_priority(&self, priority: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.priority == priority)
            .cloned()
            .collect()
    }

    /// Stable sort ascending by parsed due date, then IDs become `1..=N`.
    /// Unparseable dates (possible in a hand-edited file) sort last.
    fn resequence(&mut self) {
        self.tasks.sort_by_key(|t| {
            NaiveDate::parse_from_str(&t.due_date, DATE_FORMAT)
                .ok()
                .unwrap_or(NaiveDate::MAX)
        });
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.id = index as u32 + 1;
        }
    }
}

/// Render tasks one line each, in the given order (never re-sorted)
pub fn format_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks available.".to_string();
    }

    tasks
        .iter()
        .map(|t| {
            format!(
                "ID: {}, Description: {}, Priority: {}, Due Date: {}, Completed: {}",
                t.id,
                t.description,
                t.priority,
                t.due_date,
                if t.completed { "Yes" } else { "No" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_store() -> TaskStore {
        let mut store = TaskStore::new();
        store.add("Write spec", "2999-01-01", "high").unwrap();
        store.add("Review", "2998-06-15", "low").unwrap();
        store
    }

    #[test]
    fn test_add_sorts_by_due_date_and_renumbers() {
        let store = filled_store();
        let tasks = store.tasks();
        assert_eq!(tasks[0].description, "Review");
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[1].description, "Write spec");
        assert_eq!(tasks[1].id, 2);
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_ids_stay_dense_after_every_add() {
        let mut store = TaskStore::new();
        for (desc, date) in [
            ("c", "2999-03-01"),
            ("a", "2999-01-01"),
            ("b", "2999-02-01"),
        ] {
            store.add(desc, date, "low").unwrap();
            for (index, task) in store.tasks().iter().enumerate() {
                assert_eq!(task.id, index as u32 + 1);
            }
        }
        let order: Vec<_> = store.tasks().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn test_add_rejects_unparseable_date() {
        let mut store = TaskStore::new();
        assert!(store.add("x", "not-a-date", "low").is_err());
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_equal_due_dates_keep_insertion_order() {
        let mut store = TaskStore::new();
        store.add("first", "2999-01-01", "low").unwrap();
        store.add("second", "2999-01-01", "low").unwrap();
        assert_eq!(store.tasks()[0].description, "first");
        assert_eq!(store.tasks()[1].description, "second");
    }

    #[test]
    fn test_delete_removes_matching_id_only() {
        let mut store = filled_store();
        store.delete(1);
        assert_eq!(store.tasks().len(), 1);
        assert!(store.tasks().iter().all(|t| t.id != 1));
    }

    #[test]
    fn test_delete_of_unknown_id_is_a_no_op() {
        let mut store = filled_store();
        let before = store.tasks().to_vec();
        store.delete(99);
        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn test_update_priority_stores_text_verbatim() {
        let mut store = filled_store();
        store.update_priority(1, "Urgent!");
        assert_eq!(store.tasks()[0].priority, "Urgent!");
        assert_eq!(store.tasks()[1].priority, "high");
    }

    #[test]
    fn test_update_status_matches_completed_case_insensitively() {
        let mut store = filled_store();
        store.update_status(1, "Completed");
        assert!(store.tasks()[0].completed);

        store.update_status(1, "not completed");
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_filter_by_priority_is_exact_and_case_sensitive() {
        let store = filled_store();
        assert_eq!(store.filter_by_priority("high").len(), 1);
        assert!(store.filter_by_priority("High").is_empty());
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_tasks(&[]), "No tasks available.");
    }

    #[test]
    fn test_format_renders_one_line_per_task() {
        let store = filled_store();
        let rendered = format_tasks(store.tasks());
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "ID: 1, Description: Review, Priority: low, Due Date: 2998-06-15, Completed: No"
        );
    }

    #[test]
    fn test_format_keeps_given_order() {
        let mut tasks = filled_store().tasks().to_vec();
        tasks.reverse();
        let rendered = format_tasks(&tasks);
        assert!(rendered.starts_with("ID: 2, Description: Write spec"));
    }
}
