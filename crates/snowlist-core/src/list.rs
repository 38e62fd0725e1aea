use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::task::Task;

/// The ordered task collection, newest first. The serialized form
/// is a bare JSON array of tasks, which is also the layout written
/// to browser storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Trims `raw` and prepends a fresh pending task. Empty or
    /// whitespace-only input creates nothing and returns `None`.
    pub fn add(&mut self, raw: &str) -> Option<&Task> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.tasks.insert(0, Task::new(trimmed.to_string()));
        self.tasks.first()
    }

    /// Flips the `completed` flag of the matching task. Returns
    /// `false` when no task carries `id`.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Drops the matching task. Returns `false` when no task
    /// carries `id`.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(&self.tasks).context("failed to serialize task list")
    }

    /// Lenient decode: a missing, malformed, or wrong-shaped value
    /// yields the empty list. Never an error to the caller.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Vec<Task>>(raw) {
            Ok(tasks) => Self { tasks },
            Err(error) => {
                warn!(%error, "discarding malformed stored task list");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::TaskList;

    #[test]
    fn add_trims_and_prepends() {
        let mut list = TaskList::default();

        let added = list.add("  first  ").expect("task should be created").clone();
        assert_eq!(added.text, "first");
        assert!(!added.completed);

        list.add("second");
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[0].text, "second");
        assert_eq!(list.tasks()[1].text, "first");
    }

    #[test]
    fn blank_input_creates_nothing() {
        let mut list = TaskList::default();

        assert!(list.add("").is_none());
        assert!(list.add("   \t\n  ").is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn toggle_flips_and_a_second_toggle_restores() {
        let mut list = TaskList::default();
        let id = list.add("write tests").expect("task should be created").id;

        assert!(list.toggle(id));
        assert!(list.tasks()[0].completed);

        assert!(list.toggle(id));
        assert!(!list.tasks()[0].completed);
    }

    #[test]
    fn remove_drops_only_the_matching_task() {
        let mut list = TaskList::default();
        list.add("keep");
        let id = list.add("drop").expect("task should be created").id;

        assert!(list.remove(id));
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].text, "keep");
    }

    #[test]
    fn unknown_ids_are_a_no_op() {
        let mut list = TaskList::default();
        list.add("keep");

        assert!(!list.toggle(Uuid::new_v4()));
        assert!(!list.remove(Uuid::new_v4()));
        assert_eq!(list.len(), 1);
        assert!(!list.tasks()[0].completed);
    }

    #[test]
    fn malformed_json_yields_the_empty_list() {
        assert!(TaskList::from_json("").is_empty());
        assert!(TaskList::from_json("not json").is_empty());
        assert!(TaskList::from_json(r#"{"wrong":"shape"}"#).is_empty());
        assert!(TaskList::from_json(r#"[{"id":42}]"#).is_empty());
    }
}
