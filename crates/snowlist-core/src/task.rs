use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single list entry. `text` is fixed at creation; only the
/// `completed` flag ever changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Callers are expected to hand in already-trimmed, non-empty
    /// text; `TaskList::add` is the gate that enforces this.
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }
}
