use uuid::Uuid;

use crate::task::Task;

pub const MARK_COMPLETED_LABEL: &str = "Mark as completed";
pub const MARK_PENDING_LABEL: &str = "Mark as pending";

/// One renderable item, carrying everything the row widget needs so
/// the projection stays testable without a display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    pub toggle_label: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub pending: Vec<TaskView>,
    pub done: Vec<TaskView>,
}

/// Splits the collection into the two visual groups, preserving
/// collection order inside each group.
pub fn project(tasks: &[Task]) -> ListView {
    let mut view = ListView::default();

    for task in tasks {
        let item = TaskView {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
            toggle_label: if task.completed {
                MARK_PENDING_LABEL
            } else {
                MARK_COMPLETED_LABEL
            },
        };

        if task.completed {
            view.done.push(item);
        } else {
            view.pending.push(item);
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::{MARK_COMPLETED_LABEL, MARK_PENDING_LABEL, project};
    use crate::list::TaskList;

    #[test]
    fn every_task_lands_in_exactly_one_group() {
        let mut list = TaskList::default();
        list.add("a");
        list.add("b");
        let done_id = list.add("c").expect("task should be created").id;
        list.toggle(done_id);

        let view = project(list.tasks());
        assert_eq!(view.pending.len() + view.done.len(), list.len());
        assert!(view.pending.iter().all(|item| !item.completed));
        assert!(view.done.iter().all(|item| item.completed));
    }

    #[test]
    fn group_order_follows_collection_order() {
        let mut list = TaskList::default();
        list.add("oldest");
        list.add("middle");
        list.add("newest");

        let view = project(list.tasks());
        let texts: Vec<&str> = view.pending.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, ["newest", "middle", "oldest"]);
        assert!(view.done.is_empty());
    }

    #[test]
    fn toggle_labels_reflect_the_next_action() {
        let mut list = TaskList::default();
        let id = list.add("task").expect("task should be created").id;

        let view = project(list.tasks());
        assert_eq!(view.pending[0].toggle_label, MARK_COMPLETED_LABEL);

        list.toggle(id);
        let view = project(list.tasks());
        assert_eq!(view.done[0].toggle_label, MARK_PENDING_LABEL);
    }
}
