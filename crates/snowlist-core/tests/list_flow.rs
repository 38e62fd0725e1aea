use snowlist_core::list::TaskList;
use snowlist_core::view::project;

#[test]
fn first_task_fills_the_pending_group_only() {
    let mut list = TaskList::default();
    list.add("Buy milk");

    assert_eq!(list.len(), 1);
    assert_eq!(list.tasks()[0].text, "Buy milk");
    assert!(!list.tasks()[0].completed);

    let view = project(list.tasks());
    assert_eq!(view.pending.len(), 1);
    assert!(view.done.is_empty());
}

#[test]
fn newest_task_comes_first() {
    let mut list = TaskList::default();
    list.add("A");
    list.add("B");

    let texts: Vec<&str> = list.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["B", "A"]);
}

#[test]
fn completing_a_task_moves_it_between_groups() {
    let mut list = TaskList::default();
    let id = list.add("A").expect("task should be created").id;

    list.toggle(id);

    let view = project(list.tasks());
    assert!(view.pending.is_empty());
    assert_eq!(view.done.len(), 1);
    assert!(view.done[0].completed);
}

#[test]
fn stored_json_round_trips() {
    let mut list = TaskList::default();
    list.add("ship it");
    list.add("review it");
    let id = list.add("write it").expect("task should be created").id;
    list.toggle(id);

    let json = list.to_json().expect("serialize task list");
    let restored = TaskList::from_json(&json);

    assert_eq!(restored, list);
}
