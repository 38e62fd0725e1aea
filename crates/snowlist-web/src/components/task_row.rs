use snowlist_core::view::TaskView;
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub item:      TaskView,
  pub on_toggle: Callback<Uuid>,
  pub on_remove: Callback<Uuid>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let id = props.item.id;
  let on_toggle =
    props.on_toggle.clone();
  let on_remove =
    props.on_remove.clone();

  let check_class =
    if props.item.completed {
      "check-btn checked"
    } else {
      "check-btn"
    };
  let text_class =
    if props.item.completed {
      "task-text completed"
    } else {
      "task-text"
    };

  html! {
      <li class="task-item">
          <div class="task-left">
              <button
                  type="button"
                  class={check_class}
                  aria-label={props.item.toggle_label}
                  onclick={move |_| on_toggle.emit(id)}
              >
                  { if props.item.completed { "✓" } else { "" } }
              </button>
              <div class={text_class}>{ &props.item.text }</div>
          </div>
          <div class="task-actions">
              <button
                  type="button"
                  class="icon-btn delete"
                  aria-label="Delete task"
                  onclick={move |_| on_remove.emit(id)}
              >
                  { "✕" }
              </button>
          </div>
      </li>
  }
}
