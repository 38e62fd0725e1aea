use web_sys::{
  HtmlInputElement,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_node_ref
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub on_add: Callback<String>
}

/// Single-line entry form. Enter inside the input rides the same
/// form-submit path as the button; there is no separate key handler.
#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let input_ref = use_node_ref();

  let onsubmit = {
    let input_ref = input_ref.clone();
    let on_add = props.on_add.clone();
    Callback::from(
      move |event: SubmitEvent| {
        event.prevent_default();

        let Some(input) = input_ref
          .cast::<HtmlInputElement>()
        else {
          return;
        };

        let value = input.value();
        if value.trim().is_empty() {
          let _ = input.focus();
          return;
        }

        on_add.emit(value);
        input.set_value("");
        let _ = input.focus();
      }
    )
  };

  html! {
      <form class="task-form" {onsubmit}>
          <input
              ref={input_ref}
              type="text"
              placeholder="What needs doing?"
              aria-label="New task"
              autocomplete="off"
          />
          <button type="submit" class="btn add">{ "Add" }</button>
      </form>
  }
}
