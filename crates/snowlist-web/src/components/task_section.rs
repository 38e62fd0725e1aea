use snowlist_core::view::TaskView;
use uuid::Uuid;
use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskRow;

#[derive(Properties, PartialEq)]
pub struct TaskSectionProps {
  pub title:       AttrValue,
  pub empty_label: AttrValue,
  pub items:       Vec<TaskView>,
  pub on_toggle:   Callback<Uuid>,
  pub on_remove:   Callback<Uuid>
}

#[function_component(TaskSection)]
pub fn task_section(
  props: &TaskSectionProps
) -> Html {
  html! {
      <section class="panel">
          <div class="header">
              <span>{ props.title.clone() }</span>
              <span class="badge">{ props.items.len() }</span>
          </div>
          {
              if props.items.is_empty() {
                  html! { <div class="empty">{ props.empty_label.clone() }</div> }
              } else {
                  html! {}
              }
          }
          <ul class="task-list">
              {
                  for props.items.iter().cloned().map(|item| html! {
                      <TaskRow
                          key={item.id.to_string()}
                          item={item.clone()}
                          on_toggle={props.on_toggle.clone()}
                          on_remove={props.on_remove.clone()}
                      />
                  })
              }
          </ul>
      </section>
  }
}
