use snowlist_core::view::project;
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::components::{
  SnowCanvas,
  TaskForm,
  TaskSection
};

mod storage;

#[function_component(App)]
pub fn app() -> Html {
  let list =
    use_state(storage::load_list);

  {
    let count = list.len();
    use_effect_with((), move |_| {
      tracing::info!(
        tasks = count,
        "restored task list from \
         storage"
      );
      || ()
    });
  }

  let on_add = {
    let list = list.clone();
    Callback::from(move |raw: String| {
      let mut next = (*list).clone();
      if next.add(&raw).is_none() {
        return;
      }
      storage::save_list(&next);
      list.set(next);
    })
  };

  let on_toggle = {
    let list = list.clone();
    Callback::from(move |id: Uuid| {
      let mut next = (*list).clone();
      if !next.toggle(id) {
        return;
      }
      storage::save_list(&next);
      list.set(next);
    })
  };

  let on_remove = {
    let list = list.clone();
    Callback::from(move |id: Uuid| {
      let mut next = (*list).clone();
      if !next.remove(id) {
        return;
      }
      storage::save_list(&next);
      list.set(next);
    })
  };

  let view = project(list.tasks());

  html! {
      <>
          <SnowCanvas />
          <main class="shell">
              <header class="masthead">
                  <h1>{ "Snowlist" }</h1>
                  <p class="tagline">{ "Small tasks, falling into place." }</p>
              </header>

              <TaskForm on_add={on_add} />

              <TaskSection
                  title="To do"
                  empty_label="Nothing pending. Add your first task above."
                  items={view.pending}
                  on_toggle={on_toggle.clone()}
                  on_remove={on_remove.clone()}
              />

              <TaskSection
                  title="Completed"
                  empty_label="No completed tasks yet."
                  items={view.done}
                  on_toggle={on_toggle}
                  on_remove={on_remove}
              />
          </main>
      </>
  }
}
