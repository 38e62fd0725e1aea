use snowlist_core::list::TaskList;

const TASKS_STORAGE_KEY: &str =
  "snowlist.tasks.v1";

pub fn load_list() -> TaskList {
  let stored = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(TASKS_STORAGE_KEY)
        .ok()
        .flatten()
    });

  match stored {
    | Some(raw) => {
      TaskList::from_json(&raw)
    }
    | None => TaskList::default()
  }
}

pub fn save_list(list: &TaskList) {
  let json = match list.to_json() {
    | Ok(json) => json,
    | Err(error) => {
      tracing::error!(
        %error,
        "failed serializing task list \
         for local storage"
      );
      return;
    }
  };

  if let Some(storage) =
    web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    )
  {
    let _ = storage.set_item(
      TASKS_STORAGE_KEY,
      &json
    );
  }
}
