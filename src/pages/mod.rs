pub mod board;
pub mod dashboard;
pub mod list;
pub mod not_found;
pub mod project;

pub use board::BoardPage;
pub use dashboard::Dashboard;
pub use list::ListPage;
pub use not_found::NotFound;
pub use project::ProjectPage;

use leptos::prelude::*;

use crate::core::models::{Task, TaskStatus};
use crate::features::tasks::hooks::{use_task_editor, use_task_store};

/// Card callbacks shared by every page that renders task cards.
#[derive(Clone, Copy)]
pub(crate) struct CardActions {
    pub on_status_change: Callback<(String, bool)>,
    pub on_edit: Callback<Task>,
    pub on_delete: Callback<String>,
}

pub(crate) fn use_card_actions() -> CardActions {
    let store = use_task_store();
    let editor = use_task_editor();
    CardActions {
        on_status_change: Callback::new(move |(task_id, checked): (String, bool)| {
            store.set_status(task_id, TaskStatus::from_checkbox(checked));
        }),
        on_edit: Callback::new(move |task: Task| editor.open_edit(task)),
        on_delete: Callback::new(move |task_id: String| store.delete_task(task_id)),
    }
}
