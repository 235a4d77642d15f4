use leptos::prelude::*;

use crate::components::{Button, TaskList};
use crate::features::tasks::hooks::{use_search, use_task_editor, use_task_store};

use super::use_card_actions;

#[component]
pub fn ListPage() -> impl IntoView {
    let store = use_task_store();
    let editor = use_task_editor();
    let actions = use_card_actions();
    let tasks = store.visible_tasks(use_search());

    view! {
        <div class="page list-page">
            <div class="page-header">
                <div>
                    <h1>"Task List"</h1>
                    <p class="page-subtitle">"All tasks grouped by status"</p>
                </div>
                <Button icon="+" on_click=move || editor.open_new()>"New Task"</Button>
            </div>
            <TaskList
                tasks=tasks
                on_status_change=actions.on_status_change
                on_edit=actions.on_edit
                on_delete=actions.on_delete
            />
        </div>
    }
}
