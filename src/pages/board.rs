use leptos::prelude::*;

use crate::core::models::TaskStatus;
use crate::features::kanban::KanbanBoard;
use crate::features::tasks::hooks::{use_search, use_task_editor, use_task_store};

use super::use_card_actions;

#[component]
pub fn BoardPage() -> impl IntoView {
    let store = use_task_store();
    let editor = use_task_editor();
    let actions = use_card_actions();
    let search = use_search();
    let columns = TaskStatus::all().map(|status| Signal::from(store.column_tasks(status, search)));

    view! {
        <div class="page board-page">
            <div class="page-header">
                <div>
                    <h1>"Task Board"</h1>
                    <p class="page-subtitle">"Drag cards between columns to change their status"</p>
                </div>
            </div>
            <KanbanBoard
                columns=columns
                on_status_change=move |task_id: String, status: TaskStatus| {
                    store.set_status(task_id, status)
                }
                on_edit=actions.on_edit
                on_delete=actions.on_delete
                on_add_task=move || editor.open_new()
            />
        </div>
    }
}
