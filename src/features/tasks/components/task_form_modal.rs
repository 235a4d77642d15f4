use leptos::prelude::*;

use crate::components::Modal;
use crate::features::tasks::hooks::use_task_editor;

use super::TaskForm;

/// The single task editor of the app, driven by the `TaskEditor` context.
#[component]
pub fn TaskFormModal() -> impl IntoView {
    let editor = use_task_editor();
    let close = Callback::new(move |_| editor.close());
    let title = Signal::derive(move || {
        if editor.editing.with(Option::is_some) {
            "Edit Task".to_string()
        } else {
            "Create New Task".to_string()
        }
    });

    view! {
        <Modal open=editor.open title=title on_close=close>
            {move || view! { <TaskForm task=editor.editing.get() on_close=close /> }}
        </Modal>
    }
}
