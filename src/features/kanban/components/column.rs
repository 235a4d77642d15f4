use leptos::ev::DragEvent;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::core::models::{Task, TaskStatus};
use crate::features::kanban::drag::BoardDrag;

#[component]
pub fn KanbanColumn(
    status: TaskStatus,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_drop: Callback<TaskStatus>,
    drag: BoardDrag,
    children: Children,
) -> impl IntoView {
    let on_dragover = move |ev: DragEvent| {
        // Without this the browser refuses the drop.
        ev.prevent_default();
        drag.hover(status);
    };
    let column_ref: NodeRef<Div> = NodeRef::new();
    // Moving between the column's own children also fires dragleave.
    let on_dragleave = move |ev: DragEvent| {
        let entered = ev
            .related_target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let still_inside = column_ref
            .get_untracked()
            .is_some_and(|column| column.contains(entered.as_ref()));
        if !still_inside {
            drag.leave(status);
        }
    };
    let on_drop_event = move |ev: DragEvent| {
        ev.prevent_default();
        on_drop.run(status);
    };

    view! {
        <div
            node_ref=column_ref
            class="kanban-column"
            class:drag-over=move || drag.over.get() == Some(status)
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop_event
        >
            <div class="column-header">
                <h3>{status.as_str()}</h3>
                <span class="task-count">{move || tasks.with(Vec::len)}</span>
            </div>
            <div class="column-content">{children()}</div>
        </div>
    }
}
