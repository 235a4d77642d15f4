use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::models::TaskStatus;
use crate::features::kanban::drag::{BoardDrag, DRAG_PAYLOAD_TYPE};

// Drag handle wrapper around a task card
#[component]
pub fn DraggableCard(
    #[prop(into)] task_id: String,
    status: TaskStatus,
    drag: BoardDrag,
    children: Children,
) -> impl IntoView {
    let dragging_id = task_id.clone();
    let on_dragstart = move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            let _ = transfer.set_data(DRAG_PAYLOAD_TYPE, &task_id);
            transfer.set_effect_allowed("move");
        }
        drag.start(task_id.clone(), status);
    };

    view! {
        <div
            class="draggable-card"
            draggable="true"
            class:dragging=move || {
                drag.source.with(|s| s.as_ref().is_some_and(|s| s.task_id == dragging_id))
            }
            on:dragstart=on_dragstart
            on:dragend=move |_| drag.cancel()
        >
            {children()}
        </div>
    }
}
