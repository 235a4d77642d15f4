use leptos::prelude::*;

use crate::config::CARD_DATE_FORMAT;
use crate::core::models::Task;

use super::{IconButton, TagChip};

#[component]
pub fn TaskCard(
    task: Task,
    /// Receives the task id and the new checkbox state.
    #[prop(into)]
    on_status_change: Callback<(String, bool)>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let completed = task.is_completed();
    let task_id = task.id.clone();
    let task_for_edit = task.clone();
    let task_id_for_delete = task.id.clone();

    let dates = task.due_date.map(|due| {
        view! {
            <div class="task-dates">
                <span class="task-date">"📅 Due " {due.format(CARD_DATE_FORMAT).to_string()}</span>
                <span class="task-date">
                    "🕓 Updated " {task.updated_at.format(CARD_DATE_FORMAT).to_string()}
                </span>
            </div>
        }
    });

    let description = (!task.description.is_empty()).then(|| {
        view! { <p class="task-description" class:completed=completed>{task.description.clone()}</p> }
    });

    view! {
        <div class="task-card fade-in">
            <div class="task-card-top">
                <input
                    type="checkbox"
                    class="task-checkbox"
                    prop:checked=completed
                    on:click=|e| e.stop_propagation()
                    on:change=move |ev| on_status_change.run((task_id.clone(), event_target_checked(&ev)))
                />
                <div class="task-content">
                    <h4 class="task-title" class:completed=completed>{task.title.clone()}</h4>
                    {description}
                </div>
                <div class="task-actions">
                    <IconButton
                        icon="✎"
                        label="Edit task"
                        small=true
                        on_click=move || on_edit.run(task_for_edit.clone())
                    />
                    <IconButton
                        icon="🗑"
                        label="Delete task"
                        small=true
                        extra_class="danger"
                        on_click=move || on_delete.run(task_id_for_delete.clone())
                    />
                </div>
            </div>
            {dates}
            <div class="task-meta">
                {task
                    .tags
                    .iter()
                    .map(|tag| view! { <TagChip label=tag.name.clone() color=tag.color.clone() /> })
                    .collect_view()}
                <span class=format!("task-priority priority-{}", task.priority.id())>
                    {format!("{} priority", task.priority.as_str())}
                </span>
            </div>
        </div>
    }
}
