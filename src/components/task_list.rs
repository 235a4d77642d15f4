use leptos::prelude::*;

use crate::core::models::{Task, TaskStatus};
use crate::core::store::views;

use super::TaskCard;

/// Cards laid out in a responsive grid.
#[component]
pub fn TaskGrid(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_status_change: Callback<(String, bool)>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(optional)] empty_message: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="task-grid">
            {move || {
                let tasks = tasks.get();
                if tasks.is_empty() {
                    return empty_message
                        .map(|message| view! { <p class="empty-state">{message}</p> })
                        .into_any();
                }
                tasks
                    .into_iter()
                    .map(|task| {
                        view! {
                            <TaskCard
                                task=task
                                on_status_change=on_status_change
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

/// One section per status, each with its task count.
#[component]
pub fn TaskList(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_status_change: Callback<(String, bool)>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    TaskStatus::all()
        .into_iter()
        .map(|status| {
            let section_tasks = Signal::derive(move || tasks.with(|t| views::with_status(t, status)));
            view! {
                <section class="task-section">
                    <h2 class="section-title">
                        {status.as_str()}
                        <span class="count-badge">{move || section_tasks.with(Vec::len)}</span>
                    </h2>
                    <TaskGrid
                        tasks=section_tasks
                        on_status_change=on_status_change
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                </section>
            }
        })
        .collect_view()
}
