use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, TaskCard};
use crate::core::models::{Task, TaskStatus};
use crate::features::kanban::drag::BoardDrag;

use super::{DraggableCard, KanbanColumn};

#[component]
pub fn KanbanBoard(
    /// One task list per column, in `TaskStatus::all()` order.
    columns: [Signal<Vec<Task>>; 3],
    #[prop(into)] on_status_change: Callback<(String, TaskStatus)>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_add_task: Callback<()>,
) -> impl IntoView {
    let drag = BoardDrag::default();

    let on_drop = Callback::new(move |destination: TaskStatus| {
        if let Some(change) = drag.finish(Some(destination)) {
            on_status_change.run((change.task_id, change.status));
        }
    });

    let on_checkbox = Callback::new(move |(task_id, checked): (String, bool)| {
        on_status_change.run((task_id, TaskStatus::from_checkbox(checked)));
    });

    view! {
        <div class="kanban-board">
            {TaskStatus::all()
                .into_iter()
                .zip(columns)
                .map(|(status, column_tasks)| {
                    view! {
                        <KanbanColumn status=status tasks=column_tasks on_drop=on_drop drag=drag>
                            {move || {
                                column_tasks
                                    .get()
                                    .into_iter()
                                    .map(|task| {
                                        view! {
                                            <DraggableCard task_id=task.id.clone() status=status drag=drag>
                                                <TaskCard
                                                    task=task
                                                    on_status_change=on_checkbox
                                                    on_edit=on_edit
                                                    on_delete=on_delete
                                                />
                                            </DraggableCard>
                                        }
                                    })
                                    .collect_view()
                            }}
                            {(status == TaskStatus::Todo).then(|| view! {
                                <Button
                                    variant=ButtonVariant::Ghost
                                    icon="+"
                                    small=true
                                    full_width=true
                                    on_click=on_add_task
                                >
                                    "Add task"
                                </Button>
                            })}
                        </KanbanColumn>
                    }
                })
                .collect_view()}
        </div>
    }
}
