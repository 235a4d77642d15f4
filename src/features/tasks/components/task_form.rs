use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, TagChip};
use crate::core::models::{Task, TaskPriority, TaskStatus};
use crate::features::tasks::form::{FormErrors, TaskFormState};
use crate::features::tasks::hooks::use_task_store;

#[component]
pub fn TaskForm(task: Option<Task>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_task_store();
    let projects = store.current_projects();
    let tags = Memo::new(move |_| store.store.with(|s| s.tags().to_vec()));

    let is_edit = task.is_some();
    let task_id = task.as_ref().map(|t| t.id.clone());
    let form = RwSignal::new(TaskFormState::for_task(task.as_ref()));
    let errors = RwSignal::new(FormErrors::default());
    let submit_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = match form.with_untracked(TaskFormState::validate) {
            Ok(draft) => draft,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FormErrors::default());

        let result = match &task_id {
            Some(id) => store.update_task(id.clone(), draft.into()),
            None => store.create_task(draft).map(|_| ()),
        };
        match result {
            Ok(()) => on_close.run(()),
            Err(e) => submit_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <div class="form-group">
                <label for="task-title">"Title"</label>
                <input
                    id="task-title"
                    type="text"
                    placeholder="Task title"
                    class:input-error=move || errors.with(|e| e.title.is_some())
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                {move || errors.with(|e| e.title.clone()).map(|msg| view! { <p class="field-error">{msg}</p> })}
            </div>

            <div class="form-group">
                <label for="task-description">"Description"</label>
                <textarea
                    id="task-description"
                    placeholder="Task description"
                    rows="4"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="task-project">"Project"</label>
                    <select
                        id="task-project"
                        prop:value=move || form.with(|f| f.project_id.clone())
                        on:change=move |ev| form.update(|f| f.project_id = event_target_value(&ev))
                    >
                        <option value="">"No Project"</option>
                        {move || {
                            let selected = form.with(|f| f.project_id.clone());
                            projects
                                .get()
                                .into_iter()
                                .map(|p| {
                                    let is_selected = p.id == selected;
                                    view! { <option value=p.id selected=is_selected>{p.name}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="form-group">
                    <label for="task-status">"Status"</label>
                    <select
                        id="task-status"
                        prop:value=move || form.with(|f| f.status.id())
                        on:change=move |ev| {
                            if let Some(status) = TaskStatus::from_id(&event_target_value(&ev)) {
                                form.update(|f| f.status = status);
                            }
                        }
                    >
                        {TaskStatus::all()
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <option value=s.id() selected=move || form.with(|f| f.status == s)>
                                        {s.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="task-priority">"Priority"</label>
                    <select
                        id="task-priority"
                        prop:value=move || form.with(|f| f.priority.id())
                        on:change=move |ev| {
                            if let Some(priority) = TaskPriority::from_id(&event_target_value(&ev)) {
                                form.update(|f| f.priority = priority);
                            }
                        }
                    >
                        {TaskPriority::all()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <option value=p.id() selected=move || form.with(|f| f.priority == p)>
                                        {p.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="task-due">"Due Date"</label>
                    <input
                        id="task-due"
                        type="date"
                        class:input-error=move || errors.with(|e| e.due_date.is_some())
                        prop:value=move || form.with(|f| f.due_date.clone())
                        on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
                    />
                    {move || errors.with(|e| e.due_date.clone()).map(|msg| view! { <p class="field-error">{msg}</p> })}
                </div>
            </div>

            <div class="form-group">
                <label>"Tags"</label>
                <div class="tag-picker">
                    {move || {
                        tags.get()
                            .into_iter()
                            .map(|tag| {
                                let tag_id = tag.id.clone();
                                let selected = form.with(|f| f.has_tag(&tag.id));
                                view! {
                                    <span
                                        class="tag-option"
                                        on:click=move |_| form.update(|f| f.toggle_tag(&tag_id))
                                    >
                                        <TagChip label=tag.name color=tag.color selected=selected />
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            {move || submit_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <div class="modal-actions">
                <Button variant=ButtonVariant::Outline on_click=on_close>"Cancel"</Button>
                <Button submit=true>{if is_edit { "Update Task" } else { "Create Task" }}</Button>
            </div>
        </form>
    }
}
