use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::components::{Button, ButtonVariant, TaskList};
use crate::core::store::views;
use crate::features::tasks::hooks::{use_search, use_task_editor, use_task_store};

use super::{use_card_actions, NotFound};

#[component]
pub fn ProjectPage() -> impl IntoView {
    let store = use_task_store();
    let editor = use_task_editor();
    let search = use_search();
    let actions = use_card_actions();
    let params = use_params_map();
    let navigate = use_navigate();

    let project_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let project = Memo::new(move |_| project_id.with(|id| store.store.with(|s| s.project(id).cloned())));
    let tasks = Signal::derive(move || {
        let query = search.query.get();
        project_id.with(|id| store.store.with(|s| views::search(s.tasks_by_project(id), &query)))
    });
    let error = RwSignal::new(None::<String>);

    let on_delete_project = move || {
        match store.delete_project(project_id.get_untracked()) {
            Ok(()) => navigate("/", NavigateOptions::default()),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Show when=move || project.with(Option::is_some) fallback=|| view! { <NotFound /> }>
            <div class="page project-page">
                <div class="page-header">
                    <div class="project-title">
                        <span
                            class="color-dot color-dot-lg"
                            style=move || project.with(|p| {
                                p.as_ref().map(|p| format!("background-color: {}", p.color)).unwrap_or_default()
                            })
                        ></span>
                        <h1>{move || project.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default())}</h1>
                    </div>
                    <div class="page-actions">
                        <Button icon="+" on_click=move || editor.open_new()>"New Task"</Button>
                        <Button variant=ButtonVariant::Danger on_click=on_delete_project.clone()>
                            "Delete Project"
                        </Button>
                    </div>
                </div>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <TaskList
                    tasks=tasks
                    on_status_change=actions.on_status_change
                    on_edit=actions.on_edit
                    on_delete=actions.on_delete
                />
            </div>
        </Show>
    }
}
