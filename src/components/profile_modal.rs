use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::models::UserPatch;
use crate::features::tasks::hooks::use_task_store;

use super::{Button, ButtonVariant, Modal};

#[component]
pub fn ProfileModal(open: RwSignal<bool>) -> impl IntoView {
    let store = use_task_store();
    let close = Callback::new(move |_| open.set(false));

    view! {
        <Modal open=open title="Profile".to_string() on_close=close>
            {move || {
                let user = store.store.with_untracked(|s| s.user().clone());
                let workspaces = store.store.with_untracked(|s| s.workspaces().to_vec());
                let name = RwSignal::new(user.name);
                let email = RwSignal::new(user.email);
                let default_workspace = RwSignal::new(user.preferences.default_workspace);
                let error = RwSignal::new(None::<String>);

                let on_submit = move |ev: SubmitEvent| {
                    ev.prevent_default();
                    let patch = UserPatch {
                        name: Some(name.get_untracked()),
                        email: Some(email.get_untracked()),
                        default_workspace: Some(default_workspace.get_untracked()),
                        ..UserPatch::default()
                    };
                    match store.update_user(patch) {
                        Ok(()) => open.set(false),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                };

                view! {
                    <form class="profile-form" on:submit=on_submit>
                        <div class="form-group">
                            <label for="profile-name">"Name"</label>
                            <input
                                id="profile-name"
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="profile-email">"Email"</label>
                            <input
                                id="profile-email"
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="profile-workspace">"Default workspace"</label>
                            <select
                                id="profile-workspace"
                                on:change=move |ev| default_workspace.set(event_target_value(&ev))
                            >
                                {workspaces
                                    .into_iter()
                                    .map(|w| {
                                        let selected = w.id == default_workspace.get_untracked();
                                        view! { <option value=w.id selected=selected>{w.name}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                        <div class="modal-actions">
                            <Button variant=ButtonVariant::Outline on_click=close>"Cancel"</Button>
                            <Button submit=true>"Save"</Button>
                        </div>
                    </form>
                }
            }}
        </Modal>
    }
}
