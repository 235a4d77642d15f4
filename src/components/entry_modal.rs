use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::{Button, ButtonVariant, Modal};

/// Name + color form used to create workspaces, projects and tags.
#[component]
pub fn EntryModal(
    open: RwSignal<bool>,
    title: &'static str,
    #[prop(default = "#3B82F6")] default_color: &'static str,
    /// Receives `(name, color)`; an error message keeps the modal open.
    #[prop(into)]
    on_save: Callback<(String, String), Result<(), String>>,
) -> impl IntoView {
    let close = Callback::new(move |_| open.set(false));

    view! {
        <Modal open=open title=title.to_string() on_close=close>
            {move || {
                let name = RwSignal::new(String::new());
                let color = RwSignal::new(default_color.to_string());
                let error = RwSignal::new(None::<String>);

                let on_submit = move |ev: SubmitEvent| {
                    ev.prevent_default();
                    match on_save.run((name.get_untracked(), color.get_untracked())) {
                        Ok(()) => open.set(false),
                        Err(message) => error.set(Some(message)),
                    }
                };

                view! {
                    <form class="entry-form" on:submit=on_submit>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="entry-name">"Name"</label>
                                <input
                                    id="entry-name"
                                    type="text"
                                    placeholder="Name"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group form-group-narrow">
                                <label for="entry-color">"Color"</label>
                                <input
                                    id="entry-color"
                                    type="color"
                                    prop:value=move || color.get()
                                    on:input=move |ev| color.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                        <div class="modal-actions">
                            <Button variant=ButtonVariant::Outline on_click=close>"Cancel"</Button>
                            <Button submit=true>"Create"</Button>
                        </div>
                    </form>
                }
            }}
        </Modal>
    }
}
