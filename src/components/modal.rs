use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

use super::click_outside::use_click_outside;
use super::IconButton;

fn lock_body_scroll(locked: bool) {
    if let Some(body) = document().body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}

/// Dialog overlay. Closes on Escape, on a press outside the dialog and on the
/// close button. Page scrolling is locked while it is open.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let dialog_ref: NodeRef<Div> = NodeRef::new();

    use_click_outside(
        dialog_ref,
        Callback::new(move |_| {
            if open.get_untracked() {
                on_close.run(());
            }
        }),
    );

    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && open.get_untracked() {
            on_close.run(());
        }
    });

    Effect::new(move |_| lock_body_scroll(open.get()));

    on_cleanup(move || {
        escape.remove();
        lock_body_scroll(false);
    });

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div
                    node_ref=dialog_ref
                    class="modal"
                    class:modal-wide=wide
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="modal-title"
                >
                    <div class="modal-header">
                        <h2 id="modal-title">{move || title.get()}</h2>
                        <IconButton icon="×" label="Close modal" small=true on_click=on_close />
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
