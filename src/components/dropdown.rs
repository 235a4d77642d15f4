use leptos::html::Div;
use leptos::prelude::*;

use super::click_outside::use_click_outside;

#[derive(Clone, Copy)]
struct DropdownState(RwSignal<bool>);

/// Menu that toggles when its trigger is clicked and closes on a press
/// outside of it or when an item is chosen.
#[component]
pub fn Dropdown(
    #[prop(into)] trigger: ViewFn,
    #[prop(optional)] align_right: bool,
    #[prop(default = 200)] width: u32,
    children: ChildrenFn,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let root: NodeRef<Div> = NodeRef::new();
    provide_context(DropdownState(open));

    use_click_outside(
        root,
        Callback::new(move |_| {
            if open.get_untracked() {
                open.set(false);
            }
        }),
    );

    view! {
        <div class="dropdown" node_ref=root>
            <div class="dropdown-trigger" on:click=move |_| open.update(|o| *o = !*o)>
                {trigger.run()}
            </div>
            <Show when=move || open.get()>
                <div
                    class="dropdown-menu"
                    class:align-right=align_right
                    style=format!("width: {}px", width)
                >
                    {children()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn DropdownItem(
    #[prop(optional)] danger: bool,
    #[prop(optional, into)] icon: Option<&'static str>,
    #[prop(optional, into)] on_select: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let state = use_context::<DropdownState>();
    view! {
        <button
            type="button"
            class="dropdown-item"
            class:danger=danger
            on:click=move |_| {
                if let Some(DropdownState(open)) = state {
                    open.set(false);
                }
                if let Some(cb) = on_select {
                    cb.run(());
                }
            }
        >
            {icon.map(|glyph| view! { <span class="dropdown-icon">{glyph}</span> })}
            {children()}
        </button>
    }
}

#[component]
pub fn DropdownSeparator() -> impl IntoView {
    view! { <div class="dropdown-separator"></div> }
}
