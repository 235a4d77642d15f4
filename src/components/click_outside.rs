use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn is_outside(target: NodeRef<Div>, event_target: Option<web_sys::EventTarget>) -> bool {
    let Some(element) = target.get_untracked() else {
        // Nothing rendered, nothing to be outside of.
        return false;
    };
    let node = event_target.and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    !element.contains(node.as_ref())
}

/// Calls `handler` on any mouse or touch press that lands outside `target`.
pub fn use_click_outside(target: NodeRef<Div>, handler: Callback<()>) {
    let mouse = window_event_listener(ev::mousedown, move |e| {
        if is_outside(target, e.target()) {
            handler.run(());
        }
    });
    let touch = window_event_listener(ev::touchstart, move |e| {
        if is_outside(target, e.target()) {
            handler.run(());
        }
    });
    on_cleanup(move || {
        mouse.remove();
        touch.remove();
    });
}
