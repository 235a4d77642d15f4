use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::SEARCH_DEBOUNCE_MS;

/// Sidebar search text, applied to every task view.
#[derive(Clone, Copy)]
pub struct SearchQuery {
    pub query: RwSignal<String>,
}

pub fn provide_search() -> SearchQuery {
    let search = SearchQuery {
        query: RwSignal::new(String::new()),
    };
    provide_context(search);
    search
}

pub fn use_search() -> SearchQuery {
    expect_context::<SearchQuery>()
}

/// Returns a setter that writes to the shared query once typing pauses.
/// Each call drops the previous pending timeout, which cancels it.
pub fn use_debounced_search() -> impl Fn(String) + Copy + 'static {
    let query = use_search().query;
    let pending = StoredValue::new_local(None::<Timeout>);
    move |value: String| {
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || query.set(value));
        pending.set_value(Some(timeout));
    }
}
