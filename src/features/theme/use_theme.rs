use leptos::prelude::*;

use crate::core::models::{Theme, UserPatch};
use crate::core::services::{load_theme, persist_theme};
use crate::features::tasks::hooks::TaskStoreHandle;

/// App-wide theme. Every change is applied to the document, saved to local
/// storage and mirrored into the user's preferences.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(self) {
        self.set_theme.update(|t| *t = t.toggled());
    }
}

pub fn provide_theme(store: TaskStoreHandle) -> ThemeContext {
    let (theme, set_theme) = signal(load_theme());

    Effect::new(move |_| {
        let theme = theme.get();
        persist_theme(theme);
        let _ = store.update_user(UserPatch {
            theme: Some(theme),
            ..UserPatch::default()
        });
    });

    let context = ThemeContext { theme, set_theme };
    provide_context(context);
    context
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
