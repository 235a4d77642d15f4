use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::{Dropdown, DropdownItem, DropdownSeparator, IconButton, ProfileModal};
use crate::core::store::TaskStore;
use crate::features::tasks::hooks::{use_task_editor, use_task_store};
use crate::features::theme::use_theme;

/// Heading shown for the current route.
fn page_title(path: &str, store: &TaskStore) -> String {
    match path {
        "/" => "Dashboard".to_string(),
        "/board" => "Task Board".to_string(),
        "/list" => "Task List".to_string(),
        other => other
            .strip_prefix("/project/")
            .and_then(|id| store.project(id))
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Not Found".to_string()),
    }
}

#[component]
pub fn Navbar(#[prop(into)] on_menu_click: Callback<()>) -> impl IntoView {
    let store = use_task_store();
    let editor = use_task_editor();
    let theme = use_theme();
    let pathname = use_location().pathname;
    let profile_open = RwSignal::new(false);

    let title = move || {
        let path = pathname.get();
        store.store.with(|s| page_title(&path, s))
    };
    let unread = Memo::new(move |_| store.store.with(|s| s.unread_notification_count()));
    let user = Memo::new(move |_| store.store.with(|s| s.user().clone()));

    view! {
        <header class="navbar">
            <div class="navbar-left">
                <IconButton icon="☰" label="Open menu" extra_class="mobile-only" on_click=on_menu_click />
                <h1 class="navbar-title">{title}</h1>
            </div>

            <div class="navbar-right">
                <IconButton icon="+" label="New task" on_click=move || editor.open_new() />

                <Dropdown
                    align_right=true
                    width=320
                    trigger=move || {
                        view! {
                            <span class="notification-trigger" aria-label="Notifications">
                                "🔔"
                                <Show when=move || { unread.get() > 0 }>
                                    <span class="notification-badge">{move || unread.get()}</span>
                                </Show>
                            </span>
                        }
                    }
                >
                    <div class="dropdown-header">
                        <span>"Notifications"</span>
                        <button
                            type="button"
                            class="link-button"
                            on:click=move |_| store.mark_all_notifications_read()
                        >
                            "Mark all as read"
                        </button>
                    </div>
                    <DropdownSeparator />
                    {move || {
                        let notifications = store.store.with(|s| s.notifications().to_vec());
                        if notifications.is_empty() {
                            return view! { <p class="dropdown-empty">"No notifications"</p> }.into_any();
                        }
                        notifications
                            .into_iter()
                            .map(|n| {
                                let id = n.id.clone();
                                view! {
                                    <DropdownItem on_select=move || store.mark_notification_read(id.clone())>
                                        <div class="notification" class:unread=!n.read>
                                            <span class=format!("notification-dot {}", n.kind.class())></span>
                                            <div>
                                                <p class="notification-title">{n.title}</p>
                                                <p class="notification-message">{n.message}</p>
                                            </div>
                                        </div>
                                    </DropdownItem>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </Dropdown>

                <Dropdown
                    align_right=true
                    trigger=move || {
                        view! {
                            <span class="avatar" aria-label="User menu">
                                {move || user.with(|u| u.initial())}
                            </span>
                        }
                    }
                >
                    <div class="dropdown-header dropdown-user">
                        <p class="user-name">{move || user.with(|u| u.name.clone())}</p>
                        <p class="user-email">{move || user.with(|u| u.email.clone())}</p>
                    </div>
                    <DropdownSeparator />
                    <DropdownItem icon="👤" on_select=move || profile_open.set(true)>
                        "Profile"
                    </DropdownItem>
                    <DropdownItem icon="◐" on_select=move || theme.toggle()>
                        {move || theme.theme.get().toggle_label()}
                    </DropdownItem>
                </Dropdown>
            </div>
        </header>

        <ProfileModal open=profile_open />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn titles_follow_routes() {
        let store = TaskStore::seeded(NaiveDate::from_ymd_opt(2023, 5, 5).unwrap());
        assert_eq!(page_title("/", &store), "Dashboard");
        assert_eq!(page_title("/board", &store), "Task Board");
        assert_eq!(page_title("/list", &store), "Task List");
        assert_eq!(page_title("/project/3", &store), "Home Renovation");
        assert_eq!(page_title("/project/missing", &store), "Not Found");
        assert_eq!(page_title("/elsewhere", &store), "Not Found");
    }
}
