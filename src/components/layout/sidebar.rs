use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::{Button, EntryModal, IconButton, TagChip};
use crate::config::APP_NAME;
use crate::features::tasks::hooks::{use_debounced_search, use_search, use_task_editor, use_task_store};
use crate::features::theme::use_theme;

const NAV_ITEMS: [(&str, &str, &str); 3] = [
    ("/", "▦", "Dashboard"),
    ("/board", "▥", "Board View"),
    ("/list", "☰", "List View"),
];

#[component]
pub fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    let store = use_task_store();
    let editor = use_task_editor();
    let theme = use_theme();
    let search = use_search();
    let set_search = use_debounced_search();
    let pathname = use_location().pathname;

    let projects = store.current_projects();
    let workspaces = Memo::new(move |_| store.store.with(|s| s.workspaces().to_vec()));
    let current_workspace = Memo::new(move |_| store.store.with(|s| s.current_workspace().to_string()));
    let tags = Memo::new(move |_| store.store.with(|s| s.tags().to_vec()));

    let workspace_modal = RwSignal::new(false);
    let project_modal = RwSignal::new(false);
    let tag_modal = RwSignal::new(false);

    let close = move || open.set(false);

    view! {
        <Show when=move || open.get()>
            <div class="sidebar-overlay" on:click=move |_| close()></div>
        </Show>

        <aside class="sidebar" class:open=move || open.get()>
            <div class="sidebar-header">
                <h1 class="sidebar-logo">{APP_NAME}</h1>
                <IconButton icon="×" label="Close sidebar" extra_class="mobile-only" on_click=move || close() />
            </div>

            <div class="sidebar-search">
                <span class="search-icon">"⌕"</span>
                <input
                    type="search"
                    placeholder="Search tasks..."
                    prop:value=move || search.query.get_untracked()
                    on:input=move |ev| set_search(event_target_value(&ev))
                />
            </div>

            <nav class="sidebar-nav">
                <ul>
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(path, icon, label)| {
                            view! {
                                <li>
                                    <a
                                        href=path
                                        class="sidebar-link"
                                        class:active=move || pathname.get() == path
                                        on:click=move |_| close()
                                    >
                                        <span class="sidebar-icon">{icon}</span>
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>

            <div class="sidebar-section">
                <div class="sidebar-section-header">
                    <h2>"Workspaces"</h2>
                    <IconButton icon="+" label="Add workspace" small=true on_click=move || workspace_modal.set(true) />
                </div>
                <ul>
                    {move || {
                        workspaces
                            .get()
                            .into_iter()
                            .map(|w| {
                                let id = w.id.clone();
                                let is_current = w.id == current_workspace.get();
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="sidebar-link"
                                            class:current=is_current
                                            on:click=move |_| store.switch_workspace(id.clone())
                                        >
                                            <span class="color-dot" style=format!("background-color: {}", w.color)></span>
                                            {w.name}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>

            <div class="sidebar-section">
                <div class="sidebar-section-header">
                    <h2>"Projects"</h2>
                    <IconButton icon="+" label="Add project" small=true on_click=move || project_modal.set(true) />
                </div>
                <ul>
                    {move || {
                        projects
                            .get()
                            .into_iter()
                            .map(|p| {
                                let href = format!("/project/{}", p.id);
                                let active_href = href.clone();
                                view! {
                                    <li>
                                        <a
                                            href=href
                                            class="sidebar-link"
                                            class:active=move || pathname.get() == active_href
                                            on:click=move |_| close()
                                        >
                                            <span class="color-dot" style=format!("background-color: {}", p.color)></span>
                                            {p.name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>

            <div class="sidebar-section">
                <div class="sidebar-section-header">
                    <h2>"Tags"</h2>
                    <IconButton icon="+" label="Add tag" small=true on_click=move || tag_modal.set(true) />
                </div>
                <div class="sidebar-tags">
                    {move || {
                        tags.get()
                            .into_iter()
                            .map(|tag| {
                                let id = tag.id.clone();
                                view! {
                                    <TagChip
                                        label=tag.name
                                        color=tag.color
                                        on_delete=move || store.delete_tag(id.clone())
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <Button icon="+" full_width=true on_click=move || editor.open_new()>
                "New Task"
            </Button>

            <div class="sidebar-footer">
                <button type="button" class="sidebar-link" on:click=move |_| theme.toggle()>
                    <span class="sidebar-icon">"⚙"</span>
                    {move || theme.theme.get().toggle_label()}
                </button>
            </div>
        </aside>

        <EntryModal
            open=workspace_modal
            title="New Workspace"
            on_save=move |name: String, color: String| {
                store.create_workspace(name, color).map(|_| ()).map_err(|e| e.to_string())
            }
        />
        <EntryModal
            open=project_modal
            title="New Project"
            default_color="#8B5CF6"
            on_save=move |name: String, color: String| {
                store.create_project(name, color).map(|_| ()).map_err(|e| e.to_string())
            }
        />
        <EntryModal
            open=tag_modal
            title="New Tag"
            default_color="#10B981"
            on_save=move |name: String, color: String| {
                store.create_tag(name, color).map(|_| ()).map_err(|e| e.to_string())
            }
        />
    }
}
