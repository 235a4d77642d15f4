use leptos::prelude::*;

use crate::components::{Button, TaskGrid};
use crate::config::DASHBOARD_PREVIEW_LIMIT;
use crate::core::models::TaskStatus;
use crate::core::services::today;
use crate::core::store::views::{self, DashboardStats};
use crate::features::tasks::hooks::{use_search, use_task_editor, use_task_store};

use super::use_card_actions;

#[component]
fn StatCard(label: &'static str, icon: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-icon">{icon}</div>
            <div>
                <p class="stat-label">{label}</p>
                <p class="stat-value">{value}</p>
            </div>
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_task_store();
    let editor = use_task_editor();
    let actions = use_card_actions();
    let tasks = store.visible_tasks(use_search());

    let stats = Memo::new(move |_| tasks.with(|t| DashboardStats::compute(t, today())));
    let recent = Signal::derive(move || tasks.with(|t| views::recent(t, DASHBOARD_PREVIEW_LIMIT)));
    let todo = Signal::derive(move || {
        tasks.with(|t| views::preview(t, TaskStatus::Todo, DASHBOARD_PREVIEW_LIMIT))
    });

    let stat = move |f: fn(&DashboardStats) -> String| Signal::derive(move || stats.with(f));

    view! {
        <div class="page dashboard">
            <div class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="page-subtitle">"Overview of your tasks and progress"</p>
                </div>
                <Button icon="+" on_click=move || editor.open_new()>"New Task"</Button>
            </div>

            <div class="stats-grid">
                <StatCard label="Total Tasks" icon="☰" value=stat(|s| s.total.to_string()) />
                <StatCard label="Completed" icon="✓" value=stat(|s| s.completed.to_string()) />
                <StatCard
                    label="In Progress"
                    icon="⏳"
                    value=stat(|s| format!("{} ({}%)", s.in_progress, s.in_progress_percent))
                />
                <StatCard label="Upcoming Due" icon="📅" value=stat(|s| s.upcoming_due.to_string()) />
            </div>

            <section class="dashboard-section">
                <div class="section-header">
                    <h2>"Recent Tasks"</h2>
                    <a href="/list" class="section-link">"View all"</a>
                </div>
                <TaskGrid
                    tasks=recent
                    on_status_change=actions.on_status_change
                    on_edit=actions.on_edit
                    on_delete=actions.on_delete
                    empty_message="No tasks yet"
                />
            </section>

            <section class="dashboard-section">
                <div class="section-header">
                    <h2>"To Do"</h2>
                    <a href="/board" class="section-link">"View board"</a>
                </div>
                <TaskGrid
                    tasks=todo
                    on_status_change=actions.on_status_change
                    on_edit=actions.on_edit
                    on_delete=actions.on_delete
                    empty_message="Nothing left to do"
                />
            </section>
        </div>
    }
}
