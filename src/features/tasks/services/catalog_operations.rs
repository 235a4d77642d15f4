use leptos::prelude::*;

use super::task_operations::{log_failure, mutate};
use crate::core::error::StoreResult;
use crate::core::models::UserPatch;
use crate::core::store::TaskStore;

pub fn create_tag(name: String, color: String, store: RwSignal<TaskStore>) -> StoreResult<String> {
    let result = mutate(store, |s| s.add_tag(&name, &color).map(|t| t.id.clone()));
    match &result {
        Ok(id) => web_sys::console::log_1(&format!("Created tag {} ({})", name, id).into()),
        Err(e) => log_failure("create tag", e),
    }
    result
}

pub fn delete_tag(tag_id: String, store: RwSignal<TaskStore>) {
    match mutate(store, |s| s.delete_tag(&tag_id)) {
        Ok(tag) => web_sys::console::log_1(&format!("Deleted tag {}", tag.name).into()),
        Err(e) => log_failure("delete tag", &e),
    }
}

pub fn create_project(
    name: String,
    color: String,
    workspace_id: String,
    store: RwSignal<TaskStore>,
) -> StoreResult<String> {
    let result = mutate(store, |s| s.add_project(&name, &color, &workspace_id).map(|p| p.id.clone()));
    match &result {
        Ok(id) => web_sys::console::log_1(
            &format!("Created project {} ({}) in workspace {}", name, id, workspace_id).into(),
        ),
        Err(e) => log_failure("create project", e),
    }
    result
}

pub fn delete_project(project_id: String, store: RwSignal<TaskStore>) -> StoreResult<()> {
    let result = mutate(store, |s| s.delete_project(&project_id));
    match &result {
        Ok(project) => web_sys::console::log_1(&format!("Deleted project {}", project.name).into()),
        Err(e) => log_failure("delete project", e),
    }
    result.map(|_| ())
}

// Creates the workspace and switches to it
pub fn create_workspace(name: String, color: String, store: RwSignal<TaskStore>) -> StoreResult<String> {
    let result = mutate(store, |s| {
        let id = s.add_workspace(&name, &color)?.id.clone();
        s.set_current_workspace(&id)?;
        Ok(id)
    });
    match &result {
        Ok(id) => web_sys::console::log_1(&format!("Created workspace {} ({})", name, id).into()),
        Err(e) => log_failure("create workspace", e),
    }
    result
}

pub fn switch_workspace(workspace_id: String, store: RwSignal<TaskStore>) {
    if let Err(e) = mutate(store, |s| s.set_current_workspace(&workspace_id)) {
        log_failure("switch workspace", &e);
    }
}

pub fn update_user(patch: UserPatch, store: RwSignal<TaskStore>) -> StoreResult<()> {
    let result = mutate(store, |s| s.update_user(patch).map(|_| ()));
    if let Err(e) = &result {
        log_failure("update user", e);
    }
    result
}

pub fn mark_notification_read(notification_id: String, store: RwSignal<TaskStore>) {
    if let Err(e) = mutate(store, |s| s.mark_notification_as_read(&notification_id)) {
        log_failure("mark notification as read", &e);
    }
}

pub fn mark_all_notifications_read(store: RwSignal<TaskStore>) {
    let marked = mutate(store, |s| Ok(s.mark_all_notifications_read())).unwrap_or(0);
    web_sys::console::log_1(&format!("Marked {} notifications as read", marked).into());
}
