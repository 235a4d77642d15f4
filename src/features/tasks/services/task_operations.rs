use leptos::prelude::*;

use crate::core::error::{StoreError, StoreResult};
use crate::core::models::{TaskDraft, TaskPatch, TaskStatus};
use crate::core::services::today;
use crate::core::store::TaskStore;

/// Runs a store mutation, notifying subscribers only when it succeeded.
pub(crate) fn mutate<T>(
    store: RwSignal<TaskStore>,
    op: impl FnOnce(&mut TaskStore) -> StoreResult<T>,
) -> StoreResult<T> {
    let mut outcome = Err(StoreError::Disposed);
    store.maybe_update(|s| {
        outcome = op(s);
        outcome.is_ok()
    });
    outcome
}

pub(crate) fn log_failure(action: &str, error: &StoreError) {
    web_sys::console::error_1(&format!("Failed to {}: {}", action, error).into());
}

// Create a new task and return its id
pub fn create_task(draft: TaskDraft, store: RwSignal<TaskStore>) -> StoreResult<String> {
    let result = mutate(store, |s| s.add_task(draft, today()).map(|t| t.id.clone()));
    match &result {
        Ok(id) => web_sys::console::log_1(&format!("Created task {}", id).into()),
        Err(e) => log_failure("create task", e),
    }
    result
}

// Replace the editable fields of a task
pub fn update_task(task_id: String, patch: TaskPatch, store: RwSignal<TaskStore>) -> StoreResult<()> {
    let result = mutate(store, |s| s.update_task(&task_id, patch, today()).map(|_| ()));
    match &result {
        Ok(()) => web_sys::console::log_1(&format!("Updated task {}", task_id).into()),
        Err(e) => log_failure("update task", e),
    }
    result
}

pub fn update_task_status(task_id: String, new_status: TaskStatus, store: RwSignal<TaskStore>) {
    match mutate(store, |s| s.update_task_status(&task_id, new_status, today()).map(|_| ())) {
        Ok(()) => web_sys::console::log_1(
            &format!("Moved task {} to {}", task_id, new_status.as_str()).into(),
        ),
        Err(e) => log_failure("update task status", &e),
    }
}

pub fn delete_task(task_id: String, store: RwSignal<TaskStore>) {
    match mutate(store, |s| s.delete_task(&task_id)) {
        Ok(task) => web_sys::console::log_1(&format!("Deleted task {} ({})", task.id, task.title).into()),
        Err(e) => log_failure("delete task", &e),
    }
}
