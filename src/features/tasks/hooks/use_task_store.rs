use leptos::prelude::*;

use crate::core::error::StoreResult;
use crate::core::models::{Project, Task, TaskDraft, TaskPatch, TaskStatus, UserPatch};
use crate::core::services::today;
use crate::core::store::{views, TaskStore};
use crate::features::tasks::services::{
    create_project, create_tag, create_task, create_workspace, delete_project, delete_tag,
    delete_task, mark_all_notifications_read, mark_notification_read, switch_workspace,
    update_task, update_task_status, update_user,
};

use super::SearchQuery;

/// Shared handle on the app's store. `Copy`, so it can be moved into any
/// number of event handlers.
#[derive(Clone, Copy)]
pub struct TaskStoreHandle {
    pub store: RwSignal<TaskStore>,
}

pub fn provide_task_store() -> TaskStoreHandle {
    let handle = TaskStoreHandle {
        store: RwSignal::new(TaskStore::seeded(today())),
    };
    provide_context(handle);
    handle
}

pub fn use_task_store() -> TaskStoreHandle {
    expect_context::<TaskStoreHandle>()
}

impl TaskStoreHandle {
    /// Tasks of the current workspace, narrowed by the search query.
    pub fn visible_tasks(self, search: SearchQuery) -> Memo<Vec<Task>> {
        let store = self.store;
        Memo::new(move |_| {
            let query = search.query.get();
            store.with(|s| views::search(s.tasks_by_workspace(s.current_workspace()), &query))
        })
    }

    /// One board column: current-workspace tasks in `status`, narrowed by
    /// the search query.
    pub fn column_tasks(self, status: TaskStatus, search: SearchQuery) -> Memo<Vec<Task>> {
        let store = self.store;
        Memo::new(move |_| {
            let query = search.query.get();
            store.with(|s| views::search(s.tasks_by_status(status), &query))
        })
    }

    pub fn current_projects(self) -> Memo<Vec<Project>> {
        let store = self.store;
        Memo::new(move |_| store.with(|s| s.workspace_projects(s.current_workspace())))
    }

    pub fn create_task(self, draft: TaskDraft) -> StoreResult<String> {
        create_task(draft, self.store)
    }

    pub fn update_task(self, task_id: String, patch: TaskPatch) -> StoreResult<()> {
        update_task(task_id, patch, self.store)
    }

    pub fn set_status(self, task_id: String, status: TaskStatus) {
        update_task_status(task_id, status, self.store);
    }

    pub fn delete_task(self, task_id: String) {
        delete_task(task_id, self.store);
    }

    pub fn create_tag(self, name: String, color: String) -> StoreResult<String> {
        create_tag(name, color, self.store)
    }

    pub fn delete_tag(self, tag_id: String) {
        delete_tag(tag_id, self.store);
    }

    /// New projects land in the current workspace.
    pub fn create_project(self, name: String, color: String) -> StoreResult<String> {
        let workspace_id = self.store.with_untracked(|s| s.current_workspace().to_string());
        create_project(name, color, workspace_id, self.store)
    }

    pub fn delete_project(self, project_id: String) -> StoreResult<()> {
        delete_project(project_id, self.store)
    }

    pub fn create_workspace(self, name: String, color: String) -> StoreResult<String> {
        create_workspace(name, color, self.store)
    }

    pub fn switch_workspace(self, workspace_id: String) {
        switch_workspace(workspace_id, self.store);
    }

    pub fn update_user(self, patch: UserPatch) -> StoreResult<()> {
        update_user(patch, self.store)
    }

    pub fn mark_notification_read(self, notification_id: String) {
        mark_notification_read(notification_id, self.store);
    }

    pub fn mark_all_notifications_read(self) {
        mark_all_notifications_read(self.store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ids(tasks: &[Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn board_columns_follow_workspace_and_search() {
        let owner = Owner::new();
        owner.set();

        let seeded = TaskStore::seeded(NaiveDate::from_ymd_opt(2023, 5, 5).unwrap());
        let handle = TaskStoreHandle {
            store: RwSignal::new(seeded),
        };
        let search = SearchQuery {
            query: RwSignal::new(String::new()),
        };

        // Workspace 1 only sees the tasks without a project.
        let todo = handle.column_tasks(TaskStatus::Todo, search);
        let in_progress = handle.column_tasks(TaskStatus::InProgress, search);
        assert_eq!(ids(&todo.get_untracked()), vec!["3", "4"]);
        assert_eq!(ids(&in_progress.get_untracked()), vec!["5"]);

        search.query.set("grocery".into());
        assert_eq!(ids(&todo.get_untracked()), vec!["4"]);
        assert!(in_progress.get_untracked().is_empty());

        search.query.set(String::new());
        handle.store.update(|s| s.set_current_workspace("2").unwrap());
        assert_eq!(ids(&in_progress.get_untracked()), vec!["2", "5"]);
    }
}
