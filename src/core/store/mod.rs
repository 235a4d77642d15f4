//! In-memory store holding every collection the app works with.
//!
//! The store is plain data: the UI wraps it in a signal (see
//! `features::tasks::hooks`) and every mutation goes through the methods
//! below, which keep cross-references consistent. A failed mutation leaves
//! the store untouched.

mod seed;
pub mod views;

use chrono::NaiveDate;

use crate::core::error::{StoreError, StoreResult};
use crate::core::models::{
    is_hex_color, Notification, Project, Tag, Task, TaskDraft, TaskPatch, TaskStatus, User,
    UserPatch, Workspace,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    tags: Vec<Tag>,
    projects: Vec<Project>,
    workspaces: Vec<Workspace>,
    notifications: Vec<Notification>,
    current_workspace: String,
    user: User,
}

impl TaskStore {
    /// Store populated with the demo data shown on first launch.
    pub fn seeded(today: NaiveDate) -> Self {
        let user = seed::user();
        Self {
            tasks: seed::tasks(),
            tags: seed::tags(),
            projects: seed::projects(),
            workspaces: seed::workspaces(),
            notifications: seed::notifications(today),
            current_workspace: user.preferences.default_workspace.clone(),
            user,
        }
    }

    // ---- reads ----

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn current_workspace(&self) -> &str {
        &self.current_workspace
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn workspace(&self, id: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.id == id)
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Tasks in `status` that belong to the current workspace. Tasks without
    /// a project are visible in every workspace.
    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.status == status && self.in_workspace(t, &self.current_workspace))
            .cloned()
            .collect()
    }

    pub fn tasks_by_workspace(&self, workspace_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| self.in_workspace(t, workspace_id))
            .cloned()
            .collect()
    }

    pub fn tasks_by_project(&self, project_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.project_id.as_deref() == Some(project_id))
            .cloned()
            .collect()
    }

    pub fn workspace_projects(&self, workspace_id: &str) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| p.workspace_id == workspace_id)
            .cloned()
            .collect()
    }

    fn in_workspace(&self, task: &Task, workspace_id: &str) -> bool {
        match &task.project_id {
            Some(project_id) => self
                .project(project_id)
                .is_some_and(|p| p.workspace_id == workspace_id),
            None => true,
        }
    }

    // ---- tasks ----

    pub fn add_task(&mut self, draft: TaskDraft, today: NaiveDate) -> StoreResult<&Task> {
        if draft.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        if let Some(project_id) = &draft.project_id {
            self.require_project(project_id)?;
        }
        let tags = self.resolve_tags(&draft.tag_ids)?;

        self.tasks.push(Task::from_draft(draft, tags, today));
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn update_task(&mut self, id: &str, patch: TaskPatch, today: NaiveDate) -> StoreResult<&Task> {
        let index = self.task_index(id)?;

        // Validate everything before touching the task.
        let title = match patch.title {
            Some(title) if title.trim().is_empty() => return Err(StoreError::EmptyTitle),
            Some(title) => Some(title.trim().to_string()),
            None => None,
        };
        if let Some(Some(project_id)) = &patch.project_id {
            self.require_project(project_id)?;
        }
        let tags = match &patch.tag_ids {
            Some(ids) => Some(self.resolve_tags(ids)?),
            None => None,
        };

        let task = &mut self.tasks[index];
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(tags) = tags {
            task.tags = tags;
        }
        if let Some(project_id) = patch.project_id {
            task.project_id = project_id;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        task.updated_at = today;
        Ok(&self.tasks[index])
    }

    pub fn delete_task(&mut self, id: &str) -> StoreResult<Task> {
        let index = self.task_index(id)?;
        Ok(self.tasks.remove(index))
    }

    pub fn update_task_status(
        &mut self,
        id: &str,
        status: TaskStatus,
        today: NaiveDate,
    ) -> StoreResult<&Task> {
        let index = self.task_index(id)?;
        self.tasks[index].update_status(status, today);
        Ok(&self.tasks[index])
    }

    // ---- tags ----

    pub fn add_tag(&mut self, name: &str, color: &str) -> StoreResult<&Tag> {
        validate_entry("Tag", name, color)?;
        self.tags.push(Tag::new(name, color));
        Ok(&self.tags[self.tags.len() - 1])
    }

    /// Removes the tag and strips it from every task carrying it.
    pub fn delete_tag(&mut self, id: &str) -> StoreResult<Tag> {
        let index = self
            .tags
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::TagNotFound(id.to_string()))?;
        for task in &mut self.tasks {
            task.tags.retain(|t| t.id != id);
        }
        Ok(self.tags.remove(index))
    }

    // ---- projects ----

    pub fn add_project(&mut self, name: &str, color: &str, workspace_id: &str) -> StoreResult<&Project> {
        validate_entry("Project", name, color)?;
        self.require_workspace(workspace_id)?;
        self.projects.push(Project::new(name, color, workspace_id));
        Ok(&self.projects[self.projects.len() - 1])
    }

    /// Removes the project; its tasks are kept without a project.
    pub fn delete_project(&mut self, id: &str) -> StoreResult<Project> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::ProjectNotFound(id.to_string()))?;
        for task in &mut self.tasks {
            if task.project_id.as_deref() == Some(id) {
                task.project_id = None;
            }
        }
        Ok(self.projects.remove(index))
    }

    // ---- workspaces ----

    pub fn add_workspace(&mut self, name: &str, color: &str) -> StoreResult<&Workspace> {
        validate_entry("Workspace", name, color)?;
        self.workspaces.push(Workspace::new(name, color));
        Ok(&self.workspaces[self.workspaces.len() - 1])
    }

    pub fn set_current_workspace(&mut self, id: &str) -> StoreResult<()> {
        self.require_workspace(id)?;
        self.current_workspace = id.to_string();
        Ok(())
    }

    // ---- user & notifications ----

    pub fn update_user(&mut self, patch: UserPatch) -> StoreResult<&User> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(StoreError::EmptyName("User"));
            }
        }
        if let Some(workspace_id) = &patch.default_workspace {
            self.require_workspace(workspace_id)?;
        }

        let user = &mut self.user;
        if let Some(name) = patch.name {
            user.name = name.trim().to_string();
        }
        if let Some(email) = patch.email {
            user.email = email.trim().to_string();
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = avatar;
        }
        if let Some(theme) = patch.theme {
            user.preferences.theme = theme;
        }
        if let Some(workspace_id) = patch.default_workspace {
            user.preferences.default_workspace = workspace_id;
        }
        Ok(&self.user)
    }

    pub fn mark_notification_as_read(&mut self, id: &str) -> StoreResult<()> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| StoreError::NotificationNotFound(id.to_string()))?;
        notification.read = true;
        Ok(())
    }

    pub fn mark_all_notifications_read(&mut self) -> usize {
        let mut marked = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            marked += 1;
        }
        marked
    }

    // ---- helpers ----

    fn task_index(&self, id: &str) -> StoreResult<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::TaskNotFound(id.to_string()))
    }

    fn require_project(&self, id: &str) -> StoreResult<()> {
        self.project(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::ProjectNotFound(id.to_string()))
    }

    fn require_workspace(&self, id: &str) -> StoreResult<()> {
        self.workspace(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::WorkspaceNotFound(id.to_string()))
    }

    fn resolve_tags(&self, ids: &[String]) -> StoreResult<Vec<Tag>> {
        let mut tags: Vec<Tag> = Vec::with_capacity(ids.len());
        for id in ids {
            if tags.iter().any(|t| &t.id == id) {
                continue;
            }
            let tag = self
                .tags
                .iter()
                .find(|t| &t.id == id)
                .ok_or_else(|| StoreError::TagNotFound(id.clone()))?;
            tags.push(tag.clone());
        }
        Ok(tags)
    }
}

fn validate_entry(kind: &'static str, name: &str, color: &str) -> StoreResult<()> {
    if name.trim().is_empty() {
        return Err(StoreError::EmptyName(kind));
    }
    if !is_hex_color(color) {
        return Err(StoreError::InvalidColor(color.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{TaskPriority, Theme};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2023, 6, 1)
    }

    fn store() -> TaskStore {
        TaskStore::seeded(today())
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            ..TaskDraft::default()
        }
    }

    #[test]
    fn seeded_store_starts_in_default_workspace() {
        let store = store();
        assert_eq!(store.tasks().len(), 5);
        assert_eq!(store.tags().len(), 4);
        assert_eq!(store.projects().len(), 3);
        assert_eq!(store.workspaces().len(), 2);
        assert_eq!(store.current_workspace(), "1");
        assert_eq!(store.unread_notification_count(), 1);
        assert_eq!(store.notifications()[0].created_at, today());
    }

    #[test]
    fn add_task_assigns_id_and_timestamps() {
        let mut store = store();
        let task = store
            .add_task(
                TaskDraft {
                    title: "Book flights".into(),
                    priority: TaskPriority::High,
                    tag_ids: vec!["2".into(), "3".into()],
                    project_id: Some("3".into()),
                    ..TaskDraft::default()
                },
                today(),
            )
            .unwrap()
            .clone();

        assert!(uuid::Uuid::parse_str(&task.id).is_ok());
        assert_eq!(task.created_at, today());
        assert_eq!(task.updated_at, today());
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(
            task.tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            vec!["Personal", "Urgent"]
        );
        assert_eq!(store.tasks().len(), 6);
        assert_eq!(store.tasks().last().unwrap().id, task.id);
    }

    #[test]
    fn add_task_rejects_blank_title_and_unknown_refs() {
        let mut store = store();
        assert_eq!(store.add_task(draft("   "), today()).unwrap_err(), StoreError::EmptyTitle);

        let mut bad_project = draft("x");
        bad_project.project_id = Some("missing".into());
        assert_eq!(
            store.add_task(bad_project, today()).unwrap_err(),
            StoreError::ProjectNotFound("missing".into())
        );

        let mut bad_tag = draft("x");
        bad_tag.tag_ids = vec!["1".into(), "nope".into()];
        assert_eq!(
            store.add_task(bad_tag, today()).unwrap_err(),
            StoreError::TagNotFound("nope".into())
        );
        assert_eq!(store.tasks().len(), 5);
    }

    #[test]
    fn duplicate_tag_ids_are_collapsed() {
        let mut store = store();
        let mut d = draft("dupes");
        d.tag_ids = vec!["1".into(), "1".into()];
        let task = store.add_task(d, today()).unwrap();
        assert_eq!(task.tags.len(), 1);
    }

    #[test]
    fn update_task_applies_patch_and_bumps_updated_at() {
        let mut store = store();
        let patch = TaskPatch {
            title: Some(" Renamed ".into()),
            due_date: Some(None),
            project_id: Some(None),
            ..TaskPatch::default()
        };
        let task = store.update_task("2", patch, today()).unwrap();
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.due_date, None);
        assert_eq!(task.project_id, None);
        assert_eq!(task.description, "Create wireframes for the main dashboard");
        assert_eq!(task.created_at, date(2023, 5, 3));
        assert_eq!(task.updated_at, today());
    }

    #[test]
    fn failed_update_leaves_task_untouched() {
        let mut store = store();
        let before = store.task("1").cloned();
        let patch = TaskPatch {
            description: Some("changed".into()),
            tag_ids: Some(vec!["missing".into()]),
            ..TaskPatch::default()
        };
        assert!(store.update_task("1", patch, today()).is_err());
        assert_eq!(store.task("1").cloned(), before);

        assert_eq!(
            store.update_task("nope", TaskPatch::default(), today()).unwrap_err(),
            StoreError::TaskNotFound("nope".into())
        );
    }

    #[test]
    fn status_transitions_are_unconstrained() {
        let mut store = store();
        for status in [TaskStatus::Completed, TaskStatus::Todo, TaskStatus::InProgress] {
            let task = store.update_task_status("4", status, today()).unwrap();
            assert_eq!(task.status, status);
            assert_eq!(task.updated_at, today());
        }
    }

    #[test]
    fn delete_task_removes_it() {
        let mut store = store();
        let removed = store.delete_task("3").unwrap();
        assert_eq!(removed.title, "Implement authentication");
        assert!(store.task("3").is_none());
        assert!(store.delete_task("3").is_err());
    }

    #[test]
    fn deleting_a_tag_strips_it_from_tasks() {
        let mut store = store();
        assert!(store.task("2").unwrap().has_tag("4"));
        store.delete_tag("4").unwrap();
        assert!(store.tags().iter().all(|t| t.id != "4"));
        assert!(store.tasks().iter().all(|t| !t.has_tag("4")));
        assert_eq!(store.task("2").unwrap().tags.len(), 1);
    }

    #[test]
    fn add_tag_validates_name_and_color() {
        let mut store = store();
        assert_eq!(store.add_tag("", "#FFFFFF").unwrap_err(), StoreError::EmptyName("Tag"));
        assert_eq!(
            store.add_tag("Later", "red").unwrap_err(),
            StoreError::InvalidColor("red".into())
        );
        let tag = store.add_tag(" Later ", "#A1B2C3").unwrap();
        assert_eq!(tag.name, "Later");
        assert_eq!(store.tags().len(), 5);
    }

    #[test]
    fn deleting_a_project_detaches_its_tasks() {
        let mut store = store();
        store.delete_project("1").unwrap();
        assert!(store.project("1").is_none());
        assert_eq!(store.task("1").unwrap().project_id, None);
        assert_eq!(store.task("2").unwrap().project_id, None);
        assert!(store.tasks_by_project("1").is_empty());
    }

    #[test]
    fn add_project_requires_existing_workspace() {
        let mut store = store();
        assert_eq!(
            store.add_project("Garden", "#22C55E", "9").unwrap_err(),
            StoreError::WorkspaceNotFound("9".into())
        );
        let project = store.add_project("Garden", "#22C55E", "1").unwrap().clone();
        assert_eq!(store.workspace_projects("1").len(), 2);
        assert!(store.workspace_projects("1").contains(&project));
    }

    #[test]
    fn workspace_switching() {
        let mut store = store();
        assert!(store.set_current_workspace("42").is_err());
        assert_eq!(store.current_workspace(), "1");

        let id = store.add_workspace("Side Project", "#F97316").unwrap().id.clone();
        store.set_current_workspace(&id).unwrap();
        assert_eq!(store.current_workspace(), id);
    }

    #[test]
    fn tasks_by_workspace_includes_unassigned_tasks() {
        let store = store();
        let ids = |tasks: Vec<Task>| tasks.into_iter().map(|t| t.id).collect::<Vec<_>>();
        // Tasks 1 and 2 belong to project 1 in workspace 2; 3, 4 and 5 have no project.
        assert_eq!(ids(store.tasks_by_workspace("1")), vec!["3", "4", "5"]);
        assert_eq!(ids(store.tasks_by_workspace("2")), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn tasks_by_status_is_scoped_to_current_workspace() {
        let mut store = store();
        assert!(store.tasks_by_status(TaskStatus::Completed).is_empty());
        let in_progress: Vec<_> = store
            .tasks_by_status(TaskStatus::InProgress)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(in_progress, vec!["5"]);

        store.set_current_workspace("2").unwrap();
        assert_eq!(store.tasks_by_status(TaskStatus::Completed).len(), 1);
        assert_eq!(store.tasks_by_status(TaskStatus::InProgress).len(), 2);
    }

    #[test]
    fn update_user_merges_fields() {
        let mut store = store();
        let user = store
            .update_user(UserPatch {
                name: Some("Jane Roe".into()),
                theme: Some(Theme::Dark),
                ..UserPatch::default()
            })
            .unwrap();
        assert_eq!(user.name, "Jane Roe");
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.preferences.theme, Theme::Dark);
        assert_eq!(user.initial(), "J");

        assert!(store
            .update_user(UserPatch {
                default_workspace: Some("nope".into()),
                ..UserPatch::default()
            })
            .is_err());
    }

    #[test]
    fn notifications_can_be_marked_read() {
        let mut store = store();
        store.mark_notification_as_read("1").unwrap();
        assert_eq!(store.unread_notification_count(), 0);
        assert!(store.mark_notification_as_read("2").is_err());
        assert_eq!(store.mark_all_notifications_read(), 0);
    }

    #[test]
    fn deleting_unknown_tag_or_project_changes_nothing() {
        let mut store = store();
        let before = store.clone();

        assert_eq!(
            store.delete_tag("missing"),
            Err(StoreError::TagNotFound("missing".into()))
        );
        assert_eq!(
            store.delete_project("missing"),
            Err(StoreError::ProjectNotFound("missing".into()))
        );
        assert_eq!(store, before);
    }

    #[test]
    fn add_workspace_validates_name_and_color() {
        let mut store = store();
        let before = store.clone();

        assert_eq!(
            store.add_workspace("   ", "#123456").unwrap_err(),
            StoreError::EmptyName("Workspace")
        );
        assert_eq!(
            store.add_workspace("Side", "blue").unwrap_err(),
            StoreError::InvalidColor("blue".into())
        );
        assert_eq!(
            store.add_workspace("Side", "#12345").unwrap_err(),
            StoreError::InvalidColor("#12345".into())
        );
        assert_eq!(store, before);

        let workspace = store.add_workspace(" Side ", "#12AB56").unwrap();
        assert_eq!(workspace.name, "Side");
        assert_eq!(store.workspaces().len(), 3);
    }
}
