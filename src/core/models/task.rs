use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Tag;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Stable identifier used in form values and drag payloads.
    pub fn id(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|status| status.id() == id)
    }

    /// Board column order.
    pub fn all() -> [TaskStatus; 3] {
        [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed]
    }

    /// Status selected by a task card's completion checkbox.
    pub fn from_checkbox(checked: bool) -> Self {
        if checked {
            TaskStatus::Completed
        } else {
            TaskStatus::Todo
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|priority| priority.id() == id)
    }

    pub fn all() -> [TaskPriority; 3] {
        [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub tags: Vec<Tag>,
    pub project_id: Option<String>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Builds a task from a draft whose tag ids were already resolved.
    pub fn from_draft(draft: TaskDraft, tags: Vec<Tag>, today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            tags,
            project_id: draft.project_id,
            created_at: today,
            updated_at: today,
            due_date: draft.due_date,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    pub fn update_status(&mut self, status: TaskStatus, today: NaiveDate) {
        self.status = status;
        self.updated_at = today;
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t.id == tag_id)
    }
}

/// Everything needed to create a task; tags are referenced by id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub tag_ids: Vec<String>,
    pub project_id: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Partial update. `None` leaves a field untouched; the nested options on
/// `project_id` and `due_date` allow clearing them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub tag_ids: Option<Vec<String>>,
    pub project_id: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl From<TaskDraft> for TaskPatch {
    fn from(draft: TaskDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            status: Some(draft.status),
            priority: Some(draft.priority),
            tag_ids: Some(draft.tag_ids),
            project_id: Some(draft.project_id),
            due_date: Some(draft.due_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_names_match_column_ids() {
        for status in TaskStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.id()));
            assert_eq!(TaskStatus::from_id(status.id()), Some(status));
        }
        assert_eq!(TaskStatus::from_id("done"), None);
    }

    #[test]
    fn checkbox_maps_to_completed_or_todo() {
        assert_eq!(TaskStatus::from_checkbox(true), TaskStatus::Completed);
        assert_eq!(TaskStatus::from_checkbox(false), TaskStatus::Todo);
    }

    #[test]
    fn task_dates_serialize_as_plain_dates() {
        let today = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        let draft = TaskDraft {
            title: "  Write report ".into(),
            due_date: NaiveDate::from_ymd_opt(2023, 5, 10),
            ..TaskDraft::default()
        };
        let task = Task::from_draft(draft, Vec::new(), today);
        assert_eq!(task.title, "Write report");
        assert_eq!(task.priority, TaskPriority::Medium);

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["created_at"], "2023-05-01");
        assert_eq!(value["due_date"], "2023-05-10");
        assert_eq!(value["status"], "todo");
    }
}
