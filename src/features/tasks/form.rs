//! Field state behind the task form, kept free of UI types.

use chrono::NaiveDate;

use crate::config::INPUT_DATE_FORMAT;
use crate::core::models::{Task, TaskDraft, TaskPriority, TaskStatus};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskFormState {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Raw `<input type="date">` value; empty means no due date.
    pub due_date: String,
    pub tag_ids: Vec<String>,
    /// Empty means "No Project".
    pub project_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    pub title: Option<String>,
    pub due_date: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.due_date.is_none()
    }
}

impl TaskFormState {
    /// Blank form for a new task, or pre-filled from `task` when editing.
    pub fn for_task(task: Option<&Task>) -> Self {
        match task {
            Some(task) => Self {
                title: task.title.clone(),
                description: task.description.clone(),
                status: task.status,
                priority: task.priority,
                due_date: task
                    .due_date
                    .map(|d| d.format(INPUT_DATE_FORMAT).to_string())
                    .unwrap_or_default(),
                tag_ids: task.tags.iter().map(|t| t.id.clone()).collect(),
                project_id: task.project_id.clone().unwrap_or_default(),
            },
            None => Self::default(),
        }
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tag_ids.iter().any(|id| id == tag_id)
    }

    pub fn toggle_tag(&mut self, tag_id: &str) {
        if self.has_tag(tag_id) {
            self.tag_ids.retain(|id| id != tag_id);
        } else {
            self.tag_ids.push(tag_id.to_string());
        }
    }

    pub fn validate(&self) -> Result<TaskDraft, FormErrors> {
        let mut errors = FormErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some("Title is required".to_string());
        }

        let due_date = match self.due_date.trim() {
            "" => None,
            raw => match NaiveDate::parse_from_str(raw, INPUT_DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.due_date = Some("Enter a valid date".to_string());
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TaskDraft {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
            tag_ids: self.tag_ids.clone(),
            project_id: Some(self.project_id.clone()).filter(|id| !id.is_empty()),
            due_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::TaskStore;

    #[test]
    fn new_task_defaults() {
        let form = TaskFormState::for_task(None);
        assert_eq!(form.status, TaskStatus::Todo);
        assert_eq!(form.priority, TaskPriority::Medium);
        assert!(form.title.is_empty());
        assert!(form.due_date.is_empty());
        assert!(form.tag_ids.is_empty());
        assert!(form.project_id.is_empty());
    }

    #[test]
    fn editing_prefills_from_task() {
        let store = TaskStore::seeded(NaiveDate::from_ymd_opt(2023, 5, 5).unwrap());
        let form = TaskFormState::for_task(store.task("2"));
        assert_eq!(form.title, "Design dashboard layout");
        assert_eq!(form.status, TaskStatus::InProgress);
        assert_eq!(form.due_date, "2023-05-10");
        assert_eq!(form.tag_ids, vec!["1", "4"]);
        assert_eq!(form.project_id, "1");
    }

    #[test]
    fn blank_title_is_rejected() {
        let form = TaskFormState {
            title: "   ".into(),
            ..TaskFormState::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(errors.due_date, None);
    }

    #[test]
    fn malformed_due_date_is_rejected() {
        let form = TaskFormState {
            title: "Ship it".into(),
            due_date: "2023-13-40".into(),
            ..TaskFormState::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.title, None);
        assert_eq!(errors.due_date.as_deref(), Some("Enter a valid date"));
    }

    #[test]
    fn valid_form_produces_draft() {
        let mut form = TaskFormState {
            title: " Ship it ".into(),
            description: "Release v1".into(),
            priority: TaskPriority::High,
            due_date: "2023-05-20".into(),
            ..TaskFormState::default()
        };
        form.toggle_tag("1");
        form.toggle_tag("3");
        form.toggle_tag("1");

        let draft = form.validate().unwrap();
        assert_eq!(draft.title, "Ship it");
        assert_eq!(draft.priority, TaskPriority::High);
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2023, 5, 20));
        assert_eq!(draft.tag_ids, vec!["3"]);
        assert_eq!(draft.project_id, None);
    }
}
