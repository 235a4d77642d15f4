//! Demo data loaded on start-up.

use chrono::NaiveDate;

use crate::core::models::{
    Notification, NotificationKind, Preferences, Project, Tag, Task, TaskPriority, TaskStatus,
    Theme, User, Workspace,
};

fn entry(id: &str, name: &str, color: &str) -> (String, String, String) {
    (id.to_string(), name.to_string(), color.to_string())
}

pub(super) fn workspaces() -> Vec<Workspace> {
    [entry("1", "Personal", "#3B82F6"), entry("2", "Work", "#10B981")]
        .into_iter()
        .map(|(id, name, color)| Workspace { id, name, color })
        .collect()
}

pub(super) fn projects() -> Vec<Project> {
    [
        (entry("1", "Website Redesign", "#8B5CF6"), "2"),
        (entry("2", "Mobile App", "#EC4899"), "2"),
        (entry("3", "Home Renovation", "#F59E0B"), "1"),
    ]
    .into_iter()
    .map(|((id, name, color), workspace_id)| Project {
        id,
        name,
        color,
        workspace_id: workspace_id.to_string(),
    })
    .collect()
}

pub(super) fn tags() -> Vec<Tag> {
    [
        entry("1", "Work", "#3B82F6"),
        entry("2", "Personal", "#10B981"),
        entry("3", "Urgent", "#EF4444"),
        entry("4", "Meeting", "#8B5CF6"),
    ]
    .into_iter()
    .map(|(id, name, color)| Tag { id, name, color })
    .collect()
}

pub(super) fn user() -> User {
    User {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        avatar: None,
        preferences: Preferences {
            theme: Theme::Light,
            default_workspace: "1".to_string(),
        },
    }
}

pub(super) fn notifications(today: NaiveDate) -> Vec<Notification> {
    vec![Notification {
        id: "1".to_string(),
        title: "Task Due Soon".to_string(),
        message: "The task \"Website Redesign\" is due tomorrow".to_string(),
        kind: NotificationKind::Warning,
        read: false,
        created_at: today,
    }]
}

struct SeedTask {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    priority: TaskPriority,
    project_id: Option<&'static str>,
    tag_ids: &'static [&'static str],
    created: (u32, u32),
    updated: (u32, u32),
    due: Option<(u32, u32)>,
}

// All seed dates fall in 2023.
fn day((month, day): (u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, month, day).unwrap_or_default()
}

pub(super) fn tasks() -> Vec<Task> {
    let tags = tags();
    let seeds = [
        SeedTask {
            id: "1",
            title: "Create project structure",
            description: "Set up folders and files for the new project",
            status: TaskStatus::Completed,
            priority: TaskPriority::High,
            project_id: Some("1"),
            tag_ids: &["1"],
            created: (5, 1),
            updated: (5, 2),
            due: None,
        },
        SeedTask {
            id: "2",
            title: "Design dashboard layout",
            description: "Create wireframes for the main dashboard",
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            project_id: Some("1"),
            tag_ids: &["1", "4"],
            created: (5, 3),
            updated: (5, 3),
            due: Some((5, 10)),
        },
        SeedTask {
            id: "3",
            title: "Implement authentication",
            description: "Set up user login and registration",
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            project_id: None,
            tag_ids: &["1", "3"],
            created: (5, 4),
            updated: (5, 4),
            due: Some((5, 15)),
        },
        SeedTask {
            id: "4",
            title: "Go grocery shopping",
            description: "Buy fruits, vegetables, and milk",
            status: TaskStatus::Todo,
            priority: TaskPriority::Low,
            project_id: None,
            tag_ids: &["2"],
            created: (5, 5),
            updated: (5, 5),
            due: Some((5, 6)),
        },
        SeedTask {
            id: "5",
            title: "Prepare for project meeting",
            description: "Create slides and demo for the stakeholder meeting",
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            project_id: None,
            tag_ids: &["1", "4"],
            created: (5, 6),
            updated: (5, 6),
            due: Some((5, 8)),
        },
    ];

    seeds
        .into_iter()
        .map(|seed| Task {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            status: seed.status,
            priority: seed.priority,
            tags: tags
                .iter()
                .filter(|t| seed.tag_ids.contains(&t.id.as_str()))
                .cloned()
                .collect(),
            project_id: seed.project_id.map(str::to_string),
            created_at: day(seed.created),
            updated_at: day(seed.updated),
            due_date: seed.due.map(day),
        })
        .collect()
}
