//! Projections of the task collection rendered by the pages.

use chrono::{Duration, NaiveDate};

use crate::config::UPCOMING_WINDOW_DAYS;
use crate::core::models::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    /// Share of in-progress tasks, rounded to a whole percent.
    pub in_progress_percent: u32,
    pub upcoming_due: usize,
}

impl DashboardStats {
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let total = tasks.len();
        let completed = count_status(tasks, TaskStatus::Completed);
        let in_progress = count_status(tasks, TaskStatus::InProgress);
        let in_progress_percent = if total == 0 {
            0
        } else {
            (in_progress as f64 * 100.0 / total as f64).round() as u32
        };
        let horizon = today + Duration::days(UPCOMING_WINDOW_DAYS);
        let upcoming_due = tasks
            .iter()
            .filter_map(|t| t.due_date)
            .filter(|due| *due > today && *due <= horizon)
            .count();

        Self {
            total,
            completed,
            in_progress,
            in_progress_percent,
            upcoming_due,
        }
    }
}

pub fn count_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|t| t.status == status).count()
}

pub fn with_status(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks.iter().filter(|t| t.status == status).cloned().collect()
}

/// Most recently updated first. Ties keep collection order.
pub fn recent(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted.truncate(limit);
    sorted
}

pub fn preview(tasks: &[Task], status: TaskStatus, limit: usize) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.status == status)
        .take(limit)
        .cloned()
        .collect()
}

/// Case-insensitive match on title, description or tag name. A blank query
/// matches everything.
pub fn search(tasks: Vec<Task>, query: &str) -> Vec<Task> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tasks;
    }
    tasks
        .into_iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
                || t.tags.iter().any(|tag| tag.name.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::TaskStore;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, m, d).unwrap()
    }

    fn seeded() -> Vec<Task> {
        TaskStore::seeded(date(5, 5)).tasks().to_vec()
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn stats_over_seed_data() {
        // Due dates: May 10, 15, 6, 8. From May 5 the window runs to May 12.
        let stats = DashboardStats::compute(&seeded(), date(5, 5));
        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.in_progress_percent, 40);
        assert_eq!(stats.upcoming_due, 3);
    }

    #[test]
    fn due_today_and_overdue_are_not_upcoming() {
        let stats = DashboardStats::compute(&seeded(), date(5, 8));
        // May 10 and May 15; May 8 itself and May 6 are excluded.
        assert_eq!(stats.upcoming_due, 2);
        let stats = DashboardStats::compute(&seeded(), date(6, 1));
        assert_eq!(stats.upcoming_due, 0);
    }

    #[test]
    fn empty_collection_has_zero_percent() {
        let stats = DashboardStats::compute(&[], date(5, 5));
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn percent_rounds_to_nearest() {
        let mut tasks = seeded();
        tasks.truncate(3); // completed, in progress, todo
        let stats = DashboardStats::compute(&tasks, date(5, 5));
        assert_eq!(stats.in_progress_percent, 33);
        tasks.truncate(2);
        let stats = DashboardStats::compute(&tasks, date(5, 5));
        assert_eq!(stats.in_progress_percent, 50);
    }

    #[test]
    fn recent_sorts_by_updated_desc_with_stable_ties() {
        let mut tasks = seeded();
        tasks[0].updated_at = date(5, 6); // ties with task 5
        assert_eq!(ids(&recent(&tasks, 4)), vec!["1", "5", "4", "3"]);
        assert_eq!(recent(&tasks, 10).len(), 5);
    }

    #[test]
    fn preview_takes_first_matching() {
        let tasks = seeded();
        assert_eq!(ids(&preview(&tasks, TaskStatus::Todo, 4)), vec!["3", "4"]);
        assert_eq!(ids(&preview(&tasks, TaskStatus::InProgress, 1)), vec!["2"]);
    }

    #[test]
    fn search_matches_title_description_and_tags() {
        let tasks = seeded();
        assert_eq!(ids(&search(tasks.clone(), "GROCERY")), vec!["4"]);
        assert_eq!(ids(&search(tasks.clone(), "wireframes")), vec!["2"]);
        assert_eq!(ids(&search(tasks.clone(), "urgent")), vec!["3"]);
        assert_eq!(search(tasks.clone(), "  ").len(), 5);
        assert!(search(tasks, "zzz").is_empty());
    }
}
