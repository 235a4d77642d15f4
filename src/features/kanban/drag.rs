//! Drop handling for the board, independent of the DOM drag events.

use leptos::prelude::*;

use crate::core::models::TaskStatus;

/// MIME type of the drag payload (the task id).
pub const DRAG_PAYLOAD_TYPE: &str = "text/plain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSource {
    pub task_id: String,
    pub from: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub task_id: String,
    pub status: TaskStatus,
}

/// Decides what a drop means. Dropping outside the board or back onto the
/// source column changes nothing; order within a column is not kept.
pub fn resolve_drop(source: &DragSource, destination: Option<TaskStatus>) -> Option<StatusChange> {
    let status = destination?;
    if status == source.from {
        return None;
    }
    Some(StatusChange {
        task_id: source.task_id.clone(),
        status,
    })
}

/// Live drag state shared by the board's columns.
#[derive(Clone, Copy)]
pub struct BoardDrag {
    pub source: RwSignal<Option<DragSource>>,
    pub over: RwSignal<Option<TaskStatus>>,
}

impl Default for BoardDrag {
    fn default() -> Self {
        Self {
            source: RwSignal::new(None),
            over: RwSignal::new(None),
        }
    }
}

impl BoardDrag {
    pub fn start(self, task_id: String, from: TaskStatus) {
        self.source.set(Some(DragSource { task_id, from }));
    }

    pub fn hover(self, status: TaskStatus) {
        if self.over.get_untracked() != Some(status) {
            self.over.set(Some(status));
        }
    }

    /// The pointer left `status`'s column. A later `hover` on another
    /// column may already have replaced it, so only that column is cleared.
    pub fn leave(self, status: TaskStatus) {
        if self.over.get_untracked() == Some(status) {
            self.over.set(None);
        }
    }

    /// Ends the drag, returning the change to apply, if any.
    pub fn finish(self, destination: Option<TaskStatus>) -> Option<StatusChange> {
        let change = self
            .source
            .with_untracked(|source| source.as_ref().and_then(|s| resolve_drop(s, destination)));
        self.cancel();
        change
    }

    pub fn cancel(self) {
        self.source.set(None);
        self.over.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(from: TaskStatus) -> DragSource {
        DragSource {
            task_id: "42".into(),
            from,
        }
    }

    #[test]
    fn drop_on_other_column_changes_status() {
        let change = resolve_drop(&source(TaskStatus::Todo), Some(TaskStatus::Completed));
        assert_eq!(
            change,
            Some(StatusChange {
                task_id: "42".into(),
                status: TaskStatus::Completed,
            })
        );
    }

    #[test]
    fn drop_outside_or_on_same_column_is_ignored() {
        assert_eq!(resolve_drop(&source(TaskStatus::InProgress), None), None);
        assert_eq!(
            resolve_drop(&source(TaskStatus::InProgress), Some(TaskStatus::InProgress)),
            None
        );
    }

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    #[test]
    fn leaving_a_column_clears_its_highlight() {
        with_owner(|| {
            let drag = BoardDrag::default();
            drag.start("3".into(), TaskStatus::Todo);
            drag.hover(TaskStatus::InProgress);
            assert_eq!(drag.over.get_untracked(), Some(TaskStatus::InProgress));

            drag.leave(TaskStatus::InProgress);
            assert_eq!(drag.over.get_untracked(), None);
            assert!(drag.source.with_untracked(Option::is_some));
        });
    }

    #[test]
    fn stale_leave_keeps_the_new_column_highlighted() {
        with_owner(|| {
            let drag = BoardDrag::default();
            drag.start("3".into(), TaskStatus::Todo);
            drag.hover(TaskStatus::InProgress);
            drag.hover(TaskStatus::Completed);
            drag.leave(TaskStatus::InProgress);
            assert_eq!(drag.over.get_untracked(), Some(TaskStatus::Completed));
        });
    }

    #[test]
    fn finish_returns_the_change_and_resets() {
        with_owner(|| {
            let drag = BoardDrag::default();
            drag.start("3".into(), TaskStatus::Todo);
            drag.hover(TaskStatus::Completed);

            let change = drag.finish(Some(TaskStatus::Completed));
            assert_eq!(
                change,
                Some(StatusChange {
                    task_id: "3".into(),
                    status: TaskStatus::Completed,
                })
            );
            assert_eq!(drag.source.get_untracked(), None);
            assert_eq!(drag.over.get_untracked(), None);
        });
    }

    #[test]
    fn drop_without_a_drag_source_does_nothing() {
        with_owner(|| {
            let drag = BoardDrag::default();
            drag.hover(TaskStatus::Completed);
            assert_eq!(drag.finish(Some(TaskStatus::Completed)), None);
            assert_eq!(drag.over.get_untracked(), None);
        });
    }

    #[test]
    fn cancel_drops_the_pending_drag() {
        with_owner(|| {
            let drag = BoardDrag::default();
            drag.start("3".into(), TaskStatus::Todo);
            drag.hover(TaskStatus::InProgress);
            drag.cancel();
            assert_eq!(drag.finish(Some(TaskStatus::InProgress)), None);
        });
    }
}
