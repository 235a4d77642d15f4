use leptos::prelude::*;

use crate::core::models::Task;

/// Open/closed state of the task form modal, shared by every page so any
/// "New Task" button can open it.
#[derive(Clone, Copy)]
pub struct TaskEditor {
    pub open: RwSignal<bool>,
    pub editing: RwSignal<Option<Task>>,
}

impl TaskEditor {
    pub fn open_new(self) {
        self.editing.set(None);
        self.open.set(true);
    }

    pub fn open_edit(self, task: Task) {
        self.editing.set(Some(task));
        self.open.set(true);
    }

    pub fn close(self) {
        self.open.set(false);
        self.editing.set(None);
    }
}

pub fn provide_task_editor() -> TaskEditor {
    let editor = TaskEditor {
        open: RwSignal::new(false),
        editing: RwSignal::new(None),
    };
    provide_context(editor);
    editor
}

pub fn use_task_editor() -> TaskEditor {
    expect_context::<TaskEditor>()
}
