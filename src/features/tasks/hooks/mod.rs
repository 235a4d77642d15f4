pub mod use_search;
pub mod use_task_editor;
pub mod use_task_store;

pub use use_search::*;
pub use use_task_editor::*;
pub use use_task_store::*;
