use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("task {0} not found")]
    TaskNotFound(String),

    #[error("tag {0} not found")]
    TagNotFound(String),

    #[error("project {0} not found")]
    ProjectNotFound(String),

    #[error("workspace {0} not found")]
    WorkspaceNotFound(String),

    #[error("notification {0} not found")]
    NotificationNotFound(String),

    #[error("Title is required")]
    EmptyTitle,

    #[error("{0} name is required")]
    EmptyName(&'static str),

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("task store is no longer available")]
    Disposed,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}
