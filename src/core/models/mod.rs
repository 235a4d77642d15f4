pub mod catalog;
pub mod notification;
pub mod task;
pub mod user;

pub use catalog::{is_hex_color, Project, Tag, Workspace};
pub use notification::{Notification, NotificationKind};
pub use task::{Task, TaskDraft, TaskPatch, TaskPriority, TaskStatus};
pub use user::{Preferences, Theme, User, UserPatch};
