pub mod kanban;
pub mod tasks;
pub mod theme;
