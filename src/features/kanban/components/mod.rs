pub mod board;
pub mod column;
pub mod task_card;

pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use task_card::DraggableCard;
