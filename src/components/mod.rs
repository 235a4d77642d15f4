pub mod button;
pub mod click_outside;
pub mod dropdown;
pub mod entry_modal;
pub mod layout;
pub mod modal;
pub mod profile_modal;
pub mod tag_chip;
pub mod task_card;
pub mod task_list;

pub use button::{Button, ButtonVariant, IconButton};
pub use dropdown::{Dropdown, DropdownItem, DropdownSeparator};
pub use entry_modal::EntryModal;
pub use modal::Modal;
pub use profile_modal::ProfileModal;
pub use tag_chip::TagChip;
pub use task_card::TaskCard;
pub use task_list::{TaskGrid, TaskList};
