pub mod task_form;
pub mod task_form_modal;

pub use task_form::TaskForm;
pub use task_form_modal::TaskFormModal;
