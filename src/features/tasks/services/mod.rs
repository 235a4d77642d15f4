pub mod catalog_operations;
pub mod task_operations;

pub use catalog_operations::*;
pub use task_operations::*;
