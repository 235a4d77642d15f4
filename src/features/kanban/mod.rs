pub mod components;
pub mod drag;

pub use components::*;
