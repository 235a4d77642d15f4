pub mod components;
pub mod form;
pub mod hooks;
pub mod services;

pub use components::*;
