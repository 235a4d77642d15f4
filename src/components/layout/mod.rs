pub mod app_layout;
pub mod navbar;
pub mod sidebar;

pub use app_layout::AppLayout;
pub use navbar::Navbar;
pub use sidebar::Sidebar;
