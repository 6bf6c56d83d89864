pub mod sidebar;
pub mod state;

pub use sidebar::Sidebar;
pub use state::SidebarState;
