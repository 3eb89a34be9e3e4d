pub mod breadcrumb;
pub mod layout;
pub mod navbar;
pub mod sidebar;

pub use layout::Layout;
pub use sidebar::{SidebarContext, SidebarProvider};
