pub mod filter_bar;
pub mod layout;
pub mod pagination_controls;
pub mod resource_status;
pub mod tab_bar;

pub use filter_bar::{FilterSelect, SearchInput};
pub use pagination_controls::PaginationControls;
pub use resource_status::ResourceStatus;
pub use tab_bar::TabBar;
