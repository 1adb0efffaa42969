//! Page arithmetic and pagination state, independent of any UI toolkit.

mod source;
mod state;
mod window;

pub use source::{DataSource, SharedSource};
pub use state::{PaginationState, DEFAULT_ITEMS_PER_PAGE, PAGE_SIZE_OPTIONS};
pub use window::PageWindow;
