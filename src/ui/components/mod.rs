mod layout;
mod pagination;
mod status_bar;

pub use layout::{ControlsOnTop, Layout, Stacked};
pub use pagination::{ControlResponse, Pagination, PaginationEvent, RenderItem};
pub use status_bar::StatusBar;
