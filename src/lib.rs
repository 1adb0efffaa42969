//! A paging widget for egui.
//!
//! [`Pagination`] slices any [`DataSource`] into fixed-size pages and renders
//! the current page plus a controls bar (first, previous, page count, page
//! size, next, last). Each part is a separate render method, so a [`Layout`]
//! can rearrange them:
//!
//! ```no_run
//! use egui_pagination::{ControlsOnTop, Pagination};
//!
//! let fruit = vec!["🍈", "🍉", "🍌"];
//! let mut pagination: Pagination<_, ControlsOnTop> =
//!     Pagination::with_renderer(fruit, |ui, item, index| ui.label(format!("{index} {item}")))
//!         .items_per_page(5);
//! # let ctx = egui::Context::default();
//! # let _ = ctx.run(Default::default(), |ctx| {
//! #     egui::CentralPanel::default().show(ctx, |ui| pagination.render(ui));
//! # });
//! ```

pub mod config;
pub mod error;
pub mod pagination;
pub mod ui;

pub use crate::pagination::{DataSource, PageWindow, PaginationState, SharedSource};
pub use error::{PaginationError, Result};
pub use ui::components::{ControlsOnTop, Layout, Pagination, PaginationEvent, Stacked};
