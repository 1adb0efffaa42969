use super::pagination::{Pagination, PaginationEvent};
use crate::pagination::DataSource;
use eframe::egui;

/// Arranges a pagination's list and controls bar.
///
/// Override `render` to reorder the parts; everything it calls is available on
/// [`Pagination`], so a layout never has to reimplement the controls.
pub trait Layout: Sized {
    fn render<S: DataSource>(
        pagination: &mut Pagination<S, Self>,
        ui: &mut egui::Ui,
    ) -> Option<PaginationEvent> {
        ui.vertical(|ui| {
            pagination.render_list(ui);
            pagination.render_controls(ui)
        })
        .inner
    }
}

/// List first, controls underneath.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stacked;

impl Layout for Stacked {}

/// Controls bar above the list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlsOnTop;

impl Layout for ControlsOnTop {
    fn render<S: DataSource>(
        pagination: &mut Pagination<S, Self>,
        ui: &mut egui::Ui,
    ) -> Option<PaginationEvent> {
        ui.vertical(|ui| {
            let event = pagination.render_controls(ui);
            pagination.render_list(ui);
            event
        })
        .inner
    }
}
