use super::PaginationEvent;
use eframe::egui;

/// Bottom bar of the demo: the last pagination action and the source size.
#[derive(Default)]
pub struct StatusBar {
    last_event: Option<PaginationEvent>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: PaginationEvent) {
        tracing::info!(?event, "pagination changed");
        self.last_event = Some(event);
    }

    pub fn message(&self) -> String {
        match self.last_event {
            None => "Ready".to_string(),
            Some(PaginationEvent::PageChanged(page)) => format!("Moved to page {}", page + 1),
            Some(PaginationEvent::PageSizeChanged(size)) => {
                format!("Showing {} items per page", size)
            }
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, item_count: usize) {
        ui.horizontal(|ui| {
            ui.label(self.message());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{} items", item_count));
            });
        });
    }
}
