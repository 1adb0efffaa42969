use eframe::egui;
use egui_pagination::config::Config;
use egui_pagination::ui::components::{ControlsOnTop, Pagination, StatusBar};
use egui_pagination::ui::setup_styles;
use egui_pagination::SharedSource;
use std::cell::RefCell;
use std::rc::Rc;

const FRUIT: [&str; 13] = [
    "🍈", "🍉", "🍌", "🍍", "🥭", "🍎", "🍏", "🍐", "🍑", "🍓", "🥑", "🥕", "🥒",
];

type FruitPagination<L> = Pagination<SharedSource<String>, L>;

/// Two paginations over the same fruit list: the default layout and one with
/// the controls moved above the list.
pub struct PaginationDemoApp {
    fruit: SharedSource<String>,
    new_item: String,

    default_pagination: FruitPagination<egui_pagination::Stacked>,
    custom_pagination: FruitPagination<ControlsOnTop>,

    status_bar: StatusBar,
}

impl PaginationDemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        setup_styles(&cc.egui_ctx);

        let fruit: SharedSource<String> =
            Rc::new(RefCell::new(FRUIT.iter().map(|s| s.to_string()).collect()));

        let default_pagination = Pagination::with_renderer(Rc::clone(&fruit), |ui, item, index| {
            ui.label(format!("{} {}", index, item))
        })
        .with_config(&config)
        .id_salt("default_pagination");
        let custom_pagination = Pagination::with_renderer(Rc::clone(&fruit), |ui, item, index| {
            ui.label(format!("{} {}", index, item))
        })
        .with_config(&config)
        .id_salt("custom_pagination");

        Self {
            fruit,
            new_item: String::new(),
            default_pagination,
            custom_pagination,
            status_bar: StatusBar::new(),
        }
    }

    fn show_editor(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let response = ui.text_edit_singleline(&mut self.new_item);
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if (ui.button("➕ Add").clicked() || submitted) && !self.new_item.trim().is_empty() {
                let item = std::mem::take(&mut self.new_item);
                tracing::info!(item = %item.trim(), "adding item");
                self.fruit.borrow_mut().push(item.trim().to_string());
            }

            let has_items = !self.fruit.borrow().is_empty();
            if ui.add_enabled(has_items, egui::Button::new("➖ Remove last")).clicked() {
                let removed = self.fruit.borrow_mut().pop();
                tracing::info!(item = ?removed, "removed item");
            }
        });
    }
}

impl eframe::App for PaginationDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar.show(ui, self.fruit.borrow().len());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                self.show_editor(ui);
                ui.separator();

                ui.heading("Default pagination");
                if let Some(event) = self.default_pagination.render(ui) {
                    self.status_bar.record(event);
                }
                self.default_pagination.render_range_summary(ui);

                ui.add_space(24.0);

                ui.heading("Custom pagination (controls at the top)");
                if let Some(event) = self.custom_pagination.render(ui) {
                    self.status_bar.record(event);
                }
                self.custom_pagination.render_range_summary(ui);
            });
        });
    }
}
