use super::layout::{Layout, Stacked};
use crate::config::Config;
use crate::pagination::{DataSource, PageWindow, PaginationState, PAGE_SIZE_OPTIONS};
use eframe::egui;
use std::fmt::Display;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(0);

/// Renders one item of the source; receives the item and its index in the source.
pub type RenderItem<T> = Box<dyn Fn(&mut egui::Ui, &T, usize) -> egui::Response>;

/// What an interactive control drew, and the change it made this frame.
pub type ControlResponse = egui::InnerResponse<Option<PaginationEvent>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationEvent {
    PageChanged(usize),
    PageSizeChanged(usize),
}

/// A paged view over a [`DataSource`].
///
/// The widget keeps only the current page and page size. Bounds, page count
/// and first/last flags are derived from the source length each time they are
/// read, so the source may change between frames. `L` picks how the list and
/// the controls bar are arranged by [`Pagination::render`].
pub struct Pagination<S: DataSource, L: Layout = Stacked> {
    source: S,
    render_item: RenderItem<S::Item>,
    state: PaginationState,
    page_size_options: Vec<usize>,
    id: egui::Id,
    layout: PhantomData<L>,
}

impl<S: DataSource, L: Layout> Pagination<S, L> {
    /// Pages over `source`, showing each item as a plain label.
    pub fn new(source: S) -> Self
    where
        S::Item: Display,
    {
        Self::with_renderer(source, |ui, item, _index| ui.label(item.to_string()))
    }

    /// Pages over `source`, drawing each visible item with `render_item`.
    ///
    /// The source is borrowed while `render_item` runs, so a renderer must not
    /// mutate a [`RefCell`](std::cell::RefCell)-backed source (for example from
    /// a per-item "remove" button); record the change and apply it after the
    /// pagination has rendered.
    pub fn with_renderer(
        source: S,
        render_item: impl Fn(&mut egui::Ui, &S::Item, usize) -> egui::Response + 'static,
    ) -> Self {
        Self {
            source,
            render_item: Box::new(render_item),
            state: PaginationState::default(),
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            id: egui::Id::new(("pagination", NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))),
            layout: PhantomData,
        }
    }

    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.state = PaginationState::new(items_per_page);
        self
    }

    /// Replaces the sizes offered by the selector. Zero sizes are dropped and an
    /// empty list keeps the current options.
    pub fn page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        let options: Vec<usize> = options.into().into_iter().filter(|&size| size > 0).collect();
        if options.is_empty() {
            tracing::warn!("no usable page size options, keeping defaults");
        } else {
            self.page_size_options = options;
        }
        self
    }

    pub fn with_config(self, config: &Config) -> Self {
        self.items_per_page(config.items_per_page)
            .page_size_options(config.page_size_options.clone())
    }

    /// Replaces the generated widget id, e.g. to keep selector state stable
    /// across app restarts.
    pub fn id_salt(mut self, salt: impl Hash) -> Self {
        self.id = egui::Id::new(salt);
        self
    }

    pub fn page(&self) -> usize {
        self.state.page()
    }

    pub fn current_items_per_page(&self) -> usize {
        self.state.items_per_page()
    }

    pub fn offered_page_sizes(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn window(&self) -> PageWindow {
        self.state.window(self.source.len())
    }

    pub fn min(&self) -> usize {
        self.window().lower_bound()
    }

    pub fn max(&self) -> usize {
        self.window().upper_bound()
    }

    pub fn total_pages(&self) -> usize {
        self.window().total_pages()
    }

    pub fn is_first_page(&self) -> bool {
        self.window().is_first_page()
    }

    pub fn is_last_page(&self) -> bool {
        self.window().is_last_page()
    }

    pub fn visible_indices(&self) -> Range<usize> {
        self.window().indices()
    }

    pub fn first_page(&mut self) {
        self.state.first_page();
        tracing::debug!(page = self.page(), "first page");
    }

    pub fn next_page(&mut self) {
        self.state.next_page();
        tracing::debug!(page = self.page(), "next page");
    }

    pub fn prev_page(&mut self) {
        self.state.prev_page();
        tracing::debug!(page = self.page(), "previous page");
    }

    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
        tracing::debug!(page, "set page");
    }

    pub fn last_page(&mut self) {
        self.state.last_page(self.source.len());
        tracing::debug!(page = self.page(), "last page");
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) -> bool {
        let changed = self.state.set_items_per_page(items_per_page, self.source.len());
        if changed {
            tracing::debug!(items_per_page, page = self.page(), "set items per page");
        }
        changed
    }

    pub fn page_count_text(&self) -> String {
        format!("{} / {}", self.page().saturating_add(1), self.total_pages())
    }

    pub fn range_summary(&self) -> String {
        let window = self.window();
        let indices = window.indices();
        if indices.is_empty() {
            format!("0 of {}", window.len())
        } else {
            format!("{}-{} of {}", indices.start + 1, indices.end, window.len())
        }
    }

    /// Renders every item in the current window, in source order.
    pub fn render_list(&self, ui: &mut egui::Ui) -> Vec<egui::Response> {
        self.visible_indices()
            .filter_map(|index| {
                self.source
                    .with_item(index, |item| (self.render_item)(ui, item, index))
            })
            .collect()
    }

    pub fn render_first_button(&mut self, ui: &mut egui::Ui) -> ControlResponse {
        let response = nav_button(ui, !self.is_first_page(), "⏮", "First page");
        let event = response.clicked().then(|| {
            self.first_page();
            PaginationEvent::PageChanged(self.page())
        });
        egui::InnerResponse::new(event, response)
    }

    pub fn render_prev_button(&mut self, ui: &mut egui::Ui) -> ControlResponse {
        let response = nav_button(ui, !self.is_first_page(), "◀", "Previous page");
        let event = response.clicked().then(|| {
            self.prev_page();
            PaginationEvent::PageChanged(self.page())
        });
        egui::InnerResponse::new(event, response)
    }

    pub fn render_next_button(&mut self, ui: &mut egui::Ui) -> ControlResponse {
        let response = nav_button(ui, !self.is_last_page(), "▶", "Next page");
        let event = response.clicked().then(|| {
            self.next_page();
            PaginationEvent::PageChanged(self.page())
        });
        egui::InnerResponse::new(event, response)
    }

    /// Jumps straight to the last page rather than stepping forward.
    pub fn render_last_button(&mut self, ui: &mut egui::Ui) -> ControlResponse {
        let response = nav_button(ui, !self.is_last_page(), "⏭", "Last page");
        let event = response.clicked().then(|| {
            self.last_page();
            PaginationEvent::PageChanged(self.page())
        });
        egui::InnerResponse::new(event, response)
    }

    pub fn render_page_count_text(&self, ui: &mut egui::Ui) -> egui::Response {
        ui.label(self.page_count_text())
    }

    pub fn render_range_summary(&self, ui: &mut egui::Ui) -> egui::Response {
        ui.label(self.range_summary())
    }

    pub fn render_page_size_selector(&mut self, ui: &mut egui::Ui) -> ControlResponse {
        let current = self.current_items_per_page();
        let mut selected = current;

        let response = egui::ComboBox::from_id_source(self.selector_id())
            .selected_text(selected.to_string())
            .width(48.0)
            .show_ui(ui, |ui| {
                for &size in &self.page_size_options {
                    ui.selectable_value(&mut selected, size, size.to_string());
                }
            })
            .response;

        let event = (selected != current && self.set_items_per_page(selected))
            .then_some(PaginationEvent::PageSizeChanged(selected));
        egui::InnerResponse::new(event, response)
    }

    fn selector_id(&self) -> egui::Id {
        self.id.with("page_size")
    }

    /// First, previous, page count, page size, next, last.
    pub fn render_controls(&mut self, ui: &mut egui::Ui) -> Option<PaginationEvent> {
        ui.horizontal(|ui| {
            let mut event = self.render_first_button(ui).inner;
            event = self.render_prev_button(ui).inner.or(event);
            self.render_page_count_text(ui);
            event = self.render_page_size_selector(ui).inner.or(event);
            event = self.render_next_button(ui).inner.or(event);
            self.render_last_button(ui).inner.or(event)
        })
        .inner
    }

    pub fn render(&mut self, ui: &mut egui::Ui) -> Option<PaginationEvent> {
        L::render(self, ui)
    }
}

fn nav_button(ui: &mut egui::Ui, enabled: bool, icon: &str, hint: &str) -> egui::Response {
    ui.add_enabled(enabled, egui::Button::new(icon)).on_hover_text(hint)
}
