use super::PageWindow;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Per-instance pagination state.
///
/// Only the current page and the page size are stored; everything else is
/// derived through [`PaginationState::window`] against the current source length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page: usize,
    items_per_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl PaginationState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            page: 0,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn window(&self, len: usize) -> PageWindow {
        PageWindow::new(self.page, self.items_per_page, len)
    }

    pub fn first_page(&mut self) {
        self.page = 0;
    }

    /// Advances one page. The "next" control is disabled on the last page;
    /// calling this past the end leaves an empty window until the user navigates back.
    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Jumps straight to the last page of a source of `len` items.
    pub fn last_page(&mut self, len: usize) {
        self.page = self.window(len).last_page();
    }

    /// Changes the page size and pulls the page back onto the last valid page
    /// when the new size leaves it out of range. Returns `false` for a zero size,
    /// which is ignored.
    pub fn set_items_per_page(&mut self, items_per_page: usize, len: usize) -> bool {
        if items_per_page == 0 {
            tracing::warn!("ignoring zero items per page");
            return false;
        }

        self.items_per_page = items_per_page;
        let last = self.window(len).last_page();
        if self.page > last {
            tracing::debug!(from = self.page, to = last, "clamping page after page size change");
            self.page = last;
        }
        true
    }
}
