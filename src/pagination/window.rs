use std::ops::Range;

/// The slice of a data source visible for a given page.
///
/// Every value is derived from `(page, items_per_page, len)` on demand, so a
/// window is cheap to rebuild each frame and never goes stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: usize,
    items_per_page: usize,
    len: usize,
}

impl PageWindow {
    pub fn new(page: usize, items_per_page: usize, len: usize) -> Self {
        Self {
            page,
            items_per_page: items_per_page.max(1),
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First index of the page, before clamping against the source length.
    pub fn lower_bound(&self) -> usize {
        self.page.saturating_mul(self.items_per_page)
    }

    /// One past the last index of the page, never beyond the source length.
    pub fn upper_bound(&self) -> usize {
        self.lower_bound()
            .saturating_add(self.items_per_page)
            .min(self.len)
    }

    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(self.items_per_page)
    }

    /// Index of the last page; 0 for an empty source.
    pub fn last_page(&self) -> usize {
        self.total_pages().saturating_sub(1)
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 0
    }

    /// An empty source has no pages, so its only page counts as the last one.
    pub fn is_last_page(&self) -> bool {
        match self.total_pages().checked_sub(1) {
            Some(last) => self.page == last,
            None => true,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        self.total_pages() > 0 && self.page >= self.total_pages()
    }

    /// Indices to render. Empty when the page lies past the end of the source.
    pub fn indices(&self) -> Range<usize> {
        let upper = self.upper_bound();
        self.lower_bound().min(upper)..upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        for len in 0..120 {
            for items_per_page in 1..25 {
                let window = PageWindow::new(0, items_per_page, len);
                let expected = (len + items_per_page - 1) / items_per_page;
                assert_eq!(window.total_pages(), expected, "len={len} ipp={items_per_page}");
                assert_eq!(window.total_pages() == 0, len == 0);
            }
        }
    }

    #[test]
    fn test_valid_pages_stay_within_bounds() {
        for len in 0..60 {
            for items_per_page in 1..12 {
                let total = PageWindow::new(0, items_per_page, len).total_pages();
                for page in 0..total {
                    let window = PageWindow::new(page, items_per_page, len);
                    assert!(window.upper_bound() - window.lower_bound() <= items_per_page);
                    assert!(window.upper_bound() <= len);
                    assert!(!window.indices().is_empty());
                    assert_eq!(window.is_last_page(), page == total - 1);
                    assert_eq!(window.is_first_page(), page == 0);
                }
            }
        }
    }

    #[test]
    fn test_first_page_of_thirteen() {
        let window = PageWindow::new(0, 10, 13);
        assert_eq!(window.indices(), 0..10);
        assert_eq!(window.total_pages(), 2);
        assert!(window.is_first_page());
        assert!(!window.is_last_page());
    }

    #[test]
    fn test_second_page_of_thirteen() {
        let window = PageWindow::new(1, 10, 13);
        assert_eq!(window.lower_bound(), 10);
        assert_eq!(window.upper_bound(), 13);
        assert_eq!(window.indices().len(), 3);
        assert!(window.is_last_page());
        assert!(!window.is_first_page());
    }

    #[test]
    fn test_empty_source() {
        let window = PageWindow::new(0, 10, 0);
        assert_eq!(window.total_pages(), 0);
        assert_eq!(window.last_page(), 0);
        assert!(window.is_first_page());
        assert!(window.is_last_page());
        assert!(!window.is_out_of_range());
        assert!(window.indices().is_empty());
    }

    #[test]
    fn test_out_of_range_page_yields_empty_window() {
        let window = PageWindow::new(1, 50, 13);
        assert_eq!(window.total_pages(), 1);
        assert!(window.is_out_of_range());
        assert!(!window.is_last_page());
        assert_eq!(window.lower_bound(), 50);
        assert_eq!(window.upper_bound(), 13);
        assert!(window.indices().is_empty());
    }

    #[test]
    fn test_zero_items_per_page_is_treated_as_one() {
        let window = PageWindow::new(2, 0, 5);
        assert_eq!(window.total_pages(), 5);
        assert_eq!(window.indices(), 2..3);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let window = PageWindow::new(usize::MAX, 10, 13);
        assert_eq!(window.lower_bound(), usize::MAX);
        assert!(window.indices().is_empty());
    }
}
