use crate::constants::CHUNKS_PER_PAGE;

/// Page cursor over a list of records.
///
/// Pages are 1-indexed. The page size is fixed at construction; the total
/// page count is derived from the record count on every call, so the cursor
/// never needs to be told that the record list changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(CHUNKS_PER_PAGE)
    }
}

impl Pagination {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total / page_size)`, 0 for an empty list
    #[must_use]
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Store a page number as-is. Out-of-range pages render as empty slices.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Pager control: advance one page, stopping at the last page
    pub fn next_page(&mut self, total: usize) {
        let last = self.total_pages(total).max(1);
        self.page = (self.page + 1).min(last);
    }

    /// Pager control: go back one page, stopping at page 1
    pub fn prev_page(&mut self, total: usize) {
        let last = self.total_pages(total).max(1);
        self.page = self.page.saturating_sub(1).clamp(1, last);
    }

    /// Index range `[size*(page-1), size*page)` before clamping to the list
    #[must_use]
    pub fn bounds(&self) -> (usize, usize) {
        let start = self.page.saturating_sub(1).saturating_mul(self.page_size);
        (start, start.saturating_add(self.page_size))
    }

    /// The records on the current page; empty when the page is out of range
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.bounds();
        if start >= items.len() {
            return &[];
        }
        &items[start..end.min(items.len())]
    }
}
