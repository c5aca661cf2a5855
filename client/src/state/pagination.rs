//! Client-side pagination over an already-loaded list.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One-based page cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, page_size: DEFAULT_PAGE_SIZE, total: 0 }
    }
}

impl Pagination {
    /// Page count; never less than one.
    pub fn pages(&self) -> usize {
        self.total.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Update the total and pull the cursor back inside the range.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.page.clamp(1, self.pages());
    }

    pub fn next(&mut self) {
        self.page = (self.page + 1).min(self.pages());
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// The rows of `items` on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let size = self.page_size.max(1);
        let start = self.page.saturating_sub(1).saturating_mul(size).min(items.len());
        let end = start.saturating_add(size).min(items.len());
        &items[start..end]
    }
}
