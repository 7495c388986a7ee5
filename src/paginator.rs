//! Page navigation state machine
//!
//! Pure state over a 1-indexed `current_page` in `[1, total_pages]`.
//! Transitions clamp at the boundaries instead of erroring, and the
//! paginator itself has no rendering or scrolling side effects; the
//! controller re-renders after every transition that reports a change.

/// Total page count for a collection: `max(1, ceil(count / page_size))`.
///
/// An empty collection still has one (empty) page so `current_page` always
/// has a valid value.
#[must_use]
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size).max(1)
}

/// Navigation state over the paged collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    total_pages: usize,
}

impl Paginator {
    /// Start at page 1 for a collection of `count` articles.
    #[must_use]
    pub fn new(count: usize, page_size: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: total_pages(count, page_size),
        }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Advance one page. No-op at the last page. Returns whether the page
    /// changed.
    pub fn next(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. No-op at the first page. Returns whether the page
    /// changed.
    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to an arbitrary page, clamped into `[1, total_pages]`. Returns
    /// whether the page changed.
    pub fn jump(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.total_pages);
        let changed = target != self.current_page;
        self.current_page = target;
        changed
    }

    #[must_use]
    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Whether the pagination controls should appear at all.
    ///
    /// Single-page and empty collections hide the controls entirely rather
    /// than showing them disabled.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.total_pages > 1
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(0, crate::constants::ARTICLES_PER_PAGE)
    }
}
