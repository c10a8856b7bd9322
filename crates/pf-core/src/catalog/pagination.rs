use serde::{Deserialize, Serialize};

/// Entries shown before the first "load more".
pub const INITIAL_VISIBLE: usize = 6;
/// Entries revealed per "load more".
pub const PAGE_SIZE: usize = 6;

/// Growing prefix window over a filtered result.
///
/// `visible_count` only grows within one filter state and goes back to the
/// initial value whenever the filters change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    initial: usize,
    page_size: usize,
    visible_count: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(INITIAL_VISIBLE, PAGE_SIZE)
    }
}

impl Paginator {
    /// Both values are raised to at least 1.
    pub fn new(initial: usize, page_size: usize) -> Self {
        let initial = initial.max(1);
        Self {
            initial,
            page_size: page_size.max(1),
            visible_count: initial,
        }
    }

    pub fn initial(&self) -> usize {
        self.initial
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Grows the window by one page. Slicing clamps, so no upper bound is kept.
    pub fn load_more(&mut self) -> usize {
        self.visible_count = self.visible_count.saturating_add(self.page_size);
        self.visible_count
    }

    pub fn reset(&mut self) {
        self.visible_count = self.initial;
    }

    /// `filtered[0 .. min(visible_count, len)]`
    pub fn visible_slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        &filtered[..self.visible_len(filtered.len())]
    }

    pub fn visible_len(&self, filtered_len: usize) -> usize {
        self.visible_count.min(filtered_len)
    }

    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.visible_count < filtered_len
    }

    /// Whether to show the "all loaded" terminal message: everything is visible
    /// and there was more than one initial page to begin with.
    pub fn all_loaded(&self, filtered_len: usize) -> bool {
        !self.has_more(filtered_len) && filtered_len > self.initial
    }
}
