//! State for the pagination engine.

use crate::mvi::UiState;

use super::intent::ItemHint;

/// Snapshot of a pager's observable state.
///
/// `items` is append-only between refreshes: pages are appended whole, in
/// fetch order, and never reordered or deduplicated. `page_index` counts
/// pages successfully loaded so far, so while pages keep coming back full,
/// `items.len() == page_index * page_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerState<T> {
    /// All items loaded so far, in display order.
    pub items: Vec<T>,
    /// True exactly while a page fetch is outstanding.
    pub loading: bool,
    /// True once the source is exhausted; cleared only by a refresh.
    pub end_of_data: bool,
    /// User-facing message for the most recent failed fetch, if any.
    pub error: Option<String>,
    /// Number of pages loaded so far (0 before the first page arrives).
    pub page_index: u32,
}

impl<T> Default for PagerState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            end_of_data: false,
            error: None,
            page_index: 0,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for PagerState<T> {}

impl<T: PartialEq> PagerState<T> {
    /// Check whether a visible item should trigger a prefetch.
    ///
    /// No hint means the initial load. A position hint is O(1); a key hint
    /// scans from the tail, and a key that is no longer in the collection is
    /// treated as "not near bottom" so stale visibility events never trigger
    /// a spurious fetch.
    pub fn is_near_bottom(&self, hint: Option<&ItemHint<T>>, threshold: usize) -> bool {
        let Some(hint) = hint else {
            return true;
        };
        let position = match hint {
            ItemHint::Position(index) => Some(*index),
            ItemHint::Key(key) => self.items.iter().rposition(|item| item == key),
        };
        match position {
            Some(index) => index + threshold >= self.items.len(),
            None => false,
        }
    }
}
