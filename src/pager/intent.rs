//! Intents for the pagination engine.

use crate::mvi::Intent;

/// How a caller identifies the item whose visibility triggered an intent.
///
/// `Position` is the preferred form: UI layers that enumerate items already
/// know the index, and the lookup is O(1). `Key` is the fallback for callers
/// that only hold the item value; resolving it costs a scan of the loaded
/// collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemHint<T> {
    /// Zero-based index of the visible item in the loaded collection.
    Position(usize),
    /// The visible item itself, matched by equality.
    Key(T),
}

/// Caller actions and fetch settlements processed by the pager reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum PagerIntent<T> {
    /// An item became visible (or the pager was just created, with no hint).
    /// Triggers a fetch only when the hint resolves to "near bottom".
    ItemVisible { hint: Option<ItemHint<T>> },

    /// Explicit request for the next page, e.g. a manual retry after an
    /// error. Still gated by `loading` and `end_of_data`.
    LoadRequested,

    /// The outstanding fetch settled successfully.
    PageLoaded { items: Vec<T> },

    /// The outstanding fetch settled with a failure.
    LoadFailed,

    /// Pull-to-refresh: discard everything and reload from page one.
    RefreshRequested,

    /// Clear the current error message, leaving all other state intact.
    ErrorDismissed,
}

impl<T: Clone + PartialEq + Send + 'static> Intent for PagerIntent<T> {}
