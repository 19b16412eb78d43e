//! Reducer for the pagination engine.

use std::marker::PhantomData;

use crate::mvi::Reducer;

use super::config::PagerConfig;
use super::intent::PagerIntent;
use super::state::PagerState;

/// The one user-facing message for any fetch failure. The underlying error
/// goes to the log, never to the user.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load data. Please try again.";

/// Side work a pager transition can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerEffect {
    /// Fetch the given 1-based page from the data source.
    FetchPage { page: u32 },
}

/// Reducer for pager state transitions.
///
/// Pure function of `(state, intent)`; the embedded config is fixed at
/// construction. Fetch execution and completion delivery are handled by the
/// driver around the dispatch call.
#[derive(Debug, Clone)]
pub struct PagerReducer<T> {
    config: PagerConfig,
    _items: PhantomData<fn() -> T>,
}

impl<T> PagerReducer<T> {
    pub fn new(config: PagerConfig) -> Self {
        Self {
            config,
            _items: PhantomData,
        }
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }
}

impl<T> PagerReducer<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    /// Begin a fetch for the page after `state.page_index`.
    ///
    /// Both fetch-starting intents funnel through here so the single-flight
    /// gate lives in exactly one place.
    fn start_load(&self, mut state: PagerState<T>) -> (PagerState<T>, Option<PagerEffect>) {
        if state.loading || state.end_of_data {
            return (state, None);
        }
        state.loading = true;
        let page = state.page_index + 1;
        (state, Some(PagerEffect::FetchPage { page }))
    }
}

impl<T> Reducer for PagerReducer<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    type State = PagerState<T>;
    type Intent = PagerIntent<T>;
    type Effect = PagerEffect;

    fn reduce(
        &self,
        mut state: PagerState<T>,
        intent: PagerIntent<T>,
    ) -> (PagerState<T>, Option<PagerEffect>) {
        match intent {
            PagerIntent::ItemVisible { hint } => {
                if state.loading || state.end_of_data {
                    return (state, None);
                }
                if !state.is_near_bottom(hint.as_ref(), self.config.near_bottom_threshold) {
                    return (state, None);
                }
                self.start_load(state)
            }

            PagerIntent::LoadRequested => self.start_load(state),

            PagerIntent::PageLoaded { items } => {
                state.loading = false;
                state.error = None;

                // A short page is the source telling us it ran out; an empty
                // page means we were already past the end and contributes
                // nothing, not even a page-index bump.
                if items.len() < self.config.page_size {
                    state.end_of_data = true;
                }
                if !items.is_empty() {
                    state.items.extend(items);
                    state.page_index += 1;
                }
                if let Some(max_pages) = self.config.max_pages {
                    if state.page_index >= max_pages {
                        state.end_of_data = true;
                    }
                }
                (state, None)
            }

            PagerIntent::LoadFailed => {
                state.loading = false;
                state.error = Some(FETCH_ERROR_MESSAGE.to_string());
                (state, None)
            }

            PagerIntent::RefreshRequested => {
                state.items.clear();
                state.page_index = 0;
                state.end_of_data = false;
                state.error = None;
                state.loading = true;
                (state, Some(PagerEffect::FetchPage { page: 1 }))
            }

            PagerIntent::ErrorDismissed => {
                state.error = None;
                (state, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::intent::ItemHint;

    fn reducer() -> PagerReducer<String> {
        PagerReducer::new(PagerConfig::default())
    }

    fn full_page(page: u32) -> Vec<String> {
        let start = (page - 1) * 20 + 1;
        (start..start + 20).map(|n| format!("Item {n}")).collect()
    }

    fn state_after_pages(pages: u32) -> PagerState<String> {
        let mut state = PagerState::default();
        let reducer = reducer();
        for page in 1..=pages {
            let (next, effect) = reducer.reduce(state, PagerIntent::LoadRequested);
            assert_eq!(effect, Some(PagerEffect::FetchPage { page }));
            let (next, _) = reducer.reduce(next, PagerIntent::PageLoaded { items: full_page(page) });
            state = next;
        }
        state
    }

    #[test]
    fn initial_visibility_starts_first_fetch() {
        let (state, effect) =
            reducer().reduce(PagerState::default(), PagerIntent::ItemVisible { hint: None });
        assert!(state.loading);
        assert_eq!(effect, Some(PagerEffect::FetchPage { page: 1 }));
    }

    #[test]
    fn visibility_while_loading_is_noop() {
        let loading = PagerState {
            loading: true,
            ..state_after_pages(1)
        };
        let (state, effect) = reducer().reduce(
            loading.clone(),
            PagerIntent::ItemVisible { hint: Some(ItemHint::Position(19)) },
        );
        assert_eq!(state, loading);
        assert_eq!(effect, None);
    }

    #[test]
    fn visibility_after_end_of_data_is_noop() {
        let done = PagerState {
            end_of_data: true,
            ..state_after_pages(1)
        };
        let (state, effect) = reducer().reduce(
            done.clone(),
            PagerIntent::ItemVisible { hint: Some(ItemHint::Position(19)) },
        );
        assert_eq!(state, done);
        assert_eq!(effect, None);
    }

    #[test]
    fn visibility_far_from_bottom_does_not_fetch() {
        let loaded = state_after_pages(1);
        let (state, effect) = reducer().reduce(
            loaded.clone(),
            PagerIntent::ItemVisible { hint: Some(ItemHint::Position(2)) },
        );
        assert_eq!(state, loaded);
        assert_eq!(effect, None);
    }

    #[test]
    fn visibility_near_bottom_fetches_next_page() {
        let loaded = state_after_pages(1);
        let (state, effect) = reducer().reduce(
            loaded,
            PagerIntent::ItemVisible { hint: Some(ItemHint::Key("Item 18".into())) },
        );
        assert!(state.loading);
        assert_eq!(effect, Some(PagerEffect::FetchPage { page: 2 }));
    }

    #[test]
    fn full_page_appends_and_advances() {
        let state = state_after_pages(2);
        assert_eq!(state.items.len(), 40);
        assert_eq!(state.page_index, 2);
        assert!(!state.loading);
        assert!(!state.end_of_data);
        assert_eq!(state.items[20], "Item 21");
        assert_eq!(state.items[39], "Item 40");
    }

    #[test]
    fn short_page_appends_and_ends() {
        let reducer = reducer();
        let (state, _) = reducer.reduce(state_after_pages(2), PagerIntent::LoadRequested);
        let (state, effect) = reducer.reduce(
            state,
            PagerIntent::PageLoaded { items: vec!["Item 41".into(), "Item 42".into()] },
        );
        assert_eq!(effect, None);
        assert_eq!(state.items.len(), 42);
        assert_eq!(state.page_index, 3);
        assert!(state.end_of_data);
        assert!(!state.loading);
    }

    #[test]
    fn empty_page_ends_without_advancing() {
        let reducer = reducer();
        let (state, _) = reducer.reduce(state_after_pages(2), PagerIntent::LoadRequested);
        let (state, _) = reducer.reduce(state, PagerIntent::PageLoaded { items: Vec::new() });
        assert_eq!(state.items.len(), 40);
        assert_eq!(state.page_index, 2);
        assert!(state.end_of_data);
        assert!(!state.loading);
    }

    #[test]
    fn max_pages_cap_ends_even_on_a_full_page() {
        let reducer: PagerReducer<String> = PagerReducer::new(PagerConfig {
            max_pages: Some(2),
            ..PagerConfig::default()
        });
        let (state, _) = reducer.reduce(PagerState::default(), PagerIntent::LoadRequested);
        let (state, _) = reducer.reduce(state, PagerIntent::PageLoaded { items: full_page(1) });
        assert!(!state.end_of_data);
        let (state, _) = reducer.reduce(state, PagerIntent::LoadRequested);
        let (state, _) = reducer.reduce(state, PagerIntent::PageLoaded { items: full_page(2) });
        assert!(state.end_of_data);
        assert_eq!(state.items.len(), 40);
    }

    #[test]
    fn success_clears_previous_error() {
        let reducer = reducer();
        let (state, _) = reducer.reduce(PagerState::default(), PagerIntent::LoadRequested);
        let (state, _) = reducer.reduce(state, PagerIntent::LoadFailed);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        let (state, _) = reducer.reduce(state, PagerIntent::LoadRequested);
        let (state, _) = reducer.reduce(state, PagerIntent::PageLoaded { items: full_page(1) });
        assert_eq!(state.error, None);
    }

    #[test]
    fn failure_preserves_items_and_page_index() {
        let reducer = reducer();
        let (state, _) = reducer.reduce(state_after_pages(2), PagerIntent::LoadRequested);
        let (state, _) = reducer.reduce(state, PagerIntent::LoadFailed);
        assert_eq!(state.items.len(), 40);
        assert_eq!(state.page_index, 2);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn retry_after_failure_requests_the_same_page() {
        let reducer = reducer();
        let (state, _) = reducer.reduce(state_after_pages(2), PagerIntent::LoadRequested);
        let (state, _) = reducer.reduce(state, PagerIntent::LoadFailed);
        let (_, effect) = reducer.reduce(state, PagerIntent::LoadRequested);
        assert_eq!(effect, Some(PagerEffect::FetchPage { page: 3 }));
    }

    #[test]
    fn refresh_resets_everything_and_refetches_page_one() {
        let reducer = reducer();
        let done = PagerState {
            end_of_data: true,
            error: Some(FETCH_ERROR_MESSAGE.to_string()),
            ..state_after_pages(5)
        };
        let (state, effect) = reducer.reduce(done, PagerIntent::RefreshRequested);
        assert!(state.items.is_empty());
        assert_eq!(state.page_index, 0);
        assert!(!state.end_of_data);
        assert_eq!(state.error, None);
        assert!(state.loading);
        assert_eq!(effect, Some(PagerEffect::FetchPage { page: 1 }));
    }

    #[test]
    fn dismiss_error_only_clears_error() {
        let reducer = reducer();
        let (state, _) = reducer.reduce(state_after_pages(1), PagerIntent::LoadRequested);
        let (state, _) = reducer.reduce(state, PagerIntent::LoadFailed);
        let (state, effect) = reducer.reduce(state, PagerIntent::ErrorDismissed);
        assert_eq!(state.error, None);
        assert_eq!(state.items.len(), 20);
        assert_eq!(state.page_index, 1);
        assert_eq!(effect, None);
    }

    #[test]
    fn items_length_tracks_page_index_while_pages_run_full() {
        for pages in 1..=5 {
            let state = state_after_pages(pages);
            assert_eq!(state.items.len(), pages as usize * 20);
            assert_eq!(state.page_index, pages);
        }
    }
}
