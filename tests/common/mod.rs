//! Shared test utilities and scripted data sources.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;

use pagewise::pager::PagerState;
use pagewise::source::{DataSource, FetchError};

/// One scripted response for a page request.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Settle with these items after `delay`.
    Page { items: Vec<String>, delay: Duration },
    /// Settle with a transport failure after `delay`.
    Fail { delay: Duration },
    /// Panic mid-fetch (exercises the always-settle guard).
    Panic,
}

/// Data source driven by a per-page script.
///
/// Each request for page `p` pops the next scripted response for `p`; a page
/// with no remaining script entries settles as empty (source exhausted).
/// Keying by page number keeps tests deterministic even when fetch tasks for
/// different generations race.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: Mutex<HashMap<u32, VecDeque<Scripted>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `page`. Repeated calls for the same page stack
    /// in order, so retries can be scripted differently from first attempts.
    pub fn on_page(self, page: u32, response: Scripted) -> Self {
        self.script.lock().entry(page).or_default().push_back(response);
        self
    }

    /// Queue an instant full page of sequential labels.
    pub fn with_full_page(self, page: u32, page_size: usize) -> Self {
        self.on_page(
            page,
            Scripted::Page {
                items: labels_for_page(page, page_size),
                delay: Duration::ZERO,
            },
        )
    }
}

impl DataSource for ScriptedSource {
    type Item = String;

    async fn fetch_page(&self, page: u32, _page_size: usize) -> Result<Vec<String>, FetchError> {
        let next = self
            .script
            .lock()
            .get_mut(&page)
            .and_then(VecDeque::pop_front);

        match next {
            Some(Scripted::Page { items, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(items)
            }
            Some(Scripted::Fail { delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Err(FetchError::Transport {
                    page,
                    reason: "scripted failure".to_string(),
                })
            }
            Some(Scripted::Panic) => panic!("scripted panic for page {page}"),
            None => Ok(Vec::new()),
        }
    }
}

/// `["Item {first}", ...]` for the 1-based `page` of size `page_size`.
pub fn labels_for_page(page: u32, page_size: usize) -> Vec<String> {
    debug_assert!(page >= 1, "pages are 1-based");
    let start = (page as usize).saturating_sub(1) * page_size + 1;
    (start..start + page_size).map(|n| format!("Item {n}")).collect()
}

/// Wait for a state matching `predicate`, with a test-failure timeout.
///
/// `watch` coalesces intermediate states, so predicates should describe the
/// target state ("page 2 loaded"), not a transient one ("loading started").
pub async fn wait_until(
    states: &mut watch::Receiver<PagerState<String>>,
    predicate: impl FnMut(&PagerState<String>) -> bool,
) -> PagerState<String> {
    let state = tokio::time::timeout(Duration::from_secs(5), states.wait_for(predicate))
        .await
        .expect("pager did not reach the expected state within 5s")
        .expect("pager driver stopped");
    state.clone()
}
