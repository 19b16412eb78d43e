//! Async driver that owns pager state and executes fetch effects.
//!
//! All state mutation happens on one task, so no lock guards the state
//! itself; the `loading` flag in [`PagerState`] is the only concurrency
//! control (single-flight). Callers interact through a cloneable
//! [`PagerHandle`] that sends commands over an mpsc channel and observes
//! snapshots over a watch channel.

use std::mem;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::mvi::Reducer;
use crate::source::{DataSource, FetchError};

use super::config::{PagerConfig, PagerConfigError};
use super::intent::{ItemHint, PagerIntent};
use super::reducer::{PagerEffect, PagerReducer};
use super::state::PagerState;

/// Commands a handle can send to the driver task.
#[derive(Debug)]
enum PagerCommand<T> {
    ItemVisible { hint: Option<ItemHint<T>> },
    LoadNextPage,
    Refresh,
    DismissError,
}

/// Settlement of one spawned fetch, tagged with the generation it belongs to.
#[derive(Debug)]
struct FetchSettled<T> {
    generation: u64,
    page: u32,
    outcome: Result<Vec<T>, FetchError>,
}

/// Cheap, cloneable front for a running pager.
///
/// Dropping every handle shuts the driver down; a fetch still in flight at
/// that point settles into a closed channel and mutates nothing.
pub struct PagerHandle<T> {
    commands: mpsc::Sender<PagerCommand<T>>,
    state: watch::Receiver<PagerState<T>>,
}

impl<T> Clone for PagerHandle<T> {
    fn clone(&self) -> Self {
        Self {
            commands: self.commands.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> PagerHandle<T> {
    /// Report that an item became visible; fetches the next page when the
    /// hint resolves to "near bottom". `None` means the initial load.
    pub async fn item_visible(&self, hint: Option<ItemHint<T>>) {
        self.send(PagerCommand::ItemVisible { hint }).await;
    }

    /// Explicitly request the next page (still gated by `loading` and
    /// `end_of_data`). The manual-retry path after an error.
    pub async fn load_next_page(&self) {
        self.send(PagerCommand::LoadNextPage).await;
    }

    /// Discard all loaded items and reload from page one. Any fetch still in
    /// flight is superseded; its completion will be dropped.
    pub async fn refresh(&self) {
        self.send(PagerCommand::Refresh).await;
    }

    /// Clear the current error message without touching other state.
    pub async fn dismiss_error(&self) {
        self.send(PagerCommand::DismissError).await;
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> PagerState<T> {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<PagerState<T>> {
        self.state.clone()
    }

    async fn send(&self, command: PagerCommand<T>) {
        if self.commands.send(command).await.is_err() {
            tracing::trace!("pager command dropped (driver gone)");
        }
    }
}

/// The driver task. Owns the state, the reducer, and the data source.
pub struct Pager<S: DataSource> {
    source: Arc<S>,
    reducer: PagerReducer<S::Item>,
    state: PagerState<S::Item>,
    commands: mpsc::Receiver<PagerCommand<S::Item>>,
    settlements_tx: mpsc::UnboundedSender<FetchSettled<S::Item>>,
    settlements: mpsc::UnboundedReceiver<FetchSettled<S::Item>>,
    published: watch::Sender<PagerState<S::Item>>,
    generation: u64,
}

impl<S: DataSource> Pager<S> {
    /// Validate the config, spawn the driver task, and trigger the initial
    /// page load.
    pub fn spawn(config: PagerConfig, source: S) -> Result<PagerHandle<S::Item>, PagerConfigError> {
        config.validate()?;

        let (commands_tx, commands_rx) = mpsc::channel(32);
        let (settlements_tx, settlements_rx) = mpsc::unbounded_channel();
        let (published, state_rx) = watch::channel(PagerState::default());

        let pager = Pager {
            source: Arc::new(source),
            reducer: PagerReducer::new(config),
            state: PagerState::default(),
            commands: commands_rx,
            settlements_tx,
            settlements: settlements_rx,
            published,
            generation: 0,
        };
        tokio::spawn(pager.run());

        Ok(PagerHandle {
            commands: commands_tx,
            state: state_rx,
        })
    }

    async fn run(mut self) {
        // Lifecycle contract: a freshly created pager loads page one without
        // waiting for a visibility event.
        self.dispatch(PagerIntent::ItemVisible { hint: None });

        loop {
            tokio::select! {
                command = self.commands.recv() => {
                    let Some(command) = command else {
                        tracing::debug!("all pager handles dropped, stopping driver");
                        break;
                    };
                    self.on_command(command);
                }
                settled = self.settlements.recv() => {
                    // The driver holds its own settlement sender, so the
                    // channel cannot close while we are running.
                    if let Some(settled) = settled {
                        self.on_settled(settled);
                    }
                }
            }
        }
    }

    fn on_command(&mut self, command: PagerCommand<S::Item>) {
        match command {
            PagerCommand::ItemVisible { hint } => {
                self.dispatch(PagerIntent::ItemVisible { hint });
            }
            PagerCommand::LoadNextPage => {
                self.dispatch(PagerIntent::LoadRequested);
            }
            PagerCommand::Refresh => {
                // Invalidate any in-flight fetch before resetting, so its
                // late completion cannot touch the fresh session.
                self.generation += 1;
                self.dispatch(PagerIntent::RefreshRequested);
            }
            PagerCommand::DismissError => {
                self.dispatch(PagerIntent::ErrorDismissed);
            }
        }
    }

    fn on_settled(&mut self, settled: FetchSettled<S::Item>) {
        if settled.generation != self.generation {
            tracing::warn!(
                page = settled.page,
                "dropping fetch completion from a superseded session"
            );
            return;
        }
        match settled.outcome {
            Ok(items) => {
                tracing::debug!(page = settled.page, count = items.len(), "page loaded");
                self.dispatch(PagerIntent::PageLoaded { items });
            }
            Err(error) => {
                tracing::warn!(page = settled.page, %error, "page fetch failed");
                self.dispatch(PagerIntent::LoadFailed);
            }
        }
    }

    fn dispatch(&mut self, intent: PagerIntent<S::Item>) {
        let current = mem::take(&mut self.state);
        let (next, effect) = self.reducer.reduce(current, intent);
        self.state = next;
        self.published.send_replace(self.state.clone());

        if let Some(PagerEffect::FetchPage { page }) = effect {
            self.spawn_fetch(page);
        }
    }

    fn spawn_fetch(&self, page: u32) {
        let source = Arc::clone(&self.source);
        let settlements = self.settlements_tx.clone();
        let generation = self.generation;
        let page_size = self.reducer.config().page_size;

        tokio::spawn(async move {
            // The guard settles the fetch as a failure if the source panics,
            // so the loading gate clears on every exit path.
            let guard = scopeguard::guard(settlements, |tx| {
                let _ = tx.send(FetchSettled {
                    generation,
                    page,
                    outcome: Err(FetchError::Interrupted { page }),
                });
            });

            let outcome = source.fetch_page(page, page_size).await;

            let tx = scopeguard::ScopeGuard::into_inner(guard);
            let _ = tx.send(FetchSettled {
                generation,
                page,
                outcome,
            });
        });
    }
}
