//! Reducer trait for the unidirectional data-flow core.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It must be
/// a pure function of `(State, Intent)`; `&self` carries only immutable
/// configuration fixed at construction. Side work the transition requires
/// (a page fetch, for instance) is described by the returned effect and
/// executed by the driver around the dispatch call, never by the reducer
/// itself.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Side work a transition can request from the driver.
    type Effect;

    /// Process an intent and return the new state plus any requested effect.
    fn reduce(&self, state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>);
}
