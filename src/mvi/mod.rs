//! Unidirectional data-flow primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow without a rendering framework in the loop.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑           │
//!    │           └──→ Effect ──→ Driver
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of the component's state
//! - **Intent**: Caller actions or system events
//! - **Reducer**: Pure function that transforms state and requests effects
//! - **Effect**: Side work (e.g. an async fetch) executed by the driver,
//!   whose settlement re-enters the loop as a new intent

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
