//! The pagination engine.
//!
//! A pager owns an append-only collection of items and fetches successive
//! fixed-size pages from a [`DataSource`](crate::source::DataSource),
//! exposing loading / end-of-data / error state and deciding when a visible
//! item is close enough to the end to prefetch the next page.
//!
//! State transitions live in a pure [`PagerReducer`]; fetch execution, the
//! single-flight discipline, and stale-completion filtering live in the
//! [`Pager`] driver task.

mod config;
mod driver;
mod intent;
mod reducer;
mod state;

pub use config::{PagerConfig, PagerConfigError};
pub use driver::{Pager, PagerHandle};
pub use intent::{ItemHint, PagerIntent};
pub use reducer::{PagerEffect, PagerReducer, FETCH_ERROR_MESSAGE};
pub use state::PagerState;
