//! Pagination engine for list-style UIs.
//!
//! The core is a [`pager::Pager`]: a reducer state machine tracking an
//! append-only item collection plus loading / end-of-data / error flags, and
//! a driver task that fetches fixed-size pages from a [`source::DataSource`]
//! with single-flight and stale-completion discipline. Callers hold a
//! [`pager::PagerHandle`], feed it item-visibility events, and observe state
//! snapshots over a watch channel.
//!
//! ```no_run
//! use pagewise::pager::{ItemHint, Pager, PagerConfig};
//! use pagewise::source::LabelSource;
//!
//! # async fn example() -> Result<(), pagewise::pager::PagerConfigError> {
//! let handle = Pager::spawn(PagerConfig::default(), LabelSource::default())?;
//!
//! // The first page loads on creation; report visibility to prefetch more.
//! handle.item_visible(Some(ItemHint::Position(17))).await;
//!
//! let mut states = handle.subscribe();
//! let state = states.wait_for(|s| !s.loading).await.unwrap();
//! println!("{} items loaded", state.items.len());
//! # Ok(())
//! # }
//! ```

pub mod logging;
pub mod mvi;
pub mod pager;
pub mod source;
pub mod store;
