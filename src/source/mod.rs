//! Data source contract for page fetches.
//!
//! The pager does not care whether pages come from a network call or a local
//! generator; it only requires that every `fetch_page` invocation settles
//! exactly once, with a full or short page on success or a [`FetchError`] on
//! failure.

mod labels;

pub use labels::LabelSource;

use std::future::Future;

use thiserror::Error;

/// Errors a data source can settle with.
///
/// The pager never surfaces these verbatim to users; every variant collapses
/// into one retryable message and the underlying detail goes to the log.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request itself failed (connection, timeout, transport).
    #[error("request for page {page} failed: {reason}")]
    Transport { page: u32, reason: String },

    /// The response arrived but could not be decoded into items.
    #[error("malformed payload for page {page}: {reason}")]
    Decode { page: u32, reason: String },

    /// The source stopped mid-fetch (task panicked or was torn down).
    #[error("fetch for page {page} did not settle")]
    Interrupted { page: u32 },
}

/// Asynchronous, pull-based source of fixed-size pages.
///
/// `page` is 1-based; page 1 is the first page. A source signals exhaustion
/// by returning fewer than `page_size` items (an empty page means "already
/// past the end"). Implementations must be cheap to share across tasks.
pub trait DataSource: Send + Sync + 'static {
    /// The item records this source produces. Opaque to the pager.
    ///
    /// `Sync` is required because the driver publishes state snapshots
    /// containing items over a watch channel from a spawned task.
    type Item: Clone + PartialEq + Send + Sync + 'static;

    /// Fetch one page. Settles exactly once per invocation.
    fn fetch_page(
        &self,
        page: u32,
        page_size: usize,
    ) -> impl Future<Output = Result<Vec<Self::Item>, FetchError>> + Send;
}
