//! Pager configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when validating a [`PagerConfig`].
#[derive(Debug, Error)]
pub enum PagerConfigError {
    #[error("page_size must be at least 1")]
    ZeroPageSize,

    #[error("max_pages, when set, must be at least 1")]
    ZeroMaxPages,

    #[error("near_bottom_threshold must be at least 1")]
    ZeroThreshold,
}

/// Configuration fixed for the lifetime of a pager instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Number of items requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Optional cap on the total number of pages. The primary end-of-data
    /// signal is a short page from the source; this cap exists for sources
    /// that never run short (e.g. infinite generators).
    #[serde(default)]
    pub max_pages: Option<u32>,

    /// A visible item within this many positions of the end of the loaded
    /// collection counts as "near bottom" and triggers a prefetch.
    #[serde(default = "default_near_bottom_threshold")]
    pub near_bottom_threshold: usize,
}

fn default_page_size() -> usize {
    20
}

fn default_near_bottom_threshold() -> usize {
    5
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_pages: None,
            near_bottom_threshold: default_near_bottom_threshold(),
        }
    }
}

impl PagerConfig {
    /// Validates the configuration.
    ///
    /// Invalid values are rejected, never silently clamped.
    pub fn validate(&self) -> Result<(), PagerConfigError> {
        if self.page_size == 0 {
            return Err(PagerConfigError::ZeroPageSize);
        }
        if self.max_pages == Some(0) {
            return Err(PagerConfigError::ZeroMaxPages);
        }
        if self.near_bottom_threshold == 0 {
            return Err(PagerConfigError::ZeroThreshold);
        }
        Ok(())
    }
}
