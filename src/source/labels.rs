//! Synthetic label source for demos and tests.

use std::time::Duration;

use super::{DataSource, FetchError};

/// Generates sequential `"Item N"` labels as a finite data source.
///
/// Exhaustion is signalled the way a real API does it: the last page comes
/// back short (or empty if the caller asks past the end), never by a
/// side-channel page cap.
#[derive(Debug, Clone)]
pub struct LabelSource {
    total_items: usize,
    delay: Duration,
}

impl LabelSource {
    /// A source holding `total_items` labels, with a simulated per-page delay.
    pub fn new(total_items: usize, delay: Duration) -> Self {
        Self { total_items, delay }
    }

    /// Total number of labels this source will ever produce.
    pub fn total_items(&self) -> usize {
        self.total_items
    }
}

impl Default for LabelSource {
    /// 100 labels with the original example's 700 ms simulated latency.
    fn default() -> Self {
        Self::new(100, Duration::from_millis(700))
    }
}

impl DataSource for LabelSource {
    type Item = String;

    async fn fetch_page(&self, page: u32, page_size: usize) -> Result<Vec<String>, FetchError> {
        debug_assert!(page >= 1, "pages are 1-based");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let start = (page as usize).saturating_sub(1).saturating_mul(page_size);
        if start >= self.total_items {
            return Ok(Vec::new());
        }

        let end = (start + page_size).min(self.total_items);
        Ok((start + 1..=end).map(|n| format!("Item {n}")).collect())
    }
}
