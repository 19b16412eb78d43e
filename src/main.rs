//! Demo CLI: drives a pager over a synthetic label source to exhaustion,
//! printing each page as it arrives. Stands in for the display layer of a
//! list UI: the "visible item" is always the last loaded one, which is the
//! worst case for prefetch pressure.

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use pagewise::logging::init_tracing;
use pagewise::pager::{ItemHint, Pager, PagerConfig};
use pagewise::source::LabelSource;

#[derive(Debug, Parser)]
#[command(name = "pagewise", about = "Paginate a synthetic item source")]
struct Args {
    /// Items requested per page.
    #[arg(long, default_value_t = 20)]
    page_size: usize,

    /// Total items the synthetic source holds.
    #[arg(long, default_value_t = 100)]
    total_items: usize,

    /// Visible items within this distance of the end trigger a prefetch.
    #[arg(long, default_value_t = 5)]
    threshold: usize,

    /// Simulated per-page latency in milliseconds.
    #[arg(long, default_value_t = 700)]
    delay_ms: u64,

    /// Optional cap on the number of pages to fetch.
    #[arg(long)]
    max_pages: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = PagerConfig {
        page_size: args.page_size,
        max_pages: args.max_pages,
        near_bottom_threshold: args.threshold,
    };
    let source = LabelSource::new(args.total_items, Duration::from_millis(args.delay_ms));

    let handle = Pager::spawn(config, source)?;
    let mut states = handle.subscribe();
    let mut printed = 0usize;

    loop {
        let snapshot = states.borrow_and_update().clone();

        for item in &snapshot.items[printed.min(snapshot.items.len())..] {
            println!("{item}");
        }
        // The demo never refreshes, so the collection only grows.
        printed = snapshot.items.len();

        if let Some(message) = &snapshot.error {
            bail!("{message}");
        }
        if snapshot.end_of_data && !snapshot.loading {
            tracing::info!(
                items = snapshot.items.len(),
                pages = snapshot.page_index,
                "source exhausted"
            );
            break;
        }

        if !snapshot.loading && !snapshot.items.is_empty() {
            // Scroll to the bottom of what we have.
            handle
                .item_visible(Some(ItemHint::Position(snapshot.items.len() - 1)))
                .await;
        }

        if states.changed().await.is_err() {
            bail!("pager stopped unexpectedly");
        }
    }

    Ok(())
}
