//! Sequential block loader.
//!
//! Drives the load sequence: manifest first, then shards `1..=count`
//! strictly in order, accumulating items and the distinct-tag vocabulary.
//! Shards are fetched one at a time so progress reporting is monotone and
//! the final item order does not depend on network timing.
//!
//! Cache busting: the manifest and the final shard carry a request-unique
//! timestamp parameter. Intermediate shards may be served stale;
//! re-fetching only the boundary requests still detects dataset growth
//! without busting the (potentially large) bulk of the shards.

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::fetch::BlockFetcher;
use crate::types::{BlockManifest, Item, LoadState};
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Everything the loader produced: the item store, the deduplicated tag
/// vocabulary in first-seen order, and the final progress state.
///
/// `state.loaded` is still false here; it flips once the search layer has
/// built its indexes over this data.
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub items: Vec<Item>,
    pub tags: Vec<String>,
    pub state: LoadState,
}

pub struct BlockLoader<F> {
    fetcher: F,
    config: LoaderConfig,
}

impl<F: BlockFetcher> BlockLoader<F> {
    pub fn new(fetcher: F, config: LoaderConfig) -> Self {
        Self { fetcher, config }
    }

    /// Runs the full load sequence.
    ///
    /// `progress` is invoked after the manifest and after every shard.
    /// Any fetch or parse failure terminates the sequence with an error;
    /// a malformed shard never appends partial entries to the store.
    pub fn run(self, mut progress: impl FnMut(&LoadState)) -> Result<LoadedData, LoadError> {
        let body = self.fetch_with_retry(|| self.fetcher.manifest(Some(timestamp_millis())))?;
        let manifest: BlockManifest = serde_json::from_str(&body).map_err(LoadError::Manifest)?;
        debug!(count = manifest.count, "manifest loaded");

        let mut state = LoadState {
            block_count: manifest.count,
            ..LoadState::default()
        };
        progress(&state);

        let mut items = Vec::new();
        let mut tags = Vec::new();
        let mut seen = HashSet::new();

        for index in 1..=manifest.count {
            // Only the boundary request gets a fresh fetch.
            let body = self.fetch_with_retry(|| {
                let bust = (index == manifest.count).then(timestamp_millis);
                self.fetcher.block(index, bust)
            })?;
            let block: Vec<Item> =
                serde_json::from_str(&body).map_err(|source| LoadError::Block { index, source })?;

            for item in &block {
                for tag in &item.tags {
                    if seen.insert(tag.clone()) {
                        tags.push(tag.clone());
                    }
                }
            }
            items.extend(block);

            state.blocks_loaded = index;
            state.data_count = items.len();
            debug!(block = index, total = items.len(), "block loaded");
            progress(&state);
        }

        state.tag_count = tags.len();
        Ok(LoadedData { items, tags, state })
    }

    fn fetch_with_retry(
        &self,
        mut fetch: impl FnMut() -> Result<String, LoadError>,
    ) -> Result<String, LoadError> {
        let mut attempts_left = self.config.retry_attempts;
        loop {
            match fetch() {
                Ok(body) => return Ok(body),
                Err(err) if attempts_left > 0 => {
                    attempts_left -= 1;
                    warn!(error = %err, "fetch failed, retrying");
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
