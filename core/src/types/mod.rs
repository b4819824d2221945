//! Data model for the ShareBM item store.

use serde::Deserialize;

/// One bookmarked article, as it appears in shard payloads.
///
/// Items are immutable once loaded; the store never mutates them for the
/// rest of the session. Every field is required in the source data; a
/// shard item missing one is a parse failure, not a partial item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub title: String,
    /// Tags as listed in the source data. Duplicates are allowed here;
    /// the loader deduplicates when building the tag vocabulary.
    pub tags: Vec<String>,
    pub url: String,
    /// Opaque path segment identifying the archived snapshot.
    pub cache: String,
    pub comment: String,
    /// Long-form excerpt used as a match field alongside the title.
    pub hint: String,
}

impl Item {
    /// Path of this item's archived snapshot.
    pub fn cached_path(&self) -> String {
        format!("/data/cached/{}", self.cache)
    }
}

/// Shard manifest payload (`blocks.json`).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BlockManifest {
    pub count: usize,
}

/// Load progress, published after the manifest and after every shard.
///
/// `blocks_loaded` only ever grows and reaches `block_count` before
/// `loaded` flips true; `loaded` flips only once the indexes are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadState {
    pub loaded: bool,
    pub blocks_loaded: usize,
    pub block_count: usize,
    pub data_count: usize,
    pub tag_count: usize,
}
