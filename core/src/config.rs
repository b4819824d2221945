//! Loader configuration.

/// Configuration for [`BlockLoader`](crate::loader::BlockLoader).
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Base URL of the shard index endpoints, e.g.
    /// `https://host/sharebm/data/index`.
    pub base_url: String,
    /// Extra attempts per fetch before the load fails. Zero means every
    /// fetch gets exactly one try.
    pub retry_attempts: u32,
}

impl LoaderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            retry_attempts: 0,
        }
    }
}
