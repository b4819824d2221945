//! Shard fetching.
//!
//! [`BlockFetcher`] is the seam between the loader's sequencing logic and
//! the transport. [`HttpFetcher`] is the production implementation; tests
//! drive the loader through an in-memory fetcher instead.

use crate::config::LoaderConfig;
use crate::error::LoadError;

/// Fetches raw manifest and shard bodies.
///
/// `bust` is a request-unique value appended as a query parameter so the
/// request bypasses caches. The loader sends it on the manifest and the
/// final shard only.
pub trait BlockFetcher {
    /// Fetches the raw JSON body of the shard manifest.
    fn manifest(&self, bust: Option<u64>) -> Result<String, LoadError>;

    /// Fetches the raw JSON body of shard `index` (1-based).
    fn block(&self, index: usize, bust: Option<u64>) -> Result<String, LoadError>;
}

/// HTTP implementation over the shard index endpoints.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get(&self, path: &str, bust: Option<u64>) -> Result<String, LoadError> {
        let mut url = format!("{}/{}", self.base_url, path);
        if let Some(bust) = bust {
            url.push('?');
            url.push_str(&bust.to_string());
        }
        let body = self.client.get(&url).send()?.error_for_status()?.text()?;
        Ok(body)
    }
}

impl BlockFetcher for HttpFetcher {
    fn manifest(&self, bust: Option<u64>) -> Result<String, LoadError> {
        self.get("blocks.json", bust)
    }

    fn block(&self, index: usize, bust: Option<u64>) -> Result<String, LoadError> {
        self.get(&format!("{index}.json"), bust)
    }
}
