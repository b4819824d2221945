use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("load error: {0}")]
    Load(#[from] LoadError),
}

/// Errors that terminate the block-load sequence.
///
/// Every variant is fatal to the session's load: the loader stops at the
/// failing step and surfaces the error, rather than leaving the caller
/// with a forever-unfinished [`LoadState`](crate::types::LoadState).
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure reported by a non-HTTP fetcher.
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("malformed manifest: {0}")]
    Manifest(#[source] serde_json::Error),

    #[error("malformed block {index}: {source}")]
    Block {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
