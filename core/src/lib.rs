//! ShareBM data-ingestion core.
//!
//! Fetches the sharded bookmark dataset and assembles the in-memory item
//! store the search layer indexes.
//!
//! # Design
//!
//! - Shards are fetched strictly in sequence so progress is monotone and
//!   the final item order is deterministic regardless of network timing.
//! - The manifest and the final shard carry a cache-busting parameter;
//!   intermediate shards may be served from a stale cache.
//! - Any fetch or parse failure terminates the load with an explicit
//!   [`error::LoadError`] instead of stalling silently.
//! - [`fetch::BlockFetcher`] is the transport seam; production uses the
//!   HTTP implementation, tests drive the loader in memory.

pub mod config;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod types;

pub use config::LoaderConfig;
pub use error::{Error, LoadError, Result};
pub use fetch::{BlockFetcher, HttpFetcher};
pub use loader::{BlockLoader, LoadedData};
pub use types::{BlockManifest, Item, LoadState};
