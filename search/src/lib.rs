//! ShareBM fuzzy search engine.
//!
//! Turns the loaded item store into an interactive search session.
//!
//! # Design
//!
//! - A primary fuzzy index over every item (title, hint, tags), built once
//!   after the final block lands.
//! - A tag index over the distinct-tag vocabulary, used only for `/t`
//!   autocomplete suggestions.
//! - Per-filter-set indexes, built lazily on first query and memoized for
//!   the rest of the session under a canonical (order-insensitive) key.
//! - A command interpreter routing input between plain search, `/t` tag
//!   filters, and `/r` random listings.
//!
//! Matching itself is delegated to nucleo; this crate owns corpus
//! selection, caching, and query interpretation.

mod cache;
mod command;
mod config;
mod engine;
mod filter;
mod index;
mod results;

pub use command::{Command, QueryInput};
pub use config::{CaseMatching, SearchConfig};
pub use engine::{QueryOutcome, SearchEngine};
pub use filter::TagFilterSet;
pub use results::{MatchField, SearchResult};
