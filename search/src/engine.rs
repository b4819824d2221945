//! Session-owning search engine.

use crate::cache::FilteredIndexCache;
use crate::command::{self, Command, QueryInput};
use crate::config::SearchConfig;
use crate::filter::TagFilterSet;
use crate::index::{ItemIndex, TagIndex};
use crate::results::SearchResult;
use rand::Rng;
use sharebm_core::config::LoaderConfig;
use sharebm_core::error::LoadError;
use sharebm_core::fetch::BlockFetcher;
use sharebm_core::loader::{BlockLoader, LoadedData};
use sharebm_core::types::{Item, LoadState};

/// Everything a search session owns: the frozen item store, the primary
/// and tag indexes, the filtered-index cache and the active filter set.
pub struct SearchEngine {
    items: Vec<Item>,
    primary: ItemIndex,
    tags: TagIndex,
    cache: FilteredIndexCache,
    filters: TagFilterSet,
    state: LoadState,
    config: SearchConfig,
}

/// What submitting one input produced.
#[derive(Debug, PartialEq)]
pub enum QueryOutcome<'a> {
    /// Ranked results (search) or a direct listing (`/r`).
    Results(Vec<SearchResult<'a>>),
    /// `/t` handled; `changed` is false when the tag was already active.
    FilterAdded { tag: String, changed: bool },
    /// Unknown command or blank tag; nothing happened.
    Ignored,
}

impl SearchEngine {
    /// Builds the indexes over loaded data and marks the session ready.
    pub fn new(data: LoadedData, config: SearchConfig) -> Self {
        let LoadedData {
            items,
            tags,
            mut state,
        } = data;
        let primary = ItemIndex::new(&items);
        let tags = TagIndex::new(tags);
        state.loaded = true;
        Self {
            items,
            primary,
            tags,
            cache: FilteredIndexCache::default(),
            filters: TagFilterSet::new(),
            state,
            config,
        }
    }

    /// Runs the whole load pipeline: manifest, shards in sequence, then
    /// index construction. `progress` sees every intermediate
    /// [`LoadState`]; the returned engine's state has `loaded` set.
    pub fn load<F: BlockFetcher>(
        fetcher: F,
        loader_config: LoaderConfig,
        search_config: SearchConfig,
        progress: impl FnMut(&LoadState),
    ) -> Result<Self, LoadError> {
        let data = BlockLoader::new(fetcher, loader_config).run(progress)?;
        Ok(Self::new(data, search_config))
    }

    /// Interprets and executes one submitted input.
    pub fn submit(&mut self, raw: &str) -> QueryOutcome<'_> {
        match QueryInput::parse(raw) {
            QueryInput::Search(text) => QueryOutcome::Results(self.search(text)),
            QueryInput::Command { name, args } => {
                match Command::parse(name, args, self.config.random_default) {
                    Command::AddFilter(tag) if !tag.is_empty() => {
                        let changed = self.filters.insert(tag.clone());
                        QueryOutcome::FilterAdded { tag, changed }
                    }
                    Command::AddFilter(_) => QueryOutcome::Ignored,
                    Command::Random(count) => QueryOutcome::Results(self.random(count)),
                    Command::Unknown => QueryOutcome::Ignored,
                }
            }
        }
    }

    /// Tag autocomplete for an un-submitted input. Non-`/t` input, or a
    /// blank partial tag, yields no hints.
    pub fn hints(&self, raw: &str) -> Vec<String> {
        match command::tag_prefix(raw) {
            Some(partial) => self.tags.search(partial, self.config.hint_limit, &self.config),
            None => Vec::new(),
        }
    }

    /// Adds a tag to the active filter set (hint click). Idempotent;
    /// returns false when the tag was already active.
    pub fn add_filter(&mut self, tag: impl Into<String>) -> bool {
        self.filters.insert(tag)
    }

    /// Removes a tag from the active filter set (filter chip close).
    /// Removing an absent tag is a no-op.
    pub fn remove_filter(&mut self, tag: &str) -> bool {
        self.filters.remove(tag)
    }

    pub fn filters(&self) -> &TagFilterSet {
        &self.filters
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    /// Filtered-index builds performed so far.
    pub fn cache_builds(&self) -> usize {
        self.cache.builds()
    }

    fn search(&mut self, text: &str) -> Vec<SearchResult<'_>> {
        if self.filters.is_empty() {
            return self.primary.search(&self.items, text, &self.config);
        }
        let index = self.cache.index_for(&self.filters, &self.items);
        index.search(&self.items, text, &self.config)
    }

    /// Uniform sampling with replacement; duplicates are possible by
    /// design. Listings are not relevance-ranked, so every entry carries
    /// the nominal score.
    fn random(&self, count: usize) -> Vec<SearchResult<'_>> {
        if self.items.is_empty() {
            return Vec::new();
        }
        let mut rng = rand::rng();
        (0..count)
            .map(|_| {
                let item = &self.items[rng.random_range(0..self.items.len())];
                SearchResult {
                    item,
                    score: 1.0,
                    matched_fields: Vec::new(),
                }
            })
            .collect()
    }
}
