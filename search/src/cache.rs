//! Memoized per-filter-set indexes.

use crate::filter::TagFilterSet;
use crate::index::ItemIndex;
use sharebm_core::types::Item;
use std::collections::HashMap;
use tracing::debug;

/// Lazily built indexes scoped to a tag filter set.
///
/// Keys are canonical (see [`TagFilterSet`]), so set-equal filter sets
/// share one entry regardless of the order their tags were added in.
/// Entries are built at most once per distinct filter set and never
/// evicted; the filter-set space is small and user-driven.
#[derive(Default)]
pub(crate) struct FilteredIndexCache {
    entries: HashMap<TagFilterSet, ItemIndex>,
    builds: usize,
}

impl FilteredIndexCache {
    /// Returns the index scoped to `filters`, building it on first use.
    ///
    /// The build runs synchronously within this call, so the first query
    /// for a new filter set never observes a half-built index.
    pub(crate) fn index_for(&mut self, filters: &TagFilterSet, items: &[Item]) -> &ItemIndex {
        if !self.entries.contains_key(filters) {
            let ids: Vec<usize> = items
                .iter()
                .enumerate()
                .filter(|(_, item)| filters.matches(item))
                .map(|(id, _)| id)
                .collect();
            debug!(
                filters = filters.len(),
                scoped = ids.len(),
                "building filtered index"
            );
            self.entries
                .insert(filters.clone(), ItemIndex::scoped(items, ids));
            self.builds += 1;
        }
        &self.entries[filters]
    }

    /// Number of index builds performed so far.
    pub(crate) fn builds(&self) -> usize {
        self.builds
    }
}
