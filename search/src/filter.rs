//! Active tag filter set.

use sharebm_core::types::Item;
use std::collections::BTreeSet;

/// The set of tags a result must carry (AND semantics).
///
/// Canonical by construction: sorted and deduplicated, so two filter sets
/// built from the same tags in different insertion orders are equal and
/// hash identically. That is what makes it usable directly as the
/// filtered-index cache key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TagFilterSet(BTreeSet<String>);

impl TagFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag. Returns false if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// Removes a tag. Removing an absent tag is a no-op.
    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.remove(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True if the item carries every tag in this set.
    pub fn matches(&self, item: &Item) -> bool {
        self.0.iter().all(|tag| item.tags.iter().any(|t| t == tag))
    }
}

impl FromIterator<String> for TagFilterSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
