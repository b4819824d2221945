//! Fuzzy indexes over the item store and the tag vocabulary.
//!
//! Built on nucleo's synchronous matcher. Every column of every entry is
//! scored for each query rather than stopping at the first matching
//! field, so a tag-only match still ranks when the title or hint also
//! partially match.

use crate::config::{CaseMatching, SearchConfig};
use crate::results::{MatchField, SearchResult};
use nucleo::pattern::{CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32String};
use sharebm_core::types::Item;

const FIELDS: [MatchField; 3] = [MatchField::Title, MatchField::Hint, MatchField::Tags];

/// Pre-rendered match columns for one item.
struct Entry {
    /// Position in the engine's item store.
    id: usize,
    /// Title, hint, space-joined tags.
    columns: [Utf32String; 3],
}

/// Fuzzy index over a fixed subset of the item store.
pub(crate) struct ItemIndex {
    entries: Vec<Entry>,
}

impl ItemIndex {
    /// Indexes the whole store.
    pub(crate) fn new(items: &[Item]) -> Self {
        Self::scoped(items, 0..items.len())
    }

    /// Indexes only the given store positions.
    pub(crate) fn scoped(items: &[Item], ids: impl IntoIterator<Item = usize>) -> Self {
        let entries = ids
            .into_iter()
            .map(|id| {
                let item = &items[id];
                Entry {
                    id,
                    columns: [
                        Utf32String::from(item.title.as_str()),
                        Utf32String::from(item.hint.as_str()),
                        Utf32String::from(item.tags.join(" ").as_str()),
                    ],
                }
            })
            .collect();
        Self { entries }
    }

    /// Ranks the indexed subset against `query`.
    ///
    /// A blank query is permissive: the whole subset comes back at the
    /// nominal score. Otherwise scores are normalized against the best
    /// raw score, so the top result is always 1.0.
    pub(crate) fn search<'a>(
        &self,
        items: &'a [Item],
        query: &str,
        config: &SearchConfig,
    ) -> Vec<SearchResult<'a>> {
        let query = query.trim();
        if query.is_empty() {
            return self
                .entries
                .iter()
                .map(|entry| SearchResult {
                    item: &items[entry.id],
                    score: 1.0,
                    matched_fields: Vec::new(),
                })
                .collect();
        }

        let pattern = parse_pattern(query, config);
        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);

        let mut scored = Vec::new();
        for entry in &self.entries {
            let mut best: Option<u32> = None;
            let mut matched_fields = Vec::new();
            for (column, field) in entry.columns.iter().zip(FIELDS) {
                if let Some(score) = pattern.score(column.slice(..), &mut matcher) {
                    matched_fields.push(field);
                    best = Some(best.map_or(score, |b| b.max(score)));
                }
            }
            if let Some(score) = best {
                scored.push((entry.id, score, matched_fields));
            }
        }

        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let top = scored.first().map_or(1, |(_, score, _)| (*score).max(1));
        scored
            .into_iter()
            .map(|(id, score, matched_fields)| SearchResult {
                item: &items[id],
                score: score as f32 / top as f32,
                matched_fields,
            })
            .collect()
    }
}

/// Fuzzy index over the distinct-tag vocabulary, for autocomplete.
pub(crate) struct TagIndex {
    tags: Vec<(String, Utf32String)>,
}

impl TagIndex {
    pub(crate) fn new(tags: Vec<String>) -> Self {
        let tags = tags
            .into_iter()
            .map(|tag| {
                let haystack = Utf32String::from(tag.as_str());
                (tag, haystack)
            })
            .collect();
        Self { tags }
    }

    /// Up to `limit` tag names ranked against `query`.
    pub(crate) fn search(&self, query: &str, limit: usize, config: &SearchConfig) -> Vec<String> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let pattern = parse_pattern(query, config);
        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);

        let mut scored: Vec<(u32, &str)> = self
            .tags
            .iter()
            .filter_map(|(tag, haystack)| {
                pattern
                    .score(haystack.slice(..), &mut matcher)
                    .map(|score| (score, tag.as_str()))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, tag)| tag.to_string())
            .collect()
    }
}

fn parse_pattern(query: &str, config: &SearchConfig) -> Pattern {
    let case_matching = match config.case_matching {
        CaseMatching::Sensitive => NucleoCaseMatching::Respect,
        CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
        CaseMatching::Smart => NucleoCaseMatching::Smart,
    };
    let normalization = if config.unicode_normalization {
        Normalization::Smart
    } else {
        Normalization::Never
    };
    Pattern::parse(query, case_matching, normalization)
}
