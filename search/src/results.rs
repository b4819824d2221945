//! Search result types.

use sharebm_core::types::Item;

/// Indexed fields a match can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Title,
    Hint,
    Tags,
}

/// One ranked result.
///
/// Borrows the item from the engine's store. Results are recomputed per
/// query and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    pub item: &'a Item,
    /// Normalized to (0, 1]; 1.0 is the best-ranked match, and also the
    /// nominal score of direct (non-ranked) listings such as `/r`.
    pub score: f32,
    pub matched_fields: Vec<MatchField>,
}
