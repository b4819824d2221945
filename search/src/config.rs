#[derive(Debug, Clone, Copy, Default)]
pub enum CaseMatching {
    Sensitive,
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    #[default]
    Smart,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    pub unicode_normalization: bool,
    /// Maximum number of tag suggestions for `/t` autocomplete.
    pub hint_limit: usize,
    /// Sample size for `/r` when no usable count is given.
    pub random_default: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
            hint_limit: 10,
            random_default: 10,
        }
    }
}
