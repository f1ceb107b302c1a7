/// Case handling for the fuzzy fallback.
///
/// Keyword lookup is always case-insensitive because aliases are stored
/// lowercased.
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
    /// Edit budget per keyword match.
    pub max_edit_cost: usize,
    /// Rank entries fuzzily when no keyword matches.
    pub fuzzy_fallback: bool,
    pub result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_matching: CaseMatching::default(),
            max_edit_cost: 1,
            fuzzy_fallback: true,
            result_limit: 50,
        }
    }
}
