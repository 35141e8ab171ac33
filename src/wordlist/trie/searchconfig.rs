#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Inputs with more letters than this are refused; recursion depth is bounded by it.
    pub max_letters: usize,
    pub min_word_len: usize,
}

impl SearchConfig {
    pub const DEFAULT_MAX_LETTERS: usize = 64;

    pub fn new() -> SearchConfig {
        SearchConfig {
            max_letters: Self::DEFAULT_MAX_LETTERS,
            min_word_len: 1,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::new()
    }
}
