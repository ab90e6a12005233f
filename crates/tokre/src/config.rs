//! Limits applied when compiling and matching.

/// Default cap on input length for a single search, in bytes.
pub const DEFAULT_MATCH_LIMIT: usize = 64 * 1024;

/// Default cap on the size of each compiled DFA, in bytes.
pub const DEFAULT_DFA_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Resource limits for a [`PatternStore`](crate::PatternStore).
///
/// The option set used to parse patterns is fixed and not part of the
/// configuration; only the bounds on work and memory are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    match_limit: Option<usize>,
    dfa_size_limit: Option<usize>,
    determinize_size_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            match_limit: Some(DEFAULT_MATCH_LIMIT),
            dfa_size_limit: Some(DEFAULT_DFA_SIZE_LIMIT),
            determinize_size_limit: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Longest input, in bytes, a single search will scan.
    ///
    /// Longer inputs fail with an engine error instead of being searched.
    /// `None` removes the bound.
    pub fn match_limit(mut self, limit: Option<usize>) -> Self {
        self.match_limit = limit;
        self
    }

    /// Heap limit for each DFA built by `compile`.
    pub fn dfa_size_limit(mut self, limit: Option<usize>) -> Self {
        self.dfa_size_limit = limit;
        self
    }

    /// Heap limit for the scratch space used while determinizing.
    pub fn determinize_size_limit(mut self, limit: Option<usize>) -> Self {
        self.determinize_size_limit = limit;
        self
    }

    pub fn get_match_limit(&self) -> Option<usize> {
        self.match_limit
    }

    pub fn get_dfa_size_limit(&self) -> Option<usize> {
        self.dfa_size_limit
    }

    pub fn get_determinize_size_limit(&self) -> Option<usize> {
        self.determinize_size_limit
    }
}
