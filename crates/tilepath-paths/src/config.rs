/// Tunables for an A* search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Upper bound on the number of cells expanded (moved to the closed set)
    /// before the search gives up. `None` searches until the frontier is
    /// exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Cap the search at `n` expansions.
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }
}
