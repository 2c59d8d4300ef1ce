//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// How the game tree is walked.
///
/// Every strategy scores the same positions identically and returns the
/// same move; they differ only in how much of the tree they visit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Visit every continuation.
    #[default]
    Exhaustive,
    /// Skip branches that cannot change the result.
    AlphaBeta,
    /// Score each distinct position once per call.
    Memoized,
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Tree walking strategy (default: exhaustive).
    pub strategy: Strategy,

    /// Initial capacity of the position table used by `Strategy::Memoized`.
    /// Ignored by the other strategies.
    pub table_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Exhaustive,
            table_capacity: 4096,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a new config with a custom table capacity.
    pub fn with_table_capacity(mut self, capacity: usize) -> Self {
        self.table_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.strategy, Strategy::Exhaustive);
        assert_eq!(config.table_capacity, 4096);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_strategy(Strategy::Memoized)
            .with_table_capacity(16);

        assert_eq!(config.strategy, Strategy::Memoized);
        assert_eq!(config.table_capacity, 16);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_strategy(Strategy::AlphaBeta);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
