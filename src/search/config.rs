//! Batch search configuration.

use super::runner::Algorithm;
use crate::error::SearchError;

/// Configuration for running one search over many independent problems.
///
/// # Examples
///
/// ```
/// use u_search::search::{Algorithm, BatchConfig};
///
/// let config = BatchConfig::default()
///     .with_algorithm(Algorithm::AStar)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Search run on every problem.
    pub algorithm: Algorithm,

    /// Whether to search problems in parallel using rayon.
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::BreadthFirst,
            parallel: true,
        }
    }
}

impl BatchConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        match self.algorithm {
            Algorithm::IterativeDeepening { max_depth: 0 } => Err(SearchError::InvalidConfig(
                "iterative deepening needs at least one round".into(),
            )),
            _ => Ok(()),
        }
    }
}
