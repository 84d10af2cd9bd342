//! Running one search over many independent problems.

use rayon::prelude::*;

use super::config::BatchConfig;
use super::problem::SearchProblem;
use super::runner::SearchOutcome;
use super::types::State;
use crate::error::SearchError;

/// Executes a configured search over a slice of problems.
///
/// Every problem owns its own fringe and visited set during the search, so
/// problems are independent and may be searched concurrently.
pub struct BatchRunner;

impl BatchRunner {
    /// Searches every problem, returning outcomes in input order.
    ///
    /// # Errors
    /// Returns the configuration error, or the first problem's error (for
    /// example a missing heuristic), before any search starts.
    pub fn run<S>(
        problems: &[SearchProblem<S>],
        config: &BatchConfig,
    ) -> Result<Vec<SearchOutcome<S>>, SearchError>
    where
        S: State + Send + Sync,
    {
        config.validate()?;
        if config.algorithm.requires_heuristic() {
            for problem in problems {
                problem.validate_informed(config.algorithm.name())?;
            }
        }

        log::debug!(
            "batch: {} problems, algorithm={}, parallel={}",
            problems.len(),
            config.algorithm,
            config.parallel
        );

        if config.parallel {
            problems
                .par_iter()
                .map(|problem| problem.solve(config.algorithm))
                .collect()
        } else {
            problems
                .iter()
                .map(|problem| problem.solve(config.algorithm))
                .collect()
        }
    }
}
