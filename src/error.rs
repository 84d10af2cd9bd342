//! Typed errors shared by the search engine and the CSP layer.
//!
//! Only configuration problems are errors. A search that runs out of
//! fringe is reported through [`SearchOutcome::solution`] being `None`.
//!
//! [`SearchOutcome::solution`]: crate::search::SearchOutcome::solution

/// Failure detected before any node is expanded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// An informed search was requested on a problem without heuristics.
    #[error("{algorithm} requires at least one heuristic function")]
    MissingHeuristic {
        /// Name of the search that was requested.
        algorithm: &'static str,
    },

    /// A problem, CSP, or batch configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
