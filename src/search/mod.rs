//! State-space search engine.
//!
//! A single fringe loop ([`SearchProblem::general_search`]) parameterized by
//! a [`QueuingFunction`] and an optional depth limit. Every named search is
//! this loop with one parameter varied:
//!
//! | Search | Queuing | Depth limit |
//! |---|---|---|
//! | breadth-first | [`QueuingStrategy::EnqueueAtEnd`] | none |
//! | depth-first | [`QueuingStrategy::EnqueueAtFront`] | none |
//! | depth-limited | [`QueuingStrategy::EnqueueAtFront`] | fixed |
//! | iterative deepening | depth-limited with bounds 1, 2, 3, ... | growing |
//! | uniform-cost | [`QueuingStrategy::SortByPathCost`] | none |
//! | greedy | [`QueuingStrategy::SortByHeuristic`] | none |
//! | A* | [`QueuingStrategy::SortByF`] | none |
//!
//! IDA* is a separate recursive contour search that reuses the same
//! expansion and cost accounting.
//!
//! # Key Types
//!
//! - [`State`]: capability contract for domain states
//! - [`Operator`]: named successor generator
//! - [`SearchProblem`]: initial state, operators, goal test, costs, heuristics
//! - [`SearchTreeNode`]: a state with parent link, depth, `g`, `h` and `f`
//! - [`SearchOutcome`]: goal node (if any) and search counters
//! - [`BatchRunner`]: one search over many problems, optionally in parallel
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 3-4
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Mero (1984), "A Heuristic Search Algorithm with Modifiable Estimate" (pathmax)

mod batch;
mod config;
mod contour;
mod node;
mod problem;
mod queuing;
mod runner;
mod types;

pub use batch::BatchRunner;
pub use config::BatchConfig;
pub use node::{get_solution_path, AppliedOperator, NodeRef, SearchTreeNode};
pub use problem::SearchProblem;
pub use queuing::{QueuingFunction, QueuingStrategy};
pub use runner::{Algorithm, SearchOutcome, SearchStats, DEFAULT_DEEPENING_ITERATIONS};
pub use types::{GoalTest, HeuristicFn, Operator, PathCostFn, State, TransformFn};
