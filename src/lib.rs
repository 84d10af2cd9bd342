//! Domain-agnostic state-space search framework.
//!
//! Provides a generic problem-solving engine for the classical search
//! paradigm:
//!
//! - **Uninformed search**: breadth-first, depth-first, depth-limited and
//!   iterative deepening.
//! - **Cost-based search**: uniform-cost search over a caller-defined path
//!   cost (unit steps by default).
//! - **Informed search**: greedy best-first, A* and IDA* over the maximum of
//!   one or more admissible heuristics, with pathmax correction keeping `f`
//!   monotone along every path.
//! - **CSP**: constraint satisfaction by depth-first search over partial
//!   assignments, with optional forward checking.
//!
//! # Architecture
//!
//! All fringe-based searches share one loop, [`search::SearchProblem::general_search`],
//! and differ only in the [`search::QueuingFunction`] that merges new
//! children into the fringe and in an optional depth limit. Domains plug in
//! by implementing [`search::State`] and supplying [`search::Operator`]s, a
//! goal test and, optionally, path cost and heuristic functions. The crate
//! contains no domain-specific concepts.
//!
//! # Example
//!
//! ```
//! use u_search::search::{Operator, SearchProblem, State};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Jugs(u8, u8);
//! impl State for Jugs {}
//!
//! // 4- and 3-litre jugs: measure exactly 2 litres in the big one.
//! let problem = SearchProblem::new(
//!     Jugs(0, 0),
//!     vec![
//!         Operator::new("fill big", |j: &Jugs| vec![Jugs(4, j.1)]),
//!         Operator::new("fill small", |j: &Jugs| vec![Jugs(j.0, 3)]),
//!         Operator::new("empty big", |j: &Jugs| vec![Jugs(0, j.1)]),
//!         Operator::new("empty small", |j: &Jugs| vec![Jugs(j.0, 0)]),
//!         Operator::new("pour big into small", |j: &Jugs| {
//!             let moved = j.0.min(3 - j.1);
//!             vec![Jugs(j.0 - moved, j.1 + moved)]
//!         }),
//!         Operator::new("pour small into big", |j: &Jugs| {
//!             let moved = j.1.min(4 - j.0);
//!             vec![Jugs(j.0 + moved, j.1 - moved)]
//!         }),
//!     ],
//!     |j: &Jugs| j.0 == 2,
//! );
//!
//! let outcome = problem.breadth_first_search();
//! assert_eq!(outcome.depth(), Some(6));
//! for node in outcome.path() {
//!     println!("{node}");
//! }
//! ```

pub mod csp;
pub mod error;
pub mod search;

pub use error::SearchError;
