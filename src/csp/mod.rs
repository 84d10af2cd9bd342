//! Constraint satisfaction problems (CSP) on top of the search engine.
//!
//! A CSP is solved by depth-first search over partial assignments. Each
//! state assigns one more variable than its parent, the only operator
//! assigns the next variable, and constraint predicates double as the
//! state legality check so inconsistent partial assignments are pruned as
//! soon as they are generated.
//!
//! # Key Components
//!
//! - [`Csp`]: variable groups with domains, constraints, optional forward checking
//! - [`CspState`]: a partial assignment with branch-private domains
//! - [`all_different`], [`distinct_forward_check`]: ready-made building blocks
//!
//! # Forward Checking
//!
//! When a forward-checking function is supplied, every successor's domains
//! are narrowed right after its assignment. Domains are copied per branch,
//! so sibling branches never see each other's pruning.
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 6
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"

mod model;
mod solver;
mod state;

pub use model::{all_different, distinct_forward_check, Csp};
pub use state::{Constraint, CspState, ForwardCheck, Value, Variable};
