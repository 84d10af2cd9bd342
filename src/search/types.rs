//! Core contracts for state-space search problems.

use std::fmt;
use std::hash::Hash;

/// A point in a domain's search space.
///
/// Two states that describe the same configuration must compare equal and
/// hash identically regardless of how they were produced. The engine relies
/// on this for duplicate-state elimination.
///
/// # Examples
///
/// ```
/// use u_search::search::State;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Counter(u8);
///
/// impl State for Counter {
///     fn is_legal(&self) -> bool {
///         self.0 <= 10
///     }
/// }
///
/// assert!(Counter(3).is_legal());
/// assert!(!Counter(11).is_legal());
/// ```
pub trait State: Clone + Eq + Hash + fmt::Debug {
    /// Whether this state satisfies the domain's invariants.
    ///
    /// Called on every generated successor; illegal successors are dropped
    /// silently. Domains whose operators never produce illegal states can
    /// keep the default.
    fn is_legal(&self) -> bool {
        true
    }
}

/// Goal predicate over states.
pub type GoalTest<S> = Box<dyn Fn(&S) -> bool + Send + Sync>;

/// Cost of the edge `(parent, child)`. Must be non-negative.
pub type PathCostFn<S> = Box<dyn Fn(&S, &S) -> f64 + Send + Sync>;

/// Admissible estimate of the remaining cost from a state to a goal.
pub type HeuristicFn<S> = Box<dyn Fn(&S) -> f64 + Send + Sync>;

/// Successor generator wrapped by an [`Operator`].
pub type TransformFn<S> = Box<dyn Fn(&S) -> Vec<S> + Send + Sync>;

/// A named transformation from one state to zero or more successors.
///
/// An operator never mutates its input. An empty result means the operator
/// does not apply to that state.
///
/// # Examples
///
/// ```
/// use u_search::search::Operator;
///
/// let inc = Operator::new("inc", |n: &u32| vec![n + 1]).with_cost(1.0);
/// assert_eq!(inc.apply(&4), vec![5]);
/// assert_eq!(inc.name, "inc");
/// ```
pub struct Operator<S> {
    /// Human-readable operator name, recorded on every node it produces.
    pub name: String,
    /// Nominal cost of the operator.
    ///
    /// Informational only; path cost is computed from the problem's path
    /// cost function (or unit steps when none is supplied).
    pub cost: f64,
    transform: TransformFn<S>,
}

impl<S> Operator<S> {
    /// Creates an operator with zero nominal cost.
    pub fn new<F>(name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&S) -> Vec<S> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            cost: 0.0,
            transform: Box::new(transform),
        }
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Applies the operator, returning every successor it produces.
    pub fn apply(&self, state: &S) -> Vec<S> {
        (self.transform)(state)
    }
}

impl<S> fmt::Debug for Operator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("name", &self.name)
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}

impl<S> fmt::Display for Operator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
