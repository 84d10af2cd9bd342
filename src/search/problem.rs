//! Search problem definition and node expansion.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::node::{AppliedOperator, NodeRef, SearchTreeNode};
use super::types::{GoalTest, HeuristicFn, Operator, PathCostFn, State};
use crate::error::SearchError;

/// A state-space search problem.
///
/// Holds the initial state, the operators, the goal test, and the optional
/// path cost and heuristic functions. Searches borrow the problem and keep
/// their own fringe and visited set, so one problem can be searched any
/// number of times, from any number of threads.
///
/// # Cost accounting
///
/// For a child node: `g = parent.g + step`, where `step` is 1 unless a path
/// cost function is set. `h` is the maximum over all heuristics. With
/// heuristics, `f = max(g + h, parent.f)` (pathmax); without, `f = g`.
///
/// # Examples
///
/// ```
/// use u_search::search::{Operator, SearchProblem, State};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct N(i32);
/// impl State for N {}
///
/// let problem = SearchProblem::new(
///     N(0),
///     vec![
///         Operator::new("+1", |n: &N| vec![N(n.0 + 1)]),
///         Operator::new("+3", |n: &N| vec![N(n.0 + 3)]),
///     ],
///     |n: &N| n.0 == 7,
/// )
/// .with_heuristic(|n: &N| ((7 - n.0).max(0) as f64 / 3.0).ceil());
///
/// let outcome = problem.a_star_search().unwrap();
/// assert_eq!(outcome.path_cost(), Some(3.0));
/// ```
pub struct SearchProblem<S: State> {
    initial_state: S,
    operators: Vec<Operator<S>>,
    goal_test: GoalTest<S>,
    path_cost: Option<PathCostFn<S>>,
    heuristics: Vec<HeuristicFn<S>>,
}

impl<S: State> SearchProblem<S> {
    /// Creates a problem with unit step costs and no heuristics.
    pub fn new<G>(initial_state: S, operators: Vec<Operator<S>>, goal_test: G) -> Self
    where
        G: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self {
            initial_state,
            operators,
            goal_test: Box::new(goal_test),
            path_cost: None,
            heuristics: Vec::new(),
        }
    }

    /// Sets the edge cost function `(parent, child) -> cost`.
    pub fn with_path_cost<F>(mut self, path_cost: F) -> Self
    where
        F: Fn(&S, &S) -> f64 + Send + Sync + 'static,
    {
        self.path_cost = Some(Box::new(path_cost));
        self
    }

    /// Adds a heuristic. With several, their maximum is used.
    pub fn with_heuristic<F>(mut self, heuristic: F) -> Self
    where
        F: Fn(&S) -> f64 + Send + Sync + 'static,
    {
        self.heuristics.push(Box::new(heuristic));
        self
    }

    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    pub fn operators(&self) -> &[Operator<S>] {
        &self.operators
    }

    /// Whether at least one heuristic function is configured.
    pub fn has_heuristics(&self) -> bool {
        !self.heuristics.is_empty()
    }

    /// Evaluates the goal test.
    pub fn is_goal(&self, state: &S) -> bool {
        (self.goal_test)(state)
    }

    /// Validates the problem for use with the given search.
    ///
    /// Informed searches (greedy, A*) need at least one heuristic.
    pub fn validate_informed(&self, algorithm: &'static str) -> Result<(), SearchError> {
        if self.heuristics.is_empty() {
            return Err(SearchError::MissingHeuristic { algorithm });
        }
        Ok(())
    }

    /// Maximum over all heuristics, or `None` without heuristics.
    pub fn heuristic_value(&self, state: &S) -> Option<f64> {
        self.heuristics
            .iter()
            .map(|h| h(state))
            .fold(None, |best: Option<f64>, h| {
                Some(best.map_or(h, |b| b.max(h)))
            })
    }

    /// Builds the root node. Its `f` equals its heuristic value (or 0).
    pub(crate) fn root_node(&self) -> NodeRef<S> {
        let h = self.heuristic_value(&self.initial_state);
        Arc::new(SearchTreeNode::root(
            self.initial_state.clone(),
            h,
            h.unwrap_or(0.0),
        ))
    }

    /// Builds a child node, computing `(g, h, f)` with pathmax.
    fn child_node(&self, parent: &NodeRef<S>, state: S, operator: usize) -> SearchTreeNode<S> {
        let step = match &self.path_cost {
            Some(cost) => cost(&parent.state, &state),
            None => 1.0,
        };
        let path_cost = parent.path_cost + step;
        let heuristic_value = self.heuristic_value(&state);
        let f = match heuristic_value {
            Some(h) => (path_cost + h).max(parent.f),
            None => path_cost,
        };

        SearchTreeNode {
            state,
            parent: Some(Arc::clone(parent)),
            applied_operator: Some(AppliedOperator {
                index: operator,
                name: self.operators[operator].name.clone(),
            }),
            depth: parent.depth + 1,
            path_cost,
            heuristic_value,
            f,
        }
    }

    /// Expands `node`, returning its new children in generation order.
    ///
    /// Successors that are illegal or already in `visited` are skipped.
    /// Kept children are marked visited immediately, so two operators that
    /// produce the same state yield one child. With a depth limit, children
    /// whose depth reaches the limit are dropped without being marked.
    pub(crate) fn expand(
        &self,
        node: &NodeRef<S>,
        visited: &mut HashSet<S>,
        depth_limit: Option<usize>,
        generated: &mut usize,
    ) -> Vec<NodeRef<S>> {
        let mut children = Vec::new();
        if depth_limit.is_some_and(|limit| node.depth + 1 >= limit) {
            return children;
        }

        for (index, operator) in self.operators.iter().enumerate() {
            for state in operator.apply(&node.state) {
                if !state.is_legal() || visited.contains(&state) {
                    continue;
                }
                visited.insert(state.clone());
                children.push(Arc::new(self.child_node(node, state, index)));
                *generated += 1;
            }
        }

        log::trace!(
            "expanded depth={} g={} f={} children={}",
            node.depth,
            node.path_cost,
            node.f,
            children.len()
        );
        children
    }
}

impl<S: State> fmt::Debug for SearchProblem<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchProblem")
            .field("initial_state", &self.initial_state)
            .field("operators", &self.operators)
            .field("has_path_cost", &self.path_cost.is_some())
            .field("heuristics", &self.heuristics.len())
            .finish()
    }
}
