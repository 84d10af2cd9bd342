//! Search tree nodes.
//!
//! Nodes are immutable once built and shared through [`NodeRef`]. A child
//! holds a strong reference to its parent, so a node stays alive exactly as
//! long as it sits on the fringe or is an ancestor of one that does.

use std::fmt;
use std::sync::Arc;

/// Shared handle to a search tree node.
pub type NodeRef<S> = Arc<SearchTreeNode<S>>;

/// The operator that produced a node from its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedOperator {
    /// Position of the operator in the problem's operator list.
    pub index: usize,
    /// Operator name at the time of application.
    pub name: String,
}

/// A state wrapped with its search bookkeeping.
#[derive(Debug)]
pub struct SearchTreeNode<S> {
    /// The wrapped state.
    pub state: S,
    /// Parent node (`None` for the root).
    pub parent: Option<NodeRef<S>>,
    /// Operator applied to the parent's state (`None` for the root).
    pub applied_operator: Option<AppliedOperator>,
    /// Tree depth (root = 0).
    pub depth: usize,
    /// Accumulated path cost from the root.
    pub path_cost: f64,
    /// Max over the problem's heuristics, `None` when none are supplied.
    pub heuristic_value: Option<f64>,
    /// Evaluation score, pathmax-corrected when heuristics are active.
    pub f: f64,
}

impl<S> SearchTreeNode<S> {
    /// Creates a root node with the given cost triple.
    pub fn root(state: S, heuristic_value: Option<f64>, f: f64) -> Self {
        Self {
            state,
            parent: None,
            applied_operator: None,
            depth: 0,
            path_cost: 0.0,
            heuristic_value,
            f,
        }
    }

    /// Whether this node is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<S> Drop for SearchTreeNode<S> {
    // Unlink uniquely owned ancestors iteratively so deep chains do not
    // overflow the stack on drop.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut inner) => next = inner.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Display for SearchTreeNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "State: {:?}, Depth: {}, Path Cost: {:.6}",
            self.state, self.depth, self.path_cost
        )?;
        if let Some(h) = self.heuristic_value {
            write!(f, ", Heuristic Value: {h:.6}")?;
        }
        match &self.applied_operator {
            Some(op) => write!(f, ", Applied Operator: {}", op.name),
            None => write!(f, ", Applied Operator: None"),
        }
    }
}

/// Returns the nodes from the root to `node`, root first.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_search::search::{get_solution_path, SearchTreeNode};
///
/// let root = Arc::new(SearchTreeNode::root("a", None, 0.0));
/// let path = get_solution_path(&root);
/// assert_eq!(path.len(), 1);
/// assert_eq!(path[0].state, "a");
/// ```
pub fn get_solution_path<S>(node: &NodeRef<S>) -> Vec<NodeRef<S>> {
    let mut path = vec![Arc::clone(node)];
    let mut current = node;
    while let Some(parent) = &current.parent {
        path.push(Arc::clone(parent));
        current = parent;
    }
    path.reverse();
    path
}
