//! Iterative-deepening A* (IDA*).
//!
//! Each iteration is a bounded depth-first traversal (a contour) that
//! prunes nodes whose `f` exceeds the current bound. The smallest pruned
//! `f` becomes the next bound. Contours avoid fringe sorting entirely and
//! keep memory proportional to the current path plus the visited set.
//!
//! # References
//!
//! Korf (1985), "Depth-First Iterative-Deepening: An Optimal Admissible Tree Search"

use std::collections::HashSet;

use super::node::NodeRef;
use super::problem::SearchProblem;
use super::runner::{Algorithm, SearchOutcome, SearchStats};
use super::types::State;

/// Result of one bounded contour traversal.
#[derive(Debug)]
enum Contour<S> {
    /// A goal node within the bound.
    Found(NodeRef<S>),
    /// No goal within the bound; carries the smallest `f` that overflowed,
    /// or `None` if nothing was pruned.
    Exceeded(Option<f64>),
}

/// What happened when the traversal reached a node.
enum Visit<S> {
    Overflow(f64),
    Goal(NodeRef<S>),
    Expanded(Vec<NodeRef<S>>),
}

/// One level of the explicit traversal stack: an expanded node's children,
/// the next one to descend into, and the smallest overflow seen below it.
struct Frame<S> {
    children: Vec<NodeRef<S>>,
    next: usize,
    overflow: Option<f64>,
}

impl<S> Frame<S> {
    fn new(children: Vec<NodeRef<S>>) -> Self {
        Self {
            children,
            next: 0,
            overflow: None,
        }
    }

    fn lower(&mut self, f: Option<f64>) {
        if let Some(f) = f {
            self.overflow = Some(self.overflow.map_or(f, |b| b.min(f)));
        }
    }
}

impl<S: State> SearchProblem<S> {
    /// Iterative-deepening A*.
    ///
    /// Starts with the root's `f` as the bound and raises it to the smallest
    /// overflowing `f` after each failed contour. Each contour uses a fresh,
    /// empty visited set. Without heuristics `f = g`, which makes this
    /// iterative lengthening on path cost.
    pub fn iterative_deepening_a_star_search(&self) -> SearchOutcome<S> {
        self.logged(Algorithm::IterativeDeepeningAStar, || {
            let root = self.root_node();
            let mut bound = root.f;
            let mut stats = SearchStats::default();

            loop {
                let mut visited = HashSet::new();
                let mut round = SearchStats {
                    iterations: 1,
                    max_fringe: 1,
                    ..SearchStats::default()
                };
                let result = self.dfs_contour(&root, bound, &mut visited, &mut round);
                stats.absorb(&round);

                match result {
                    Contour::Found(node) => {
                        return SearchOutcome {
                            solution: Some(node),
                            stats,
                        }
                    }
                    Contour::Exceeded(Some(next)) if next > bound => {
                        log::debug!("contour bound={bound} exhausted, next bound={next}");
                        bound = next;
                    }
                    Contour::Exceeded(_) => {
                        return SearchOutcome {
                            solution: None,
                            stats,
                        }
                    }
                }
            }
        })
    }

    /// Depth-first traversal of one contour.
    ///
    /// Driven by an explicit stack so contour depth is bounded by memory,
    /// not by the thread's call stack. Children are entered in generation
    /// order and each frame folds the overflows of its subtree.
    fn dfs_contour(
        &self,
        root: &NodeRef<S>,
        bound: f64,
        visited: &mut HashSet<S>,
        stats: &mut SearchStats,
    ) -> Contour<S> {
        let mut stack = match self.visit(root, bound, visited, stats, 1) {
            Visit::Overflow(f) => return Contour::Exceeded(Some(f)),
            Visit::Goal(node) => return Contour::Found(node),
            Visit::Expanded(children) => vec![Frame::new(children)],
        };

        loop {
            let path_len = stack.len() + 1;
            let Some(frame) = stack.last_mut() else {
                return Contour::Exceeded(None);
            };

            if let Some(child) = frame.children.get(frame.next).cloned() {
                frame.next += 1;
                match self.visit(&child, bound, visited, stats, path_len) {
                    Visit::Overflow(f) => frame.lower(Some(f)),
                    Visit::Goal(node) => return Contour::Found(node),
                    Visit::Expanded(children) => stack.push(Frame::new(children)),
                }
                continue;
            }

            let overflow = frame.overflow;
            stack.pop();
            match stack.last_mut() {
                Some(parent) => parent.lower(overflow),
                None => return Contour::Exceeded(overflow),
            }
        }
    }

    /// Bound check, goal test and expansion of a single node.
    ///
    /// `path_len` is the node's position on the current path, used for the
    /// `max_fringe` counter.
    fn visit(
        &self,
        node: &NodeRef<S>,
        bound: f64,
        visited: &mut HashSet<S>,
        stats: &mut SearchStats,
        path_len: usize,
    ) -> Visit<S> {
        if node.f > bound {
            return Visit::Overflow(node.f);
        }
        if self.is_goal(&node.state) {
            return Visit::Goal(node.clone());
        }

        let children = self.expand(node, visited, None, &mut stats.generated);
        stats.expanded += 1;
        stats.max_fringe = stats.max_fringe.max(path_len + children.len());
        Visit::Expanded(children)
    }
}
