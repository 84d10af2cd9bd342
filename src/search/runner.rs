//! The generic fringe loop and the named searches derived from it.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use super::node::{get_solution_path, NodeRef};
use super::problem::SearchProblem;
use super::queuing::{QueuingFunction, QueuingStrategy};
use super::types::State;
use crate::error::SearchError;

/// Default deepening bound for [`Algorithm::default_iterative_deepening`].
pub const DEFAULT_DEEPENING_ITERATIONS: usize = 100;

/// Counters collected during one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped from the fringe (or visited by a contour) that were not goals.
    pub expanded: usize,
    /// Child nodes created, excluding roots.
    pub generated: usize,
    /// Largest fringe length observed.
    pub max_fringe: usize,
    /// Deepening rounds or IDA* contours run (1 for single-pass searches).
    pub iterations: usize,
}

impl SearchStats {
    pub(crate) fn absorb(&mut self, other: &SearchStats) {
        self.expanded += other.expanded;
        self.generated += other.generated;
        self.max_fringe = self.max_fringe.max(other.max_fringe);
        self.iterations += other.iterations;
    }
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome<S> {
    /// The goal node, or `None` if the search space was exhausted.
    pub solution: Option<NodeRef<S>>,
    /// Search counters.
    pub stats: SearchStats,
}

impl<S> SearchOutcome<S> {
    /// Whether a goal node was found.
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Nodes from the root to the goal, or an empty vector when unsolved.
    pub fn path(&self) -> Vec<NodeRef<S>> {
        self.solution.as_ref().map(get_solution_path).unwrap_or_default()
    }

    /// Path cost of the goal node.
    pub fn path_cost(&self) -> Option<f64> {
        self.solution.as_ref().map(|n| n.path_cost)
    }

    /// Depth of the goal node (number of operator applications).
    pub fn depth(&self) -> Option<usize> {
        self.solution.as_ref().map(|n| n.depth)
    }

    /// The goal state.
    pub fn state(&self) -> Option<&S> {
        self.solution.as_ref().map(|n| &n.state)
    }
}

/// The named searches, for dispatch through [`SearchProblem::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    /// Depth-first, discarding nodes whose depth reaches `limit`.
    ///
    /// With `limit` 0 or 1 only the root is goal-tested.
    DepthLimited {
        limit: usize,
    },
    /// Depth-limited search with bounds `1..=max_depth`.
    IterativeDeepening {
        max_depth: usize,
    },
    UniformCost,
    Greedy,
    AStar,
    IterativeDeepeningAStar,
}

impl Algorithm {
    /// Iterative deepening with [`DEFAULT_DEEPENING_ITERATIONS`] rounds.
    pub fn default_iterative_deepening() -> Self {
        Algorithm::IterativeDeepening {
            max_depth: DEFAULT_DEEPENING_ITERATIONS,
        }
    }

    /// Whether the search needs at least one heuristic function.
    pub fn requires_heuristic(&self) -> bool {
        matches!(self, Algorithm::Greedy | Algorithm::AStar)
    }

    /// Short snake-case name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "breadth_first_search",
            Algorithm::DepthFirst => "depth_first_search",
            Algorithm::DepthLimited { .. } => "depth_limited_search",
            Algorithm::IterativeDeepening { .. } => "iterative_deepening_search",
            Algorithm::UniformCost => "uniform_cost_search",
            Algorithm::Greedy => "greedy_search",
            Algorithm::AStar => "a_star_search",
            Algorithm::IterativeDeepeningAStar => "iterative_deepening_a_star_search",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<S: State> SearchProblem<S> {
    /// Runs the generic fringe loop.
    ///
    /// The fringe starts as the root node and the visited set as the
    /// initial state. Each step pops the front node, returns it if it passes
    /// the goal test, and otherwise merges its new children into the fringe
    /// with `queuing`. `depth_limit` drops children whose depth reaches it.
    pub fn general_search<Q>(&self, queuing: &Q, depth_limit: Option<usize>) -> SearchOutcome<S>
    where
        Q: QueuingFunction<S> + ?Sized,
    {
        let mut stats = SearchStats {
            iterations: 1,
            ..SearchStats::default()
        };
        let mut visited = HashSet::from([self.initial_state().clone()]);
        let mut fringe = VecDeque::from([self.root_node()]);
        stats.max_fringe = 1;

        while let Some(node) = fringe.pop_front() {
            if self.is_goal(&node.state) {
                return SearchOutcome {
                    solution: Some(node),
                    stats,
                };
            }
            let children = self.expand(&node, &mut visited, depth_limit, &mut stats.generated);
            stats.expanded += 1;
            queuing.merge(&mut fringe, children);
            stats.max_fringe = stats.max_fringe.max(fringe.len());
        }

        SearchOutcome {
            solution: None,
            stats,
        }
    }

    pub fn breadth_first_search(&self) -> SearchOutcome<S> {
        self.logged(Algorithm::BreadthFirst, || {
            self.general_search(&QueuingStrategy::EnqueueAtEnd, None)
        })
    }

    pub fn depth_first_search(&self) -> SearchOutcome<S> {
        self.logged(Algorithm::DepthFirst, || {
            self.general_search(&QueuingStrategy::EnqueueAtFront, None)
        })
    }

    /// Depth-first search that never keeps a node of depth `>= max_depth`.
    ///
    /// With `max_depth` 0 or 1 only the root is goal-tested.
    pub fn depth_limited_search(&self, max_depth: usize) -> SearchOutcome<S> {
        self.logged(Algorithm::DepthLimited { limit: max_depth }, || {
            self.general_search(&QueuingStrategy::EnqueueAtFront, Some(max_depth))
        })
    }

    /// Runs depth-limited search with bounds `1, 2, ..., max_depth`.
    ///
    /// Each round starts from scratch with its own visited set. With
    /// `max_depth` 0 no round runs and nothing is solved;
    /// [`BatchConfig::validate`](super::BatchConfig::validate) rejects it.
    pub fn iterative_deepening_search(&self, max_depth: usize) -> SearchOutcome<S> {
        self.logged(Algorithm::IterativeDeepening { max_depth }, || {
            let mut stats = SearchStats::default();
            for bound in 1..=max_depth {
                let round = self.general_search(&QueuingStrategy::EnqueueAtFront, Some(bound));
                stats.absorb(&round.stats);
                log::debug!("deepening bound={bound} expanded={}", round.stats.expanded);
                if round.solution.is_some() {
                    return SearchOutcome {
                        solution: round.solution,
                        stats,
                    };
                }
            }
            SearchOutcome {
                solution: None,
                stats,
            }
        })
    }

    pub fn uniform_cost_search(&self) -> SearchOutcome<S> {
        self.logged(Algorithm::UniformCost, || {
            self.general_search(&QueuingStrategy::SortByPathCost, None)
        })
    }

    /// Expands the node with the smallest heuristic value first.
    ///
    /// # Errors
    /// [`SearchError::MissingHeuristic`] if the problem has no heuristics.
    pub fn greedy_search(&self) -> Result<SearchOutcome<S>, SearchError> {
        self.validate_informed(Algorithm::Greedy.name())?;
        Ok(self.logged(Algorithm::Greedy, || {
            self.general_search(&QueuingStrategy::SortByHeuristic, None)
        }))
    }

    /// Expands the node with the smallest `f = g + h` first.
    ///
    /// # Errors
    /// [`SearchError::MissingHeuristic`] if the problem has no heuristics.
    pub fn a_star_search(&self) -> Result<SearchOutcome<S>, SearchError> {
        self.validate_informed(Algorithm::AStar.name())?;
        Ok(self.logged(Algorithm::AStar, || {
            self.general_search(&QueuingStrategy::SortByF, None)
        }))
    }

    /// Runs the named search.
    ///
    /// # Errors
    /// [`SearchError::MissingHeuristic`] for greedy or A* without heuristics.
    pub fn solve(&self, algorithm: Algorithm) -> Result<SearchOutcome<S>, SearchError> {
        match algorithm {
            Algorithm::BreadthFirst => Ok(self.breadth_first_search()),
            Algorithm::DepthFirst => Ok(self.depth_first_search()),
            Algorithm::DepthLimited { limit } => Ok(self.depth_limited_search(limit)),
            Algorithm::IterativeDeepening { max_depth } => {
                Ok(self.iterative_deepening_search(max_depth))
            }
            Algorithm::UniformCost => Ok(self.uniform_cost_search()),
            Algorithm::Greedy => self.greedy_search(),
            Algorithm::AStar => self.a_star_search(),
            Algorithm::IterativeDeepeningAStar => Ok(self.iterative_deepening_a_star_search()),
        }
    }

    pub(crate) fn logged<F>(&self, algorithm: Algorithm, run: F) -> SearchOutcome<S>
    where
        F: FnOnce() -> SearchOutcome<S>,
    {
        log::debug!("{algorithm}: start from {:?}", self.initial_state());
        let outcome = run();
        log::debug!(
            "{algorithm}: solved={} depth={:?} cost={:?} expanded={} generated={} max_fringe={}",
            outcome.is_solved(),
            outcome.depth(),
            outcome.path_cost(),
            outcome.stats.expanded,
            outcome.stats.generated,
            outcome.stats.max_fringe
        );
        outcome
    }
}
