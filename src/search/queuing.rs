//! Fringe merge policies.
//!
//! The engine always pops the front of the fringe; the queuing function
//! alone decides which node that is. Every strategy here behaves exactly
//! like a stable sort of `fringe ++ children` under its key, which means
//! ties keep older fringe entries first and children in generation order.

use std::cmp::Ordering;
use std::collections::VecDeque;

use super::node::{NodeRef, SearchTreeNode};

/// Merges freshly generated children into the fringe.
///
/// Implemented by [`QueuingStrategy`] and by any closure of the form
/// `Fn(&mut VecDeque<NodeRef<S>>, Vec<NodeRef<S>>)`, so callers can plug
/// in their own ordering.
pub trait QueuingFunction<S> {
    /// Merges `children` into `fringe` in place.
    fn merge(&self, fringe: &mut VecDeque<NodeRef<S>>, children: Vec<NodeRef<S>>);
}

impl<S, F> QueuingFunction<S> for F
where
    F: Fn(&mut VecDeque<NodeRef<S>>, Vec<NodeRef<S>>),
{
    fn merge(&self, fringe: &mut VecDeque<NodeRef<S>>, children: Vec<NodeRef<S>>) {
        self(fringe, children)
    }
}

/// The five built-in fringe orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueuingStrategy {
    /// FIFO: children go to the back (breadth-first).
    EnqueueAtEnd,
    /// LIFO: children go to the front, in generation order (depth-first).
    EnqueueAtFront,
    /// Ascending accumulated path cost (uniform-cost).
    SortByPathCost,
    /// Ascending heuristic value (greedy).
    SortByHeuristic,
    /// Ascending evaluation score `f` (A*).
    SortByF,
}

impl QueuingStrategy {
    fn key<S>(self, node: &SearchTreeNode<S>) -> f64 {
        match self {
            QueuingStrategy::SortByPathCost => node.path_cost,
            QueuingStrategy::SortByHeuristic => node.heuristic_value.unwrap_or(f64::NEG_INFINITY),
            _ => node.f,
        }
    }
}

impl<S> QueuingFunction<S> for QueuingStrategy {
    fn merge(&self, fringe: &mut VecDeque<NodeRef<S>>, children: Vec<NodeRef<S>>) {
        match self {
            QueuingStrategy::EnqueueAtEnd => fringe.extend(children),
            QueuingStrategy::EnqueueAtFront => {
                for child in children.into_iter().rev() {
                    fringe.push_front(child);
                }
            }
            _ => merge_sorted(fringe, children, |n| self.key(n)),
        }
    }
}

/// Merges `children` into an already sorted `fringe`.
///
/// Children are stably sorted first, then interleaved with the fringe in a
/// single pass. Equal keys keep fringe entries ahead of children.
fn merge_sorted<S, K>(fringe: &mut VecDeque<NodeRef<S>>, mut children: Vec<NodeRef<S>>, key: K)
where
    K: Fn(&SearchTreeNode<S>) -> f64,
{
    if children.is_empty() {
        return;
    }
    children.sort_by(|a, b| compare(key(a), key(b)));

    let mut merged = VecDeque::with_capacity(fringe.len() + children.len());
    let mut old = std::mem::take(fringe).into_iter().peekable();
    let mut new = children.into_iter().peekable();

    loop {
        let take_old = match (old.peek(), new.peek()) {
            (Some(a), Some(b)) => compare(key(a), key(b)) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_old { old.next() } else { new.next() };
        merged.extend(next);
    }

    *fringe = merged;
}

fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
