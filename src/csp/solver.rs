//! Solving a CSP by depth-first search over partial assignments.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::model::Csp;
use super::state::{CspShared, CspState, Value, Variable};
use crate::error::SearchError;
use crate::search::{Operator, SearchOutcome, SearchProblem};

impl<V: Variable, D: Value> Csp<V, D> {
    /// Builds the root state: no assignments, the first variable up next.
    pub fn initial_state(&self) -> CspState<V, D> {
        let groups: Vec<Vec<V>> = self.groups.iter().map(|(vars, _)| vars.clone()).collect();
        let variables: Vec<V> = groups.iter().flatten().cloned().collect();
        let domains: BTreeMap<V, Vec<D>> = self
            .groups
            .iter()
            .flat_map(|(vars, domain)| vars.iter().map(move |v| (v.clone(), domain.clone())))
            .collect();

        let shared = CspShared {
            groups,
            variables,
            constraints: self.constraints.clone(),
            forward_checking: self.forward_checking.clone(),
        };
        CspState::root(Arc::new(shared), domains)
    }

    /// Solves the CSP with depth-first search.
    ///
    /// The single operator assigns each value left in the next variable's
    /// domain. Successors violating a constraint on the partial assignment
    /// are dropped by the engine's legality check. The goal is a complete,
    /// consistent assignment.
    ///
    /// # Errors
    /// [`SearchError::InvalidConfig`] if [`Csp::validate`] fails.
    pub fn solve(&self) -> Result<SearchOutcome<CspState<V, D>>, SearchError> {
        self.validate()?;
        log::debug!(
            "csp: {} variables, {} constraints, forward checking={}",
            self.variables().count(),
            self.constraints.len(),
            self.forward_checking.is_some()
        );

        let problem = SearchProblem::new(
            self.initial_state(),
            vec![Operator::new("Assign Value", |state: &CspState<V, D>| {
                state.assign_value_to_next_variable()
            })],
            |state: &CspState<V, D>| state.is_goal(),
        );
        Ok(problem.depth_first_search())
    }

    /// Solves the CSP and returns the satisfying assignment, if any.
    ///
    /// # Errors
    /// [`SearchError::InvalidConfig`] if [`Csp::validate`] fails.
    pub fn solve_assignment(&self) -> Result<Option<BTreeMap<V, D>>, SearchError> {
        let outcome = self.solve()?;
        Ok(outcome.state().map(|s| s.assignments().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::{all_different, distinct_forward_check};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_solve_simple_ordering() {
        let csp = Csp::new([(vec!['a', 'b', 'c'], vec![3u8, 2, 1])])
            .with_constraint(all_different())
            .with_constraint(|s: &CspState<char, u8>| match (s.value(&'a'), s.value(&'b')) {
                (Some(a), Some(b)) => a < b,
                _ => true,
            })
            .with_constraint(|s: &CspState<char, u8>| match (s.value(&'b'), s.value(&'c')) {
                (Some(b), Some(c)) => b < c,
                _ => true,
            });
        let assignment = csp.solve_assignment().unwrap().unwrap();
        assert_eq!(assignment, BTreeMap::from([('a', 1), ('b', 2), ('c', 3)]));
    }

    #[test]
    fn test_groups_get_their_own_domains() {
        let csp = Csp::new([(vec!["x", "y"], vec![0, 1]), (vec!["z"], vec![7, 8])])
            .with_constraint(|s: &CspState<&'static str, i32>| {
                s.value(&"x")
                    .zip(s.value(&"y"))
                    .map_or(true, |(x, y)| x != y)
            });
        let outcome = csp.solve().unwrap();
        let state = outcome.state().unwrap();
        assert_eq!(state.value(&"x"), Some(&0));
        assert_eq!(state.value(&"y"), Some(&1));
        assert_eq!(state.value(&"z"), Some(&7));
        assert_eq!(state.variable_groups().len(), 2);
        assert_eq!(outcome.depth(), Some(3));
    }

    #[test]
    fn test_unsatisfiable_returns_none() {
        let csp = Csp::new([(vec![1u8, 2, 3], vec!['r', 'g'])]).with_constraint(all_different());
        assert_eq!(csp.solve_assignment().unwrap(), None);
    }

    fn spaced_permutation(calls: Arc<AtomicUsize>) -> Csp<u8, u8> {
        Csp::new([(vec![0u8, 1, 2, 3, 4], vec![0u8, 1, 2, 3, 4])])
            .with_constraint(move |s: &CspState<u8, u8>| {
                calls.fetch_add(1, Ordering::Relaxed);
                // neighbouring variables differ by more than one
                (0u8..4).all(|i| match (s.value(&i), s.value(&(i + 1))) {
                    (Some(a), Some(b)) => a.abs_diff(*b) > 1,
                    _ => true,
                })
            })
            .with_constraint(all_different())
    }

    #[test]
    fn test_forward_checking_same_solution_fewer_checks() {
        let plain_calls = Arc::new(AtomicUsize::new(0));
        let plain = spaced_permutation(Arc::clone(&plain_calls))
            .solve_assignment()
            .unwrap();

        let checked_calls = Arc::new(AtomicUsize::new(0));
        let checked = spaced_permutation(Arc::clone(&checked_calls))
            .with_forward_checking(distinct_forward_check())
            .solve_assignment()
            .unwrap();

        assert!(plain.is_some());
        assert_eq!(plain, checked);
        assert!(
            checked_calls.load(Ordering::Relaxed) < plain_calls.load(Ordering::Relaxed),
            "forward checking should skip candidates that repeat a value"
        );
    }

    #[test]
    fn test_solve_is_repeatable() {
        let csp = Csp::new([(vec!['p', 'q'], vec![1u8, 2])]).with_constraint(all_different());
        let first = csp.solve_assignment().unwrap();
        let second = csp.solve_assignment().unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Some(BTreeMap::from([('p', 1), ('q', 2)])));
    }

    #[test]
    fn test_no_variables() {
        let csp: Csp<char, u8> = Csp::new([]);
        let outcome = csp.solve().unwrap();
        assert!(outcome.is_solved());
        assert_eq!(outcome.depth(), Some(0));
    }

    #[test]
    fn test_duplicate_variables_rejected() {
        let csp: Csp<char, u8> = Csp::new([(vec!['a', 'a'], vec![1])]);
        assert!(csp.solve().is_err());
    }
}
