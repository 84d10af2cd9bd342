//! CSP definition.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use super::state::{Constraint, CspState, ForwardCheck, Value, Variable};
use crate::error::SearchError;

/// A constraint satisfaction problem.
///
/// Variables come in groups; every variable of a group starts with its own
/// copy of the group's domain. Variables are assigned in declaration order.
///
/// # Examples
///
/// ```
/// use u_search::csp::{all_different, Csp};
///
/// let csp = Csp::new([(vec!['x', 'y', 'z'], vec![1, 2, 3])])
///     .with_constraint(all_different())
///     .with_constraint(|s| match (s.value(&'x'), s.value(&'z')) {
///         (Some(x), Some(z)) => x > z,
///         _ => true,
///     });
///
/// let solution = csp.solve_assignment().unwrap().unwrap();
/// assert!(solution[&'x'] > solution[&'z']);
/// ```
pub struct Csp<V, D> {
    pub(crate) groups: Vec<(Vec<V>, Vec<D>)>,
    pub(crate) constraints: Vec<Constraint<V, D>>,
    pub(crate) forward_checking: Option<ForwardCheck<V, D>>,
}

impl<V: Variable, D: Value> Csp<V, D> {
    /// Creates a CSP from `(variables, domain)` groups.
    pub fn new<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (Vec<V>, Vec<D>)>,
    {
        Self {
            groups: groups.into_iter().collect(),
            constraints: Vec::new(),
            forward_checking: None,
        }
    }

    /// Adds a constraint predicate.
    pub fn with_constraint<F>(mut self, constraint: F) -> Self
    where
        F: Fn(&CspState<V, D>) -> bool + Send + Sync + 'static,
    {
        self.constraints.push(Arc::new(constraint));
        self
    }

    /// Enables forward checking with the given pruning function.
    pub fn with_forward_checking<F>(mut self, forward_checking: F) -> Self
    where
        F: Fn(&CspState<V, D>, &D) -> BTreeMap<V, Vec<D>> + Send + Sync + 'static,
    {
        self.forward_checking = Some(Arc::new(forward_checking));
        self
    }

    /// All variables in assignment order.
    pub fn variables(&self) -> impl Iterator<Item = &V> + '_ {
        self.groups.iter().flat_map(|(vars, _)| vars.iter())
    }

    /// Validates the problem definition.
    ///
    /// # Errors
    /// [`SearchError::InvalidConfig`] if a variable is declared twice.
    pub fn validate(&self) -> Result<(), SearchError> {
        let mut seen = HashSet::new();
        for variable in self.variables() {
            if !seen.insert(variable) {
                return Err(SearchError::InvalidConfig(format!(
                    "variable {variable:?} declared more than once"
                )));
            }
        }
        Ok(())
    }
}

impl<V: fmt::Debug, D: fmt::Debug> fmt::Debug for Csp<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Csp")
            .field("groups", &self.groups)
            .field("constraints", &self.constraints.len())
            .field("forward_checking", &self.forward_checking.is_some())
            .finish()
    }
}

/// Constraint requiring all assigned variables to hold distinct values.
pub fn all_different<V: Variable, D: Value>(
) -> impl Fn(&CspState<V, D>) -> bool + Send + Sync + 'static {
    |state: &CspState<V, D>| -> bool {
        let mut seen = HashSet::new();
        state.assignments().values().all(|v| seen.insert(v))
    }
}

/// Forward-checking function striking the candidate value from every other
/// unassigned variable, the pruning counterpart of [`all_different`].
pub fn distinct_forward_check<V: Variable, D: Value>(
) -> impl Fn(&CspState<V, D>, &D) -> BTreeMap<V, Vec<D>> + Send + Sync + 'static {
    |state: &CspState<V, D>, value: &D| -> BTreeMap<V, Vec<D>> {
        let assigning: BTreeSet<&V> = state.next_variable().into_iter().collect();
        state
            .unassigned_variables()
            .filter(|v| !assigning.contains(v))
            .map(|v| (v.clone(), vec![value.clone()]))
            .collect()
    }
}
