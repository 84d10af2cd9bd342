//! Partial-assignment search states.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::search::State;

/// Requirements on CSP variable identifiers.
pub trait Variable: Clone + Ord + Hash + fmt::Debug + Send + Sync + 'static {}

impl<T> Variable for T where T: Clone + Ord + Hash + fmt::Debug + Send + Sync + 'static {}

/// Requirements on CSP domain values.
pub trait Value: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

impl<T> Value for T where T: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

/// Constraint predicate over a (possibly partial) assignment.
///
/// Must treat unassigned variables ([`CspState::value`] returning `None`)
/// as undecided, not as violations.
pub type Constraint<V, D> = Arc<dyn Fn(&CspState<V, D>) -> bool + Send + Sync>;

/// Forward-checking function.
///
/// Receives the state before assignment and the value about to be given to
/// [`CspState::next_variable`]; returns, per unassigned variable, the values
/// to strike from that variable's domain.
pub type ForwardCheck<V, D> =
    Arc<dyn Fn(&CspState<V, D>, &D) -> BTreeMap<V, Vec<D>> + Send + Sync>;

/// Problem-wide data shared by every state of one solve.
pub(crate) struct CspShared<V, D> {
    pub(crate) groups: Vec<Vec<V>>,
    pub(crate) variables: Vec<V>,
    pub(crate) constraints: Vec<Constraint<V, D>>,
    pub(crate) forward_checking: Option<ForwardCheck<V, D>>,
}

/// A partial assignment of values to variables.
///
/// Each state carries its own copy of the domains, so pruning done by
/// forward checking on one branch never leaks into a sibling. Equality and
/// hashing consider the assignment only.
#[derive(Clone)]
pub struct CspState<V, D> {
    shared: Arc<CspShared<V, D>>,
    domains: BTreeMap<V, Vec<D>>,
    next_variable: Option<usize>,
    assignments: BTreeMap<V, D>,
}

impl<V: Variable, D: Value> CspState<V, D> {
    /// The empty assignment, with the first variable up next.
    pub(crate) fn root(shared: Arc<CspShared<V, D>>, domains: BTreeMap<V, Vec<D>>) -> Self {
        let next_variable = (!shared.variables.is_empty()).then_some(0);
        Self {
            shared,
            domains,
            next_variable,
            assignments: BTreeMap::new(),
        }
    }

    /// Current assignment.
    pub fn assignments(&self) -> &BTreeMap<V, D> {
        &self.assignments
    }

    /// Value assigned to `variable`, or `None` while it is unassigned.
    pub fn value(&self, variable: &V) -> Option<&D> {
        self.assignments.get(variable)
    }

    /// Remaining admissible values for `variable` on this branch.
    pub fn domain(&self, variable: &V) -> Option<&[D]> {
        self.domains.get(variable).map(Vec::as_slice)
    }

    /// The variable assigned by the next expansion, `None` when complete.
    pub fn next_variable(&self) -> Option<&V> {
        self.next_variable.map(|i| &self.shared.variables[i])
    }

    /// All variables in assignment order.
    pub fn variables(&self) -> &[V] {
        &self.shared.variables
    }

    /// Variables as originally grouped.
    pub fn variable_groups(&self) -> &[Vec<V>] {
        &self.shared.groups
    }

    /// Variables without a value, in assignment order.
    pub fn unassigned_variables(&self) -> impl Iterator<Item = &V> + '_ {
        self.shared
            .variables
            .iter()
            .filter(|v| !self.assignments.contains_key(*v))
    }

    /// Whether every variable has a value.
    pub fn is_complete(&self) -> bool {
        self.assignments.len() == self.shared.variables.len()
    }

    /// Complete and consistent with every constraint.
    pub fn is_goal(&self) -> bool {
        self.is_complete() && self.is_legal()
    }

    /// One successor per value left in the next variable's domain.
    ///
    /// With forward checking, each successor's domains are pruned by the
    /// values returned for that candidate. Already assigned variables (and
    /// the one being assigned) are never pruned.
    pub fn assign_value_to_next_variable(&self) -> Vec<Self> {
        let Some(index) = self.next_variable else {
            return Vec::new();
        };
        let variable = &self.shared.variables[index];
        let next_variable = (index + 1 < self.shared.variables.len()).then_some(index + 1);
        let Some(domain) = self.domains.get(variable) else {
            return Vec::new();
        };

        domain
            .iter()
            .map(|value| {
                let mut child = Self {
                    shared: Arc::clone(&self.shared),
                    domains: self.domains.clone(),
                    next_variable,
                    assignments: self.assignments.clone(),
                };
                child.assignments.insert(variable.clone(), value.clone());

                if let Some(forward_check) = &self.shared.forward_checking {
                    for (target, struck) in forward_check(self, value) {
                        if child.assignments.contains_key(&target) {
                            continue;
                        }
                        if let Some(values) = child.domains.get_mut(&target) {
                            values.retain(|v| !struck.contains(v));
                        }
                    }
                }
                child
            })
            .collect()
    }
}

impl<V: Variable, D: Value> State for CspState<V, D> {
    /// A partial assignment is legal when every constraint holds on it.
    fn is_legal(&self) -> bool {
        self.shared.constraints.iter().all(|c| c(self))
    }
}

impl<V: PartialEq, D: PartialEq> PartialEq for CspState<V, D> {
    fn eq(&self, other: &Self) -> bool {
        self.assignments == other.assignments
    }
}

impl<V: Eq, D: Eq> Eq for CspState<V, D> {}

impl<V: Hash, D: Hash> Hash for CspState<V, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.assignments.hash(state);
    }
}

impl<V: fmt::Debug, D: fmt::Debug> fmt::Debug for CspState<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.assignments, f)
    }
}
