//! Missionaries and cannibals: three of each must cross a river in a
//! two-seat boat without cannibals ever outnumbering missionaries on a bank.

use u_search::search::{get_solution_path, Operator, SearchProblem, State};

/// Missionaries and cannibals on the left bank, and the boat side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Bank {
    missionaries: i8,
    cannibals: i8,
    boat_left: bool,
}

impl State for Bank {
    fn is_legal(&self) -> bool {
        let (m, c) = (self.missionaries, self.cannibals);
        if !(0..=3).contains(&m) || !(0..=3).contains(&c) {
            return false;
        }
        let left_safe = m == 0 || c <= m;
        let right_safe = 3 - m == 0 || 3 - c <= 3 - m;
        left_safe && right_safe
    }
}

fn cross(missionaries: i8, cannibals: i8) -> impl Fn(&Bank) -> Vec<Bank> + Send + Sync {
    move |bank: &Bank| {
        let sign = if bank.boat_left { -1 } else { 1 };
        vec![Bank {
            missionaries: bank.missionaries + sign * missionaries,
            cannibals: bank.cannibals + sign * cannibals,
            boat_left: !bank.boat_left,
        }]
    }
}

fn problem() -> SearchProblem<Bank> {
    SearchProblem::new(
        Bank {
            missionaries: 3,
            cannibals: 3,
            boat_left: true,
        },
        vec![
            Operator::new("Move 2 M", cross(2, 0)),
            Operator::new("Move 1 M", cross(1, 0)),
            Operator::new("Move 2 C", cross(0, 2)),
            Operator::new("Move 1 C", cross(0, 1)),
            Operator::new("Move 1 M 1 C", cross(1, 1)),
        ],
        |b: &Bank| b.missionaries == 0 && b.cannibals == 0 && !b.boat_left,
    )
}

#[test]
fn breadth_first_finds_eleven_crossings() {
    let problem = problem();
    let outcome = problem.breadth_first_search();
    let goal = outcome.solution.as_ref().expect("puzzle is solvable");

    assert_eq!(goal.depth, 11);
    assert_eq!(goal.path_cost, 11.0);

    let path = get_solution_path(goal);
    assert_eq!(path.len(), 12);
    assert_eq!(path[0].state, *problem.initial_state());
    for pair in path.windows(2) {
        let (parent, child) = (&pair[0], &pair[1]);
        assert!(child.state.is_legal());
        let applied = child.applied_operator.as_ref().unwrap();
        let operator = &problem.operators()[applied.index];
        assert_eq!(operator.name, applied.name);
        assert!(operator.apply(&parent.state).contains(&child.state));
        assert_ne!(parent.state.boat_left, child.state.boat_left);
    }
}

#[test]
fn iterative_deepening_matches_breadth_first_depth() {
    let outcome = problem().iterative_deepening_search(20);
    assert_eq!(outcome.depth(), Some(11));
    assert_eq!(outcome.stats.iterations, 12);
}

#[test]
fn uniform_cost_matches_breadth_first_depth() {
    assert_eq!(problem().uniform_cost_search().depth(), Some(11));
}

#[test]
fn depth_first_finds_a_legal_crossing() {
    let outcome = problem().depth_first_search();
    let path = outcome.path();
    assert!(!path.is_empty());
    assert!(path.iter().all(|n| n.state.is_legal()));
    assert!(outcome.depth().unwrap() >= 11);
}

#[test]
fn each_reachable_state_is_generated_once() {
    let outcome = problem().breadth_first_search();
    // 14 legal states are reachable besides the start, each generated once.
    assert!(outcome.stats.generated <= 14);
}
