//! The 8-puzzle: slide tiles on a 3x3 board until they read 1..8 with the
//! blank in the bottom-right corner.

use std::sync::{Arc, Mutex};

use u_search::search::{get_solution_path, Operator, SearchProblem, State};
use u_search::SearchError;

const GOAL: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Row-major board, 0 is the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Board([u8; 9]);

impl State for Board {}

impl Board {
    fn blank(&self) -> usize {
        self.0.iter().position(|&t| t == 0).unwrap_or(0)
    }

    /// Swaps the blank with the tile `(dr, dc)` away, if that cell exists.
    fn slide(&self, dr: isize, dc: isize) -> Vec<Board> {
        let blank = self.blank();
        let (row, col) = ((blank / 3) as isize, (blank % 3) as isize);
        let (r, c) = (row + dr, col + dc);
        if !(0..3).contains(&r) || !(0..3).contains(&c) {
            return Vec::new();
        }
        let mut tiles = self.0;
        tiles.swap(blank, (r * 3 + c) as usize);
        vec![Board(tiles)]
    }
}

fn misplaced_tiles(board: &Board) -> f64 {
    board
        .0
        .iter()
        .zip(GOAL)
        .filter(|&(&tile, goal)| tile != 0 && tile != goal)
        .count() as f64
}

fn manhattan_distance(board: &Board) -> f64 {
    board
        .0
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(i, &tile)| {
            let target = usize::from(tile - 1);
            (i / 3).abs_diff(target / 3) + (i % 3).abs_diff(target % 3)
        })
        .sum::<usize>() as f64
}

fn operators() -> Vec<Operator<Board>> {
    vec![
        Operator::new("Move Blank Left", |b: &Board| b.slide(0, -1)),
        Operator::new("Move Blank Right", |b: &Board| b.slide(0, 1)),
        Operator::new("Move Blank Up", |b: &Board| b.slide(-1, 0)),
        Operator::new("Move Blank Down", |b: &Board| b.slide(1, 0)),
    ]
}

fn puzzle(start: [u8; 9]) -> SearchProblem<Board> {
    SearchProblem::new(Board(start), operators(), |b: &Board| b.0 == GOAL)
}

/// Twelve moves from the goal.
const TWELVE: [u8; 9] = [5, 1, 3, 4, 0, 2, 7, 8, 6];

fn operator_names(problem_outcome: &u_search::search::SearchOutcome<Board>) -> Vec<String> {
    problem_outcome
        .path()
        .iter()
        .filter_map(|n| n.applied_operator.as_ref().map(|op| op.name.clone()))
        .collect()
}

#[test]
fn a_star_two_moves_from_goal() {
    let problem = puzzle([1, 2, 3, 4, 5, 6, 0, 7, 8]).with_heuristic(manhattan_distance);
    let outcome = problem.a_star_search().unwrap();

    assert_eq!(outcome.state(), Some(&Board(GOAL)));
    assert_eq!(outcome.path_cost(), Some(2.0));
    assert_eq!(
        operator_names(&outcome),
        vec!["Move Blank Right", "Move Blank Right"]
    );
}

#[test]
fn informed_searches_match_breadth_first_depth() {
    let bfs = puzzle(TWELVE).breadth_first_search();
    assert_eq!(bfs.depth(), Some(12));

    let informed = puzzle(TWELVE).with_heuristic(manhattan_distance);
    let a_star = informed.a_star_search().unwrap();
    assert_eq!(a_star.path_cost(), Some(12.0));
    assert!(
        a_star.stats.expanded < bfs.stats.expanded / 10,
        "A* expanded {} nodes, BFS {}",
        a_star.stats.expanded,
        bfs.stats.expanded
    );

    let both = puzzle(TWELVE)
        .with_heuristic(misplaced_tiles)
        .with_heuristic(manhattan_distance);
    let ida = both.iterative_deepening_a_star_search();
    assert_eq!(ida.path_cost(), Some(12.0));
    assert_eq!(ida.stats.iterations, 4);
}

#[test]
fn max_of_heuristics_is_used() {
    let problem = puzzle(TWELVE)
        .with_heuristic(misplaced_tiles)
        .with_heuristic(manhattan_distance);
    assert_eq!(problem.heuristic_value(&Board(TWELVE)), Some(6.0));
    assert_eq!(misplaced_tiles(&Board(TWELVE)), 4.0);
}

#[test]
fn greedy_reaches_goal_along_a_valid_path() {
    let start = [4, 1, 2, 0, 8, 7, 6, 3, 5];
    let problem = puzzle(start).with_heuristic(manhattan_distance);
    let outcome = problem.greedy_search().unwrap();
    let goal = outcome.solution.as_ref().unwrap();

    assert_eq!(goal.state, Board(GOAL));
    // greedy ignores path cost, so it may wander well past the optimum of 17
    assert!(goal.path_cost >= 17.0);

    let path = get_solution_path(goal);
    assert_eq!(path[0].state, Board(start));
    for pair in path.windows(2) {
        let applied = pair[1].applied_operator.as_ref().unwrap();
        let successors = problem.operators()[applied.index].apply(&pair[0].state);
        assert_eq!(successors, vec![pair[1].state]);
    }
}

#[test]
fn informed_searches_require_a_heuristic() {
    let problem = puzzle(TWELVE);
    assert!(matches!(
        problem.greedy_search(),
        Err(SearchError::MissingHeuristic { .. })
    ));
    assert!(matches!(
        problem.a_star_search(),
        Err(SearchError::MissingHeuristic { .. })
    ));
}

#[test]
fn unit_cost_uniform_search_visits_like_breadth_first() {
    fn recorded(start: [u8; 9]) -> (SearchProblem<Board>, Arc<Mutex<Vec<Board>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let problem = SearchProblem::new(Board(start), operators(), move |b: &Board| {
            log.lock().unwrap().push(*b);
            b.0 == GOAL
        });
        (problem, seen)
    }

    let (bfs, bfs_order) = recorded(TWELVE);
    let (ucs, ucs_order) = recorded(TWELVE);
    let bfs_outcome = bfs.breadth_first_search();
    let ucs_outcome = ucs.uniform_cost_search();

    assert_eq!(bfs_outcome.depth(), ucs_outcome.depth());
    assert_eq!(bfs_outcome.stats, ucs_outcome.stats);
    assert_eq!(*bfs_order.lock().unwrap(), *ucs_order.lock().unwrap());
}

#[test]
fn pathmax_keeps_f_monotone_with_inconsistent_heuristic() {
    // only informative while the blank sits in the centre
    let patchy = |b: &Board| {
        if b.blank() == 4 {
            manhattan_distance(b)
        } else {
            0.0
        }
    };
    let problem = puzzle(TWELVE).with_heuristic(patchy);
    let outcome = problem.a_star_search().unwrap();
    assert!(outcome.is_solved());

    let path = outcome.path();
    for pair in path.windows(2) {
        assert!(pair[1].f >= pair[0].f);
        let h = pair[1].heuristic_value.unwrap();
        assert!(pair[1].f >= pair[1].path_cost + h);
    }
}

#[test]
fn depth_limit_too_small_fails() {
    let problem = puzzle([1, 2, 3, 4, 5, 6, 0, 7, 8]);
    assert!(!problem.depth_limited_search(2).is_solved());
    let outcome = problem.depth_limited_search(3);
    assert_eq!(outcome.depth(), Some(2));
}
