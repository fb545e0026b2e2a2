//! Best-first search over puzzle boards.
//!
//! The search is the textbook A* loop: a priority queue ordered on
//! `moves so far + heuristic estimate`, a visited set keyed on the board
//! itself, and parent links for reconstructing the winning path. Because
//! both heuristics in `crate::heuristics` are admissible, the first goal
//! board popped from the queue ends a minimal solution.
//!
//! Unsolvable boards are rejected up front by the parity test on `Board`,
//! so the search itself only ever runs on inputs that terminate.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use tracing::debug;

use crate::board::Board;
use crate::heuristics::Heuristic;

/// A minimal solution found by `solve`.
#[derive(Clone, Debug)]
pub struct Solution {
    /// The board sequence from the initial position to the goal, inclusive.
    pub path: Vec<Board>,
    /// Number of boards expanded during the search. Useful for comparing
    /// heuristics; not part of the solution itself.
    pub nodes_expanded: usize,
}

impl Solution {
    /// Number of slides in the solution. Zero when the initial board was
    /// already solved.
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }
}

/// A search node: a reached board plus how it was reached. Nodes live in an
/// arena so that parent links are plain indices.
struct Node {
    board: Board,
    parent: Option<usize>,
    cost: u32,
}

/// Solves the board with a minimal number of slides, or returns `None` when
/// the board cannot reach the goal.
///
/// # Arguments
/// * `initial`: the starting position.
/// * `heuristic`: the distance estimate guiding the search.
///
/// # Examples
/// ```
/// use algolab::heuristics::Heuristic;
/// use algolab::parse::board_from_str;
/// use algolab::solver::solve;
///
/// let board = board_from_str("3  0 1 3  4 2 5  7 8 6").unwrap();
/// let solution = solve(&board, Heuristic::Manhattan).unwrap();
/// assert_eq!(solution.moves(), 4);
/// ```
pub fn solve(initial: &Board, heuristic: Heuristic) -> Option<Solution> {
    if !initial.is_solvable() {
        debug!(dimension = initial.dimension(), "board fails the parity test");
        return None;
    }
    debug!(
        dimension = initial.dimension(),
        ?heuristic,
        "starting best-first search"
    );

    let mut arena: Vec<Node> = Vec::new();
    // Min-heap entries: (f = cost + estimate, estimate, arena index). The
    // estimate breaks f-ties toward boards closer to the goal.
    let mut open: BinaryHeap<Reverse<(u32, u32, usize)>> = BinaryHeap::new();
    let mut closed: HashSet<Board> = HashSet::new();
    let mut expanded = 0usize;

    let estimate = heuristic.estimate(initial);
    arena.push(Node {
        board: initial.clone(),
        parent: None,
        cost: 0,
    });
    open.push(Reverse((estimate, estimate, 0)));

    while let Some(Reverse((_, _, index))) = open.pop() {
        // The heap may hold stale entries for boards that were reached again
        // on a cheaper path and already expanded.
        if closed.contains(&arena[index].board) {
            continue;
        }
        if arena[index].board.is_goal() {
            let path = reconstruct(&arena, index);
            debug!(expanded, moves = path.len() - 1, "search complete");
            return Some(Solution {
                path,
                nodes_expanded: expanded,
            });
        }
        closed.insert(arena[index].board.clone());
        expanded += 1;

        let cost = arena[index].cost + 1;
        let neighbors = arena[index].board.neighbors();
        for next in neighbors {
            if closed.contains(&next) {
                continue;
            }
            let estimate = heuristic.estimate(&next);
            arena.push(Node {
                board: next,
                parent: Some(index),
                cost,
            });
            open.push(Reverse((cost + estimate, estimate, arena.len() - 1)));
        }
    }

    // Unreachable for boards that pass the parity test; the goal half of the
    // permutation group is connected under slides.
    None
}

/// Walks parent links from the goal node back to the root.
fn reconstruct(arena: &[Node], goal_index: usize) -> Vec<Board> {
    let mut path = Vec::new();
    let mut cursor = Some(goal_index);
    while let Some(index) = cursor {
        path.push(arena[index].board.clone());
        cursor = arena[index].parent;
    }
    path.reverse();
    path
}
