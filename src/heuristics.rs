//! Distance estimators for the puzzle search.
//!
//! Both heuristics are admissible: they never overestimate the number of
//! moves left, which is what makes the best-first search in `solver` return
//! minimal solutions. Manhattan dominates Hamming pointwise and usually
//! expands far fewer nodes.

use crate::board::Board;
use clap::ValueEnum;

/// Selects which distance estimate guides the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Heuristic {
    /// Number of tiles out of place.
    Hamming,
    /// Sum of each tile's row and column distance to its goal position.
    Manhattan,
}

impl Heuristic {
    /// Estimated moves remaining from `board` to the goal.
    pub fn estimate(&self, board: &Board) -> u32 {
        match self {
            Heuristic::Hamming => hamming(board),
            Heuristic::Manhattan => manhattan(board),
        }
    }
}

/// Counts the tiles that are not on their goal position.
///
/// The blank is not a tile and never counts, so the goal board scores 0.
///
/// # Examples
/// ```
/// use algolab::heuristics::hamming;
/// use algolab::parse::board_from_str;
///
/// let board = board_from_str("3  8 1 3  4 0 2  7 6 5").unwrap();
/// assert_eq!(hamming(&board), 5);
/// ```
pub fn hamming(board: &Board) -> u32 {
    let n = board.dimension();
    let mut misplaced = 0;
    for row in 0..n {
        for col in 0..n {
            let value = board.tile(row, col);
            if value != 0 && value as usize != row * n + col + 1 {
                misplaced += 1;
            }
        }
    }
    misplaced
}

/// Sums the grid distances of every tile to its goal position.
///
/// Tile `v` belongs at row `(v - 1) / n`, column `(v - 1) % n`. The blank
/// is skipped.
///
/// # Examples
/// ```
/// use algolab::heuristics::manhattan;
/// use algolab::parse::board_from_str;
///
/// let board = board_from_str("3  8 1 3  4 0 2  7 6 5").unwrap();
/// assert_eq!(manhattan(&board), 10);
/// ```
pub fn manhattan(board: &Board) -> u32 {
    let n = board.dimension();
    let mut distance = 0;
    for row in 0..n {
        for col in 0..n {
            let value = board.tile(row, col) as usize;
            if value == 0 {
                continue;
            }
            let goal_row = (value - 1) / n;
            let goal_col = (value - 1) % n;
            distance += (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32;
        }
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::board_from_str;

    #[test]
    fn goal_board_scores_zero() {
        let goal = Board::goal(3);
        assert_eq!(hamming(&goal), 0);
        assert_eq!(manhattan(&goal), 0);
    }

    #[test]
    fn reference_board_distances() {
        let board = board_from_str("3  8 1 3  4 0 2  7 6 5").unwrap();
        assert_eq!(hamming(&board), 5);
        assert_eq!(manhattan(&board), 10);
    }

    #[test]
    fn single_slide_from_goal() {
        // Only tile 8 moved, by one step.
        let board = board_from_str("3  1 2 3  4 5 6  7 0 8").unwrap();
        assert_eq!(hamming(&board), 1);
        assert_eq!(manhattan(&board), 1);
    }

    #[test]
    fn tile_value_divisible_by_dimension() {
        // Tile 3 belongs at (0, 2); placed at (2, 0) it is 4 steps away.
        let board = board_from_str("3  1 2 0  4 5 6  3 7 8").unwrap();
        let tile_3_distance = 4;
        // Tiles 7 and 8 each sit one step left of their goal position.
        let other_distances = 2;
        assert_eq!(manhattan(&board), tile_3_distance + other_distances);
    }

    #[test]
    fn manhattan_dominates_hamming() {
        for seed in 0..64 {
            let board = Board::random_solvable(3, seed);
            assert!(manhattan(&board) >= hamming(&board), "seed {seed}");
        }
    }

    #[test]
    fn estimate_dispatches_by_variant() {
        let board = board_from_str("3  8 1 3  4 0 2  7 6 5").unwrap();
        assert_eq!(Heuristic::Hamming.estimate(&board), hamming(&board));
        assert_eq!(Heuristic::Manhattan.estimate(&board), manhattan(&board));
    }
}
