//! Sliding-puzzle board representation.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: an n-by-n grid of numbered tiles with one blank, with methods
//!   for goal detection, solvability analysis, and neighbor generation.
//! - `BoardError`: construction failures for boards built from raw tile data.
//!
//! Tiles are stored row-major. The solved board reads `1..n*n` left to right,
//! top to bottom, with the blank (`0`) in the bottom-right corner.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use thiserror::Error;

/// Smallest supported grid dimension. A 1-by-1 board has no moves at all.
pub const MIN_DIMENSION: usize = 2;

/// Errors raised when constructing a `Board` from raw tile data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The requested dimension is below `MIN_DIMENSION`.
    #[error("board dimension must be at least {MIN_DIMENSION}, got {0}")]
    DimensionTooSmall(usize),
    /// The tile vector does not hold exactly `n * n` values.
    #[error("expected {expected} tiles for a {n}x{n} board, found {actual}")]
    WrongTileCount {
        n: usize,
        expected: usize,
        actual: usize,
    },
    /// A tile value is out of range or repeated.
    #[error("tiles must be a permutation of 0..{limit}, value {value} is out of range or repeated")]
    NotAPermutation { value: u32, limit: u32 },
}

/// An n-by-n sliding-puzzle board.
///
/// The board owns its tiles and caches the position of the blank so that
/// neighbor generation does not rescan the grid. Two boards compare equal
/// when they have the same dimension and the same tile at every position,
/// which also makes `Board` usable as a hash key in the solver's visited set.
///
/// # Examples
/// ```
/// use algolab::board::Board;
///
/// let goal = Board::goal(3);
/// assert!(goal.is_goal());
/// assert!(goal.is_solvable());
/// assert_eq!(goal.dimension(), 3);
/// assert_eq!(goal.tile(0, 0), 1);
/// assert_eq!(goal.tile(2, 2), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    n: usize,
    tiles: Vec<u32>,
    /// Index of the blank in `tiles`.
    blank: usize,
}

impl Board {
    /// Builds a board from a row-major tile vector.
    ///
    /// This is the only public way to construct an arbitrary position, and
    /// it validates everything the rest of the crate relies on: the
    /// dimension is at least `MIN_DIMENSION`, exactly `n * n` tiles are
    /// given, and together they form a permutation of `0..n*n`.
    ///
    /// # Arguments
    /// * `n`: the grid dimension.
    /// * `tiles`: row-major tile values, with `0` for the blank.
    ///
    /// # Examples
    /// ```
    /// use algolab::board::{Board, BoardError};
    ///
    /// let board = Board::from_tiles(2, vec![1, 2, 3, 0]).unwrap();
    /// assert!(board.is_goal());
    ///
    /// let result = Board::from_tiles(2, vec![1, 1, 3, 0]);
    /// assert!(matches!(result, Err(BoardError::NotAPermutation { .. })));
    /// ```
    pub fn from_tiles(n: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        if n < MIN_DIMENSION {
            return Err(BoardError::DimensionTooSmall(n));
        }
        let expected = n * n;
        if tiles.len() != expected {
            return Err(BoardError::WrongTileCount {
                n,
                expected,
                actual: tiles.len(),
            });
        }
        let limit = expected as u32;
        let mut seen = vec![false; expected];
        for &value in &tiles {
            if value >= limit || seen[value as usize] {
                return Err(BoardError::NotAPermutation { value, limit });
            }
            seen[value as usize] = true;
        }
        let blank = tiles
            .iter()
            .position(|&value| value == 0)
            .expect("a validated permutation always contains the blank");
        Ok(Board { n, tiles, blank })
    }

    /// Returns the solved board of the given dimension.
    ///
    /// # Panics
    /// Panics if `n` is below `MIN_DIMENSION`.
    pub fn goal(n: usize) -> Self {
        assert!(
            n >= MIN_DIMENSION,
            "board dimension must be at least {MIN_DIMENSION}, got {n}"
        );
        let mut tiles: Vec<u32> = (1..(n * n) as u32).collect();
        tiles.push(0);
        Board {
            n,
            tiles,
            blank: n * n - 1,
        }
    }

    /// Returns a random solvable board of the given dimension.
    ///
    /// The same seed always produces the same board, which keeps search
    /// experiments reproducible. The tiles are shuffled uniformly and, when
    /// the shuffle lands on the unsolvable side of the parity split, two
    /// non-blank tiles are transposed to flip it back.
    ///
    /// # Panics
    /// Panics if `n` is below `MIN_DIMENSION`.
    pub fn random_solvable(n: usize, seed: u64) -> Self {
        assert!(
            n >= MIN_DIMENSION,
            "board dimension must be at least {MIN_DIMENSION}, got {n}"
        );
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tiles: Vec<u32> = (0..(n * n) as u32).collect();
        tiles.shuffle(&mut rng);
        let blank = tiles
            .iter()
            .position(|&value| value == 0)
            .expect("the shuffled range always contains the blank");
        let mut board = Board { n, tiles, blank };
        if !board.is_solvable() {
            // Any transposition of two non-blank tiles flips the inversion
            // parity without moving the blank.
            let mut non_blank = (0..board.tiles.len()).filter(|&index| index != board.blank);
            let first = non_blank.next().expect("n >= 2 leaves at least 3 tiles");
            let second = non_blank.next().expect("n >= 2 leaves at least 3 tiles");
            board.tiles.swap(first, second);
        }
        board
    }

    /// Returns the grid dimension `n`.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Returns the tile value at the given row and column, `0` for the blank.
    ///
    /// # Panics
    /// Panics if `row` or `col` are outside `0..n`.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        assert!(
            row < self.n && col < self.n,
            "position ({row}, {col}) outside a {n}x{n} board",
            n = self.n
        );
        self.tiles[row * self.n + col]
    }

    /// Returns the `(row, col)` position of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.n, self.blank % self.n)
    }

    /// Is this board the solved position?
    pub fn is_goal(&self) -> bool {
        self.blank == self.tiles.len() - 1
            && self.tiles[..self.blank]
                .iter()
                .enumerate()
                .all(|(index, &value)| value as usize == index + 1)
    }

    /// Can this board reach the goal at all?
    ///
    /// Sliding moves preserve a parity invariant, so exactly half of all
    /// permutations are reachable. For odd `n` a board is solvable iff its
    /// inversion count is even. For even `n` the blank's row also enters the
    /// invariant: the board is solvable iff the inversion count plus the
    /// blank's row counted from the bottom (starting at 1) is odd.
    ///
    /// # Examples
    /// ```
    /// use algolab::board::Board;
    ///
    /// // The famous unsolvable 15-puzzle: 14 and 15 exchanged.
    /// let mut tiles: Vec<u32> = (1..16).collect();
    /// tiles.swap(13, 14);
    /// tiles.push(0);
    /// let board = Board::from_tiles(4, tiles).unwrap();
    /// assert!(!board.is_solvable());
    /// ```
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.n % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row_from_bottom = self.n - self.blank / self.n;
            (inversions + blank_row_from_bottom) % 2 == 1
        }
    }

    /// Returns every board reachable by sliding one tile into the blank.
    ///
    /// A corner position yields 2 neighbors, an edge 3, an interior blank 4.
    /// Every neighbor differs from `self` by exactly one transposition
    /// involving the blank.
    pub fn neighbors(&self) -> Vec<Board> {
        let (row, col) = self.blank_position();
        let mut neighbors = Vec::with_capacity(4);
        if col + 1 < self.n {
            neighbors.push(self.slide_from(row, col + 1));
        }
        if col > 0 {
            neighbors.push(self.slide_from(row, col - 1));
        }
        if row + 1 < self.n {
            neighbors.push(self.slide_from(row + 1, col));
        }
        if row > 0 {
            neighbors.push(self.slide_from(row - 1, col));
        }
        neighbors
    }

    /// Counts tile pairs that appear in the wrong relative order row-major.
    /// The blank participates in no pair.
    fn inversions(&self) -> usize {
        let mut count = 0;
        for i in 0..self.tiles.len() {
            let a = self.tiles[i];
            if a == 0 {
                continue;
            }
            for &b in &self.tiles[i + 1..] {
                if b != 0 && a > b {
                    count += 1;
                }
            }
        }
        count
    }

    /// Copies the board and slides the tile at `(row, col)` into the blank.
    /// The caller guarantees the position is orthogonally adjacent to it.
    fn slide_from(&self, row: usize, col: usize) -> Board {
        let mut next = self.clone();
        let from = row * self.n + col;
        next.tiles.swap(self.blank, from);
        next.blank = from;
        next
    }
}

impl fmt::Display for Board {
    /// Formats the board in the same shape the parser accepts: the dimension
    /// on the first line, then one row of right-aligned tiles per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.n * self.n - 1).to_string().len();
        writeln!(f, "{}", self.n)?;
        for row in 0..self.n {
            for col in 0..self.n {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", self.tile(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::board_from_str;

    #[test]
    fn goal_board_layout() {
        let board = Board::goal(3);
        assert_eq!(board.tile(0, 0), 1);
        assert_eq!(board.tile(1, 1), 5);
        assert_eq!(board.tile(2, 1), 8);
        assert_eq!(board.tile(2, 2), 0);
        assert_eq!(board.blank_position(), (2, 2));
        assert!(board.is_goal());
    }

    #[test]
    fn from_tiles_rejects_small_dimension() {
        assert_eq!(
            Board::from_tiles(1, vec![0]),
            Err(BoardError::DimensionTooSmall(1))
        );
    }

    #[test]
    fn from_tiles_rejects_wrong_count() {
        assert_eq!(
            Board::from_tiles(2, vec![1, 2, 0]),
            Err(BoardError::WrongTileCount {
                n: 2,
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn from_tiles_rejects_out_of_range_value() {
        assert_eq!(
            Board::from_tiles(2, vec![1, 2, 4, 0]),
            Err(BoardError::NotAPermutation { value: 4, limit: 4 })
        );
    }

    #[test]
    fn from_tiles_rejects_duplicate_value() {
        assert_eq!(
            Board::from_tiles(2, vec![1, 2, 2, 0]),
            Err(BoardError::NotAPermutation { value: 2, limit: 4 })
        );
    }

    #[test]
    fn non_goal_board_is_recognized() {
        let board = board_from_str("3  1 2 3  4 5 6  7 0 8").unwrap();
        assert!(!board.is_goal());
    }

    #[test]
    fn blank_anywhere_but_last_is_not_goal() {
        // Tiles in order but the blank leading: every tile is one step late.
        let board = board_from_str("2  0 1  2 3").unwrap();
        assert!(!board.is_goal());
    }

    #[test]
    fn neighbor_count_depends_on_blank_position() {
        let corner = board_from_str("3  1 2 3  4 5 6  7 8 0").unwrap();
        assert_eq!(corner.neighbors().len(), 2);

        let edge = board_from_str("3  1 2 3  4 5 6  7 0 8").unwrap();
        assert_eq!(edge.neighbors().len(), 3);

        let center = board_from_str("3  1 2 3  4 0 6  7 8 5").unwrap();
        assert_eq!(center.neighbors().len(), 4);
    }

    #[test]
    fn neighbors_differ_by_one_blank_swap() {
        let board = board_from_str("3  1 2 3  4 0 6  7 8 5").unwrap();
        for neighbor in board.neighbors() {
            assert_ne!(neighbor, board);
            let mut changed = 0;
            for row in 0..3 {
                for col in 0..3 {
                    if neighbor.tile(row, col) != board.tile(row, col) {
                        changed += 1;
                    }
                }
            }
            assert_eq!(changed, 2, "a slide moves exactly one tile and the blank");
            assert!(neighbor.neighbors().contains(&board), "slides are reversible");
        }
    }

    #[test]
    fn solvability_odd_dimension() {
        assert!(Board::goal(3).is_solvable());
        // One transposition of the goal flips parity.
        let board = board_from_str("3  1 2 3  4 5 6  8 7 0").unwrap();
        assert!(!board.is_solvable());
    }

    #[test]
    fn solvability_even_dimension() {
        assert!(Board::goal(4).is_solvable());
        // Sam Loyd's puzzle: goal with 14 and 15 exchanged.
        let board =
            board_from_str("4  1 2 3 4  5 6 7 8  9 10 11 12  13 15 14 0").unwrap();
        assert!(!board.is_solvable());
        // Sliding within a solvable board never leaves the solvable half.
        let one_move = board_from_str("2  1 0  3 2").unwrap();
        assert!(one_move.is_solvable());
    }

    #[test]
    fn random_solvable_is_deterministic_and_solvable() {
        for seed in 0..32 {
            let board = Board::random_solvable(3, seed);
            assert!(board.is_solvable(), "seed {seed} produced an unsolvable board");
            assert_eq!(board, Board::random_solvable(3, seed));
        }
        assert_ne!(Board::random_solvable(3, 1), Board::random_solvable(3, 2));
    }

    #[test]
    fn random_solvable_larger_grids() {
        for seed in 0..8 {
            assert!(Board::random_solvable(4, seed).is_solvable());
        }
    }

    #[test]
    fn display_round_trips_through_parser() {
        let board = board_from_str("3  8 1 3  4 0 2  7 6 5").unwrap();
        let reparsed = board_from_str(&board.to_string()).unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn display_layout() {
        let board = board_from_str("2  1 0  3 2").unwrap();
        assert_eq!(board.to_string(), "2\n1 0\n3 2\n");
    }
}
