//! # algolab
//!
//! A small workbench of classical algorithms and containers, each usable on
//! its own and each with a thin command-line front-end:
//!
//! - `puzzle_solver`: reads an n-by-n sliding-puzzle board from a file and
//!   prints a minimal move sequence, or reports that none exists.
//! - `percolation_stats`: runs Monte Carlo percolation experiments on an
//!   n-by-n grid and prints threshold statistics.
//! - `collinear`: reads a set of points from a file and prints every line
//!   segment containing four or more of them.
//! - `subset`: prints k uniformly random distinct tokens from its input.
//!
//! ## Modules
//! - `board`: the sliding-puzzle board representation (`Board`), tile
//!   placement, solvability, and neighbor generation.
//! - `heuristics`: Hamming and Manhattan distance estimators used to guide
//!   the puzzle search.
//! - `solver`: best-first search over board states (`solve`).
//! - `union_find`: weighted quick-union connectivity structure.
//! - `percolation`: the percolation grid and Monte Carlo threshold
//!   statistics built on `union_find`.
//! - `collinear`: points, slope ordering, and the brute-force and
//!   sort-based collinear segment finders.
//! - `deque`: a generic double-ended queue on a growable ring buffer.
//! - `randomized_queue`: a generic queue with uniformly random removal.
//! - `parse`: parsers for the board and point text formats.
//! - `logging`: tracing setup for the binaries.

pub mod board;
pub mod collinear;
pub mod deque;
pub mod heuristics;
pub mod logging;
pub mod parse;
pub mod percolation;
pub mod randomized_queue;
pub mod solver;
pub mod union_find;
