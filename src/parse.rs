//! Parsers for the whitespace-separated text formats the binaries read.
//!
//! Both formats start with a count header followed by integer tokens, so
//! the two parsers share one tokenizer. Line structure carries no meaning;
//! `"3 1 2 3 4 5 6 7 8 0"` and the same tokens spread over four lines parse
//! to the same board.

use std::str::FromStr;
use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::collinear::Point;

/// Errors raised while parsing board or point input text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input held no tokens at all.
    #[error("input is empty")]
    Empty,
    /// A token could not be read as an integer of the expected kind.
    #[error("token {index}: expected an integer, found {token:?}")]
    BadToken { index: usize, token: String },
    /// The header promised a different number of values than were present.
    #[error("expected {expected} values after the header, found {actual}")]
    WrongCount { expected: usize, actual: usize },
    /// The tokens parsed but did not form a valid board.
    #[error(transparent)]
    Board(#[from] BoardError),
}

fn parse_token<T: FromStr>(token: &str, index: usize) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::BadToken {
        index,
        token: token.to_string(),
    })
}

/// Parses a sliding-puzzle board.
///
/// The first token is the grid dimension `n`, followed by `n * n` tile
/// values row-major, with `0` marking the blank.
///
/// # Examples
/// ```
/// use algolab::parse::board_from_str;
///
/// let board = board_from_str("3\n1 2 3\n4 5 6\n7 8 0\n").unwrap();
/// assert!(board.is_goal());
/// ```
pub fn board_from_str(input: &str) -> Result<Board, ParseError> {
    let mut tokens = input.split_whitespace().enumerate();
    let (_, header) = tokens.next().ok_or(ParseError::Empty)?;
    let n: usize = parse_token(header, 0)?;
    let tiles = tokens
        .map(|(index, token)| parse_token::<u32>(token, index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Board::from_tiles(n, tiles)?)
}

/// Parses a point set.
///
/// The first token is the number of points, followed by that many `x y`
/// coordinate pairs.
///
/// # Examples
/// ```
/// use algolab::collinear::Point;
/// use algolab::parse::points_from_str;
///
/// let points = points_from_str("2\n0 0\n-3 5\n").unwrap();
/// assert_eq!(points, vec![Point::new(0, 0), Point::new(-3, 5)]);
/// ```
pub fn points_from_str(input: &str) -> Result<Vec<Point>, ParseError> {
    let mut tokens = input.split_whitespace().enumerate();
    let (_, header) = tokens.next().ok_or(ParseError::Empty)?;
    let count: usize = parse_token(header, 0)?;
    let coordinates = tokens
        .map(|(index, token)| parse_token::<i32>(token, index))
        .collect::<Result<Vec<_>, _>>()?;
    let expected = count.saturating_mul(2);
    if coordinates.len() != expected {
        return Err(ParseError::WrongCount {
            expected,
            actual: coordinates.len(),
        });
    }
    Ok(coordinates
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}
