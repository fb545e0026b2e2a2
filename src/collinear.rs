//! Collinear point detection in the plane.
//!
//! Given a set of distinct points, find every line segment that contains at
//! least four of them. Two finders are provided:
//! - `brute_segments` checks all 4-combinations. Quartic, but obviously
//!   correct, which makes it the oracle the fast finder is tested against.
//! - `fast_segments` sorts the points around each origin by slope; any run
//!   of three or more equal slopes is collinear with the origin. Emitting a
//!   run only from its least point reports each maximal segment once.

use std::cmp::Ordering;
use std::fmt;

/// A point in the plane with integer coordinates.
///
/// Ordering is by y-coordinate, ties broken by x, matching the sweep order
/// the segment finders rely on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Slope from this point toward `that`.
    ///
    /// Horizontal slopes are exactly `0.0`, vertical slopes are
    /// `f64::INFINITY`, and the degenerate slope of a point toward itself is
    /// `f64::NEG_INFINITY`, which sorts ahead of every real slope.
    ///
    /// # Examples
    /// ```
    /// use algolab::collinear::Point;
    ///
    /// let p = Point::new(1, 1);
    /// assert_eq!(p.slope_to(&Point::new(3, 5)), 2.0);
    /// assert_eq!(p.slope_to(&Point::new(4, 1)), 0.0);
    /// assert_eq!(p.slope_to(&Point::new(1, 7)), f64::INFINITY);
    /// assert_eq!(p.slope_to(&Point::new(1, 1)), f64::NEG_INFINITY);
    /// ```
    pub fn slope_to(&self, that: &Point) -> f64 {
        let dx = that.x - self.x;
        let dy = that.y - self.y;
        if dx == 0 && dy == 0 {
            f64::NEG_INFINITY
        } else if dx == 0 {
            f64::INFINITY
        } else if dy == 0 {
            0.0
        } else {
            f64::from(dy) / f64::from(dx)
        }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A line segment between two points, stored least endpoint first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineSegment {
    pub p: Point,
    pub q: Point,
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p, self.q)
    }
}

/// Finds 4-point collinear segments by exhausting all ascending
/// 4-combinations.
///
/// Each combination whose three slopes from the least point agree produces
/// the segment between its least and greatest point. Five or more collinear
/// points therefore show up as several overlapping 4-point segments; the
/// fast finder collapses those into one. Input points must be distinct.
pub fn brute_segments(points: &[Point]) -> Vec<LineSegment> {
    let mut sorted = points.to_vec();
    sorted.sort_unstable();

    let mut segments = Vec::new();
    let count = sorted.len();
    for i in 0..count {
        for j in i + 1..count {
            let slope_ij = sorted[i].slope_to(&sorted[j]);
            for k in j + 1..count {
                if sorted[i].slope_to(&sorted[k]) != slope_ij {
                    continue;
                }
                for l in k + 1..count {
                    if sorted[i].slope_to(&sorted[l]) == slope_ij {
                        segments.push(LineSegment {
                            p: sorted[i],
                            q: sorted[l],
                        });
                    }
                }
            }
        }
    }
    segments
}

/// Finds every maximal segment of 4 or more collinear points.
///
/// For each origin the remaining points are sorted by the slope the origin
/// makes with them; equal slopes are collinear with the origin, so any run
/// of length 3 or more forms a segment. A run is recorded only when the
/// origin is the least point on the segment, which reports each maximal
/// segment exactly once. O(n^2 log n). Input points must be distinct.
///
/// # Examples
/// ```
/// use algolab::collinear::{fast_segments, Point};
///
/// let points: Vec<Point> = (0..5).map(|i| Point::new(i, 2 * i)).collect();
/// let segments = fast_segments(&points);
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].p, Point::new(0, 0));
/// assert_eq!(segments[0].q, Point::new(4, 8));
/// ```
pub fn fast_segments(points: &[Point]) -> Vec<LineSegment> {
    let mut segments = Vec::new();

    for (index, origin) in points.iter().enumerate() {
        let mut others: Vec<Point> = points
            .iter()
            .enumerate()
            .filter(|&(other_index, _)| other_index != index)
            .map(|(_, &point)| point)
            .collect();
        others.sort_by(|a, b| origin.slope_to(a).total_cmp(&origin.slope_to(b)));

        let mut start = 0;
        while start < others.len() {
            let slope = origin.slope_to(&others[start]);
            let mut end = start + 1;
            while end < others.len() && origin.slope_to(&others[end]) == slope {
                end += 1;
            }
            if end - start >= 3 {
                let run = &others[start..end];
                // Safe to unwrap: the run holds at least three points.
                let least = run.iter().min().unwrap();
                let greatest = run.iter().max().unwrap();
                if origin < least {
                    segments.push(LineSegment {
                        p: *origin,
                        q: *greatest,
                    });
                }
            }
            start = end;
        }
    }
    segments
}
