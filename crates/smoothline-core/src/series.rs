//! Gap-aware data series.
//!
//! A chart series is a slice of `Option<Vec2>`: `None` marks a missing sample
//! (a *gap*) at that index. Nothing in this module treats a coordinate value
//! as a sentinel for missing data.

use crate::math::Vec2;
use std::ops::Range;

/// One entry of a series: a projected point or a gap.
pub type SeriesPoint = Option<Vec2>;

/// Search direction along a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards lower indices.
    Backward,
    /// Towards higher indices.
    Forward,
}

/// Index `distance` steps away from `start`, or `None` when it falls off an
/// open series.
///
/// For circular series the index wraps modulo `len`.
#[inline]
fn offset_index(
    len: usize,
    start: usize,
    distance: usize,
    direction: Direction,
    circular: bool,
) -> Option<usize> {
    if circular {
        let distance = distance % len;
        Some(match direction {
            Direction::Forward => (start + distance) % len,
            Direction::Backward => (start + len - distance) % len,
        })
    } else {
        match direction {
            Direction::Forward => start.checked_add(distance).filter(|&i| i < len),
            Direction::Backward => start.checked_sub(distance),
        }
    }
}

/// The index immediately next to `start`, gap or not.
///
/// On a circular series the neighbour of the first/last entry wraps around;
/// on an open series `None` is returned past either end.
pub fn adjacent_index(
    len: usize,
    start: usize,
    direction: Direction,
    circular: bool,
) -> Option<usize> {
    if start >= len {
        return None;
    }
    offset_index(len, start, 1, direction, circular)
}

/// Find the nearest non-gap entry from `start` in `direction`.
///
/// `start` itself is never returned. The walk is bounded by `len - 1` steps,
/// so on a circular series it visits every other entry exactly once and on an
/// open one it stops at the boundary.
///
/// # Example
///
/// ```
/// use smoothline_core::math::Vec2;
/// use smoothline_core::series::{Direction, find_neighbor};
///
/// let series = [Some(Vec2::ZERO), None, Some(Vec2::ONE)];
/// assert_eq!(find_neighbor(&series, 0, Direction::Forward, false), Some(2));
/// assert_eq!(find_neighbor(&series, 0, Direction::Backward, false), None);
/// assert_eq!(find_neighbor(&series, 0, Direction::Backward, true), Some(2));
/// ```
pub fn find_neighbor<T>(
    points: &[Option<T>],
    start: usize,
    direction: Direction,
    circular: bool,
) -> Option<usize> {
    let len = points.len();
    if start >= len {
        return None;
    }

    for distance in 1..len {
        let index = offset_index(len, start, distance, direction, circular)?;
        if points[index].is_some() {
            return Some(index);
        }
    }

    None
}

/// Number of gaps in a series.
pub fn gap_count<T>(points: &[Option<T>]) -> usize {
    points.iter().filter(|p| p.is_none()).count()
}

/// Maximal index ranges of consecutive non-gap entries.
///
/// ```
/// use smoothline_core::math::Vec2;
/// use smoothline_core::series::contiguous_runs;
///
/// let series = [Some(Vec2::ZERO), Some(Vec2::ONE), None, Some(Vec2::X)];
/// let runs: Vec<_> = contiguous_runs(&series).collect();
/// assert_eq!(runs, vec![0..2, 3..4]);
/// ```
pub fn contiguous_runs<T>(points: &[Option<T>]) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut cursor = 0;
    std::iter::from_fn(move || {
        while cursor < points.len() && points[cursor].is_none() {
            cursor += 1;
        }
        if cursor >= points.len() {
            return None;
        }
        let start = cursor;
        while cursor < points.len() && points[cursor].is_some() {
            cursor += 1;
        }
        Some(start..cursor)
    })
}

/// Wrap a gap-free slice of points as a series.
pub fn from_points(points: &[Vec2]) -> Vec<SeriesPoint> {
    points.iter().copied().map(Some).collect()
}
