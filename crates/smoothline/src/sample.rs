//! Even-parameter sampling of cubic segments.

use crate::curve::{CubicBezier, evaluate_cubic};
use glam::Vec2;

/// Evaluate a cubic at `count` evenly spaced parameters `i / (count - 1)`.
///
/// `count == 0` yields no points and `count == 1` yields just `p0`. For
/// `count >= 2` the first and last samples are exactly `p0` and `p3`.
pub fn sample_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, count: usize) -> Vec<Vec2> {
    match count {
        0 => Vec::new(),
        1 => vec![p0],
        _ => {
            let last = (count - 1) as f32;
            (0..count)
                .map(|i| evaluate_cubic(p0, p1, p2, p3, i as f32 / last))
                .collect()
        }
    }
}

impl CubicBezier {
    /// Sample the curve at `count` evenly spaced parameters.
    pub fn sample(&self, count: usize) -> Vec<Vec2> {
        sample_cubic(self.from, self.control1, self.control2, self.to, count)
    }
}
