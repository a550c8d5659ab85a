//! 2D vector math based on [`glam`].
//!
//! Every point, displacement and tangent in the smoothline crates is a
//! [`Vec2`]. Addition, subtraction, scaling and length all come straight from
//! glam, so the curve code reads like the formulas it implements.
//!
//! # Examples
//!
//! ```
//! use smoothline_core::math::Vec2;
//!
//! let previous = Vec2::new(0.0, 0.0);
//! let current = Vec2::new(3.0, 4.0);
//! let displacement = current - previous;
//!
//! assert_eq!(displacement.length(), 5.0);
//! assert_eq!(displacement * 2.0, Vec2::new(6.0, 8.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};

/// Length of an open polyline.
///
/// Returns `0.0` for fewer than two points.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
