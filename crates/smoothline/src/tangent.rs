//! Tangent strategies for smoothed series.
//!
//! Both strategies take the displacement from the previous point
//! (`current - previous`), the displacement to the next point
//! (`next - current`) and the smoothing factor, and return the offset from
//! the current point to its outgoing control point. The incoming control
//! point sits at the negated offset.

use glam::Vec2;

/// How tangents are derived from neighbouring points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveMode {
    /// The series is a single-valued function of x (e.g. values over time).
    /// Control points never leave the x-interval between neighbours.
    #[default]
    Function,
    /// The series is a free trajectory with no ordering along either axis.
    Phase,
}

impl CurveMode {
    /// Tangent offset for a point given its neighbour displacements.
    #[inline]
    pub fn tangent(self, from_previous: Vec2, to_next: Vec2, smoothing: f32) -> Vec2 {
        match self {
            CurveMode::Function => function_tangent(from_previous, to_next, smoothing),
            CurveMode::Phase => phase_tangent(from_previous, to_next, smoothing),
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            CurveMode::Function => "function",
            CurveMode::Phase => "phase",
        }
    }
}

/// Function-graph tangent: the average of the two secant slopes.
///
/// The horizontal extent is a third of the shorter neighbour gap scaled by
/// `smoothing`. A neighbour directly above or below the point (zero x
/// displacement) turns the tangent vertical, with the other neighbour's y
/// displacement as the limiting length; if both are vertical the tangent is
/// zero.
pub fn function_tangent(from_previous: Vec2, to_next: Vec2, smoothing: f32) -> Vec2 {
    match (from_previous.x == 0.0, to_next.x == 0.0) {
        (true, true) => Vec2::ZERO,
        (true, false) => Vec2::new(0.0, to_next.y * smoothing / 6.0),
        (false, true) => Vec2::new(0.0, from_previous.y * smoothing / 6.0),
        (false, false) => {
            let dx = smoothing / 3.0 * from_previous.x.abs().min(to_next.x.abs());
            let slope = (from_previous.y / from_previous.x + to_next.y / to_next.x) / 2.0;
            if from_previous.x > 0.0 {
                Vec2::new(dx, dx * slope)
            } else {
                Vec2::new(-dx, -dx * slope)
            }
        }
    }
}

/// Trajectory tangent along the bisector of the two displacements.
///
/// Each displacement is weighted by the square root of the ratio of the two
/// lengths, so the longer side pulls the tangent harder. Zero if either
/// displacement has zero length.
pub fn phase_tangent(from_previous: Vec2, to_next: Vec2, smoothing: f32) -> Vec2 {
    let previous_length = from_previous.length();
    let next_length = to_next.length();
    if previous_length == 0.0 || next_length == 0.0 {
        return Vec2::ZERO;
    }

    let ratio = (previous_length / next_length).sqrt();
    (from_previous * (1.0 / ratio) + to_next * ratio) * (smoothing / 6.0)
}
