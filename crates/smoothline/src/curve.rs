//! Bezier curve primitives.
//!
//! Quadratic and cubic Bezier evaluation, derivatives, polyline arc length and
//! the inverse length-to-parameter search used for hit-testing and animation.
//!
//! All functions are direct polynomial evaluations: parameters outside
//! `[0, 1]` extrapolate the curve rather than being clamped.

use glam::Vec2;

/// Samples used by [`cubic_length`] and [`CubicBezier::arc_length`] callers
/// that have no better estimate.
pub const DEFAULT_LENGTH_SAMPLES: usize = 100;

/// Samples used for each partial-length estimate inside
/// [`parameter_at_length`].
pub const DEFAULT_PARTIAL_LENGTH_SAMPLES: usize = 50;

/// Bisection stops once the parameter interval is no wider than this.
pub const DEFAULT_PARAMETER_TOLERANCE: f32 = 0.001;

/// Point `t` of the way from `a` to `b`.
///
/// Exact at `t = 0`, at `t = 1` and whenever `a == b`.
#[inline]
fn mix(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    if t <= 0.5 {
        a + (b - a) * t
    } else {
        b - (b - a) * (1.0 - t)
    }
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2, evaluated by de Casteljau.
#[inline]
pub fn evaluate_quadratic(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    mix(mix(p0, p1, t), mix(p1, p2, t), t)
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3, evaluated by
/// de Casteljau.
#[inline]
pub fn evaluate_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let p01 = mix(p0, p1, t);
    let p12 = mix(p1, p2, t);
    let p23 = mix(p2, p3, t);

    mix(mix(p01, p12, t), mix(p12, p23, t), t)
}

/// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
///
/// Not normalized; see [`CubicBezier::tangent`] for a unit vector.
#[inline]
pub fn derivative_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    (p1 - p0) * (3.0 * mt * mt) + (p2 - p1) * (6.0 * mt * t) + (p3 - p2) * (3.0 * t * t)
}

/// Polyline length of the cubic from `t = 0` to `t = parameter`.
///
/// The curve is evaluated at `samples` evenly spaced parameters in
/// `(0, parameter]` plus the start point. The result never exceeds the true
/// arc length and converges to it as `samples` grows.
pub fn cubic_length_at(
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    parameter: f32,
    samples: usize,
) -> f32 {
    let mut length = 0.0;
    let mut prev = p0;

    for i in 1..=samples {
        let t = parameter * (i as f32 / samples as f32);
        let point = evaluate_cubic(p0, p1, p2, p3, t);
        length += prev.distance(point);
        prev = point;
    }

    length
}

/// Polyline length of the whole cubic, see [`cubic_length_at`].
pub fn cubic_length(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, samples: usize) -> f32 {
    cubic_length_at(p0, p1, p2, p3, 1.0, samples)
}

/// Parameter `t` at which the accumulated length reaches `target_length`.
///
/// Bisects `[0, 1]` until the interval is no wider than `tolerance` and
/// returns the last midpoint. Targets beyond the curve's length converge
/// towards `1.0`, non-positive targets towards `0.0`.
pub fn parameter_at_length(
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    target_length: f32,
    tolerance: f32,
) -> f32 {
    let mut low = 0.0_f32;
    let mut high = 1.0_f32;
    let mut mid = 0.5 * (low + high);

    while high - low > tolerance {
        mid = 0.5 * (low + high);
        // Interval can no longer shrink in f32.
        if mid <= low || mid >= high {
            break;
        }

        let length = cubic_length_at(p0, p1, p2, p3, mid, DEFAULT_PARTIAL_LENGTH_SAMPLES);
        if length < target_length {
            low = mid;
        } else {
            high = mid;
        }
    }

    mid
}

/// A cubic Bezier segment: start, two control points, end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point
    pub from: Vec2,
    /// First control point
    pub control1: Vec2,
    /// Second control point
    pub control2: Vec2,
    /// End point
    pub to: Vec2,
}

impl CubicBezier {
    /// Create a new cubic Bezier curve.
    pub fn new(from: Vec2, control1: Vec2, control2: Vec2, to: Vec2) -> Self {
        Self {
            from,
            control1,
            control2,
            to,
        }
    }

    /// A straight segment whose control points sit on the chord.
    pub fn line(from: Vec2, to: Vec2) -> Self {
        Self::new(from, from.lerp(to, 1.0 / 3.0), from.lerp(to, 2.0 / 3.0), to)
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0).
    pub fn eval(&self, t: f32) -> Vec2 {
        evaluate_cubic(self.from, self.control1, self.control2, self.to, t)
    }

    /// Get the derivative at parameter t.
    pub fn derivative(&self, t: f32) -> Vec2 {
        derivative_cubic(self.from, self.control1, self.control2, self.to, t)
    }

    /// Get the tangent (normalized derivative) at parameter t.
    ///
    /// Zero where the derivative vanishes, e.g. at a coincident control point.
    pub fn tangent(&self, t: f32) -> Vec2 {
        self.derivative(t).normalize_or_zero()
    }

    /// Get the normal (perpendicular to tangent) at parameter t.
    pub fn normal(&self, t: f32) -> Vec2 {
        self.tangent(t).perp()
    }

    /// Split the curve at parameter t, returning two curves.
    pub fn split(&self, t: f32) -> (Self, Self) {
        let p01 = mix(self.from, self.control1, t);
        let p12 = mix(self.control1, self.control2, t);
        let p23 = mix(self.control2, self.to, t);
        let p012 = mix(p01, p12, t);
        let p123 = mix(p12, p23, t);
        let p0123 = mix(p012, p123, t);

        (
            Self::new(self.from, p01, p012, p0123),
            Self::new(p0123, p123, p23, self.to),
        )
    }

    /// Approximate the arc length of the curve.
    pub fn arc_length(&self, subdivisions: usize) -> f32 {
        cubic_length(self.from, self.control1, self.control2, self.to, subdivisions)
    }

    /// Approximate the arc length from the start up to parameter t.
    pub fn arc_length_to(&self, t: f32, subdivisions: usize) -> f32 {
        cubic_length_at(
            self.from,
            self.control1,
            self.control2,
            self.to,
            t,
            subdivisions,
        )
    }

    /// Parameter at which the arc length from the start equals `length`.
    pub fn parameter_at_length(&self, length: f32, tolerance: f32) -> f32 {
        parameter_at_length(
            self.from,
            self.control1,
            self.control2,
            self.to,
            length,
            tolerance,
        )
    }

    /// Point reached after travelling `length` along the curve.
    pub fn point_at_length(&self, length: f32) -> Vec2 {
        self.eval(self.parameter_at_length(length, DEFAULT_PARAMETER_TOLERANCE))
    }
}
