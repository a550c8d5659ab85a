//! Per-point control pairs for a smoothed series.
//!
//! Every real point gets an incoming and an outgoing control point placed
//! symmetrically around it along the tangent chosen by the configured
//! [`CurveMode`](crate::CurveMode). Gaps get no pair.

use crate::config::SmoothingConfig;
use smoothline_core::profiling::profile_function;
use smoothline_core::series::{Direction, SeriesPoint, adjacent_index, find_neighbor, gap_count};

use glam::Vec2;

/// Control points on either side of one series point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPair {
    /// Control point of the segment arriving at the point.
    pub incoming: Vec2,
    /// Control point of the segment leaving the point.
    pub outgoing: Vec2,
}

impl ControlPair {
    /// Create a new control pair.
    pub fn new(incoming: Vec2, outgoing: Vec2) -> Self {
        Self { incoming, outgoing }
    }

    /// Pair for `point` offset by `tangent` in each direction.
    pub fn from_tangent(point: Vec2, tangent: Vec2) -> Self {
        Self::new(point - tangent, point + tangent)
    }

    /// Both control points on the point itself; segments touching it leave
    /// or arrive straight.
    pub fn degenerate(point: Vec2) -> Self {
        Self::new(point, point)
    }

    /// Whether both control points coincide.
    pub fn is_degenerate(&self) -> bool {
        self.incoming == self.outgoing
    }
}

/// Indices of the previous and next neighbour of `index`, per the config.
fn neighbor_indices(
    points: &[SeriesPoint],
    index: usize,
    config: &SmoothingConfig,
) -> (Option<usize>, Option<usize>) {
    if config.interpolate_gaps {
        (
            find_neighbor(points, index, Direction::Backward, config.closed),
            find_neighbor(points, index, Direction::Forward, config.closed),
        )
    } else {
        let len = points.len();
        (
            adjacent_index(len, index, Direction::Backward, config.closed),
            adjacent_index(len, index, Direction::Forward, config.closed),
        )
    }
}

/// Control pair for a single index, or `None` if the point is a gap.
///
/// Points without a real neighbour on both sides (ends of an open series,
/// points next to a gap without gap interpolation) get a
/// [degenerate](ControlPair::degenerate) pair.
pub fn control_pair_at(
    points: &[SeriesPoint],
    index: usize,
    config: &SmoothingConfig,
) -> Option<ControlPair> {
    let point = points.get(index).copied().flatten()?;
    let (previous, next) = neighbor_indices(points, index, config);

    let previous = previous.and_then(|i| points[i]);
    let next = next.and_then(|i| points[i]);

    Some(match (previous, next) {
        (Some(previous), Some(next)) => {
            let tangent = config
                .mode
                .tangent(point - previous, next - point, config.smoothing);
            ControlPair::from_tangent(point, tangent)
        }
        _ => ControlPair::degenerate(point),
    })
}

/// Compute control pairs for every entry of a series.
///
/// The result has the same length as `points`, and entry `i` is `None`
/// exactly when `points[i]` is a gap.
///
/// # Example
///
/// ```
/// use smoothline::{SmoothingConfig, synthesize_control_points};
/// use glam::Vec2;
///
/// let points = [Some(Vec2::new(0.0, 0.0)), None, Some(Vec2::new(2.0, 1.0))];
/// let pairs = synthesize_control_points(&points, &SmoothingConfig::default());
///
/// assert_eq!(pairs.len(), 3);
/// assert!(pairs[1].is_none());
/// ```
pub fn synthesize_control_points(
    points: &[SeriesPoint],
    config: &SmoothingConfig,
) -> Vec<Option<ControlPair>> {
    profile_function!();

    let pairs: Vec<_> = (0..points.len())
        .map(|index| control_pair_at(points, index, config))
        .collect();

    tracing::trace!(
        points = points.len(),
        gaps = gap_count(points),
        mode = config.mode.name(),
        closed = config.closed,
        interpolate_gaps = config.interpolate_gaps,
        "synthesized control pairs"
    );

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveMode;
    use approx::assert_abs_diff_eq;

    fn series(points: &[(f32, f32)]) -> Vec<SeriesPoint> {
        points.iter().map(|&(x, y)| Some(Vec2::new(x, y))).collect()
    }

    #[test]
    fn test_empty_series() {
        let pairs = synthesize_control_points(&[], &SmoothingConfig::default());
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_open_endpoints_are_degenerate() {
        let points = series(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)]);
        let pairs = synthesize_control_points(&points, &SmoothingConfig::default());

        assert_eq!(pairs[0], Some(ControlPair::degenerate(Vec2::new(0.0, 0.0))));
        assert_eq!(pairs[2], Some(ControlPair::degenerate(Vec2::new(2.0, 0.0))));
        assert!(!pairs[1].unwrap().is_degenerate());
    }

    #[test]
    fn test_peak_gets_horizontal_tangent() {
        let points = series(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)]);
        let pair = synthesize_control_points(&points, &SmoothingConfig::default())[1].unwrap();

        assert_abs_diff_eq!(pair.incoming, Vec2::new(2.0 / 3.0, 2.0), epsilon = 1e-6);
        assert_abs_diff_eq!(pair.outgoing, Vec2::new(4.0 / 3.0, 2.0), epsilon = 1e-6);
    }

    #[test]
    fn test_closed_series_wraps_ends() {
        let points = series(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]);
        let config = SmoothingConfig::new().with_mode(CurveMode::Phase).closed(true);
        let pairs = synthesize_control_points(&points, &config);

        assert!(pairs.iter().all(|p| !p.unwrap().is_degenerate()));
    }

    #[test]
    fn test_gap_neighbor_without_interpolation() {
        let points = vec![
            Some(Vec2::new(0.0, 0.0)),
            Some(Vec2::new(1.0, 1.0)),
            None,
            Some(Vec2::new(3.0, 0.0)),
            Some(Vec2::new(4.0, 1.0)),
        ];
        let pairs = synthesize_control_points(&points, &SmoothingConfig::default());

        assert_eq!(pairs[1], Some(ControlPair::degenerate(Vec2::new(1.0, 1.0))));
        assert_eq!(pairs[2], None);
        assert_eq!(pairs[3], Some(ControlPair::degenerate(Vec2::new(3.0, 0.0))));
    }

    #[test]
    fn test_zero_smoothing_collapses_pairs() {
        let points = series(&[(0.0, 0.0), (1.0, 3.0), (2.0, 1.0), (3.0, 4.0)]);
        let config = SmoothingConfig::new().with_smoothing(0.0);

        for pair in synthesize_control_points(&points, &config).into_iter().flatten() {
            assert!(pair.is_degenerate());
        }
    }

    #[test]
    fn test_control_pair_at_out_of_bounds() {
        let points = series(&[(0.0, 0.0)]);
        assert_eq!(control_pair_at(&points, 3, &SmoothingConfig::default()), None);
    }
}
