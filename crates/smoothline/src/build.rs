//! Polyline assembly from points and control pairs.
//!
//! For backends that can only draw line strips: each drawable segment is
//! sampled and the samples are concatenated into one point list.

use crate::control::ControlPair;
use crate::error::{CurveError, CurveResult};
use crate::sample::sample_cubic;
use smoothline_core::profiling::profile_function;
use smoothline_core::series::SeriesPoint;

use glam::Vec2;

/// Stitch consecutive points into one sampled polyline.
///
/// For every adjacent index pair `(i, i + 1)`:
/// - both points real and both control pairs present: the cubic
///   `(points[i], pairs[i].outgoing, pairs[i + 1].incoming, points[i + 1])` is
///   sampled with `samples_per_segment` points. The pair at `i == 0`
///   contributes all samples, later pairs drop their first sample since it
///   repeats the previous segment's last one.
/// - both points real but a control pair missing: a straight stub; `points[0]`
///   is emitted for the pair at `i == 0`, `points[i + 1]` always.
/// - either point a gap: nothing. No line is ever drawn across a gap, even
///   when the control pairs were computed through it.
///
/// `points` and `pairs` must have the same length; see [`try_build_path`] for
/// a checked variant.
pub fn build_path(
    points: &[SeriesPoint],
    pairs: &[Option<ControlPair>],
    samples_per_segment: usize,
) -> Vec<Vec2> {
    profile_function!();
    debug_assert_eq!(
        points.len(),
        pairs.len(),
        "build_path: point and control pair counts differ"
    );

    let len = points.len().min(pairs.len());
    let mut path = Vec::new();

    for i in 0..len.saturating_sub(1) {
        let (Some(start), Some(end)) = (points[i], points[i + 1]) else {
            continue;
        };
        let first = i == 0;

        match (pairs[i], pairs[i + 1]) {
            (Some(left), Some(right)) => {
                let samples =
                    sample_cubic(start, left.outgoing, right.incoming, end, samples_per_segment);
                let skip = if first { 0 } else { 1 };
                path.extend(samples.into_iter().skip(skip));
            }
            _ => {
                if first {
                    path.push(start);
                }
                path.push(end);
            }
        }
    }

    tracing::trace!(
        points = points.len(),
        samples_per_segment,
        output = path.len(),
        "built sampled path"
    );

    path
}

/// [`build_path`] with the length precondition checked.
pub fn try_build_path(
    points: &[SeriesPoint],
    pairs: &[Option<ControlPair>],
    samples_per_segment: usize,
) -> CurveResult<Vec<Vec2>> {
    if points.len() != pairs.len() {
        return Err(CurveError::LengthMismatch {
            points: points.len(),
            pairs: pairs.len(),
        });
    }
    Ok(build_path(points, pairs, samples_per_segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> SeriesPoint {
        Some(Vec2::new(x, y))
    }

    fn pairs_for(points: &[SeriesPoint]) -> Vec<Option<ControlPair>> {
        points.iter().map(|p| p.map(ControlPair::degenerate)).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(build_path(&[], &[], 8).is_empty());
    }

    #[test]
    fn test_single_point_has_no_segments() {
        let points = [pt(1.0, 1.0)];
        assert!(build_path(&points, &pairs_for(&points), 8).is_empty());
    }

    #[test]
    fn test_shared_vertices_are_not_duplicated() {
        let points = [pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 0.0)];
        let path = build_path(&points, &pairs_for(&points), 5);

        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Vec2::new(0.0, 0.0));
        assert_eq!(path[4], Vec2::new(1.0, 1.0));
        assert_eq!(path[8], Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_missing_pair_draws_stub() {
        let points = [pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 0.0)];
        let mut pairs = pairs_for(&points);
        pairs[2] = None;

        let path = build_path(&points, &pairs, 5);
        assert_eq!(path.len(), 6);
        assert_eq!(path[4], Vec2::new(1.0, 1.0));
        assert_eq!(path[5], Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_gap_breaks_path() {
        let points = [pt(0.0, 0.0), pt(1.0, 0.0), None, pt(3.0, 0.0), pt(4.0, 0.0)];
        let path = build_path(&points, &pairs_for(&points), 3);

        // First segment in full, then the second run without its start vertex.
        assert_eq!(
            path,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(0.5, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(3.5, 0.0),
                Vec2::new(4.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_try_build_path_length_mismatch() {
        let points = [pt(0.0, 0.0), pt(1.0, 1.0)];
        let pairs = [None];

        assert_eq!(
            try_build_path(&points, &pairs, 4),
            Err(CurveError::LengthMismatch {
                points: 2,
                pairs: 1
            })
        );
    }

    #[test]
    fn test_try_build_path_ok() {
        let points = [pt(0.0, 0.0), pt(1.0, 1.0)];
        let path = try_build_path(&points, &pairs_for(&points), 2).unwrap();

        assert_eq!(path, vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)]);
    }
}
