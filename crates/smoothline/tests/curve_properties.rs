//! Behavioural tests for the curve-fitting pipeline.
//!
//! ## Test Organization
//!
//! 1. **Bezier evaluation** - endpoints, midpoint, derivatives, sampling
//! 2. **Arc length** - degenerate and straight curves, inverse search
//! 3. **Control pairs** - single points, gaps, tangent limit cases
//! 4. **Sampled paths** - straight fallbacks and gap handling

use approx::assert_abs_diff_eq;
use glam::Vec2;
use smoothline::*;

fn cases() -> Vec<[Vec2; 4]> {
    vec![
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 3.0),
            Vec2::new(4.0, -2.0),
            Vec2::new(5.0, 1.0),
        ],
        [
            Vec2::new(-10.0, 4.0),
            Vec2::new(-10.0, 4.0),
            Vec2::new(7.5, 7.5),
            Vec2::new(2.0, -3.0),
        ],
        [
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(200.0, 0.0),
            Vec2::new(100.0, 100.0),
        ],
    ]
}

// ============================================================================
// Bezier Evaluation
// ============================================================================

#[test]
fn test_cubic_hits_endpoints() {
    for [p0, p1, p2, p3] in cases() {
        assert_eq!(evaluate_cubic(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(evaluate_cubic(p0, p1, p2, p3, 1.0), p3);
    }
}

#[test]
fn test_collinear_midpoint() {
    let p0 = Vec2::new(0.0, 0.0);
    let p1 = Vec2::new(1.0, 2.0);
    let p2 = Vec2::new(2.0, 4.0);
    let p3 = Vec2::new(3.0, 6.0);

    assert_abs_diff_eq!(
        evaluate_cubic(p0, p1, p2, p3, 0.5),
        (p0 + p3) * 0.5,
        epsilon = 1e-6
    );
}

#[test]
fn test_quadratic_hits_endpoints() {
    let p0 = Vec2::new(1.0, 1.0);
    let p1 = Vec2::new(3.0, 9.0);
    let p2 = Vec2::new(5.0, 1.0);

    assert_eq!(evaluate_quadratic(p0, p1, p2, 0.0), p0);
    assert_eq!(evaluate_quadratic(p0, p1, p2, 1.0), p2);
}

#[test]
fn test_derivative_at_endpoints() {
    for [p0, p1, p2, p3] in cases() {
        assert_abs_diff_eq!(
            derivative_cubic(p0, p1, p2, p3, 0.0),
            (p1 - p0) * 3.0,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            derivative_cubic(p0, p1, p2, p3, 1.0),
            (p3 - p2) * 3.0,
            epsilon = 1e-4
        );
    }
}

#[test]
fn test_sampling_counts_and_endpoints() {
    for [p0, p1, p2, p3] in cases() {
        assert!(sample_cubic(p0, p1, p2, p3, 0).is_empty());
        assert_eq!(sample_cubic(p0, p1, p2, p3, 1), vec![p0]);

        for n in [2, 5, 33] {
            let samples = sample_cubic(p0, p1, p2, p3, n);
            assert_eq!(samples.len(), n);
            assert_eq!(samples[0], p0);
            assert_eq!(samples[n - 1], p3);
        }
    }
}

// ============================================================================
// Arc Length
// ============================================================================

#[test]
fn test_coincident_points_have_zero_length() {
    let p = Vec2::new(12.5, -3.0);

    assert_abs_diff_eq!(cubic_length(p, p, p, p, DEFAULT_LENGTH_SAMPLES), 0.0);
    assert_abs_diff_eq!(
        parameter_at_length(p, p, p, p, 0.0, DEFAULT_PARAMETER_TOLERANCE),
        0.0,
        epsilon = 0.01
    );
}

/// Evenly spaced collinear control points trace a unit-speed line.
#[test]
fn test_straight_curve_length() {
    let length = cubic_length(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(3.0, 0.0),
        DEFAULT_LENGTH_SAMPLES,
    );

    assert_abs_diff_eq!(length, 3.0, epsilon = 1e-4);
}

#[test]
fn test_parameter_at_length_bounds() {
    for [p0, p1, p2, p3] in cases() {
        let total = cubic_length(p0, p1, p2, p3, DEFAULT_LENGTH_SAMPLES);

        let start = parameter_at_length(p0, p1, p2, p3, 0.0, DEFAULT_PARAMETER_TOLERANCE);
        let end = parameter_at_length(p0, p1, p2, p3, total, DEFAULT_PARAMETER_TOLERANCE);

        assert_abs_diff_eq!(start, 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(end, 1.0, epsilon = 0.01);
    }
}

#[test]
fn test_parameter_at_length_is_monotonic() {
    let [p0, p1, p2, p3] = cases()[0];
    let total = cubic_length(p0, p1, p2, p3, DEFAULT_LENGTH_SAMPLES);

    let mut prev = 0.0;
    for i in 1..=8 {
        let t = parameter_at_length(
            p0,
            p1,
            p2,
            p3,
            total * i as f32 / 8.0,
            DEFAULT_PARAMETER_TOLERANCE,
        );
        assert!(t >= prev, "parameter decreased at step {}", i);
        prev = t;
    }
}

// ============================================================================
// Control Pairs
// ============================================================================

#[test]
fn test_single_point_pair_is_the_point() {
    let p = Vec2::new(3.0, 4.0);
    for mode in [CurveMode::Function, CurveMode::Phase] {
        let config = SmoothingConfig::new().with_mode(mode);
        let pairs = synthesize_control_points(&[Some(p)], &config);

        assert_eq!(pairs, vec![Some(ControlPair::new(p, p))]);
    }
}

#[test]
fn test_all_gaps_yield_no_pairs() {
    let points: Vec<SeriesPoint> = vec![None; 4];
    let config = SmoothingConfig::new().interpolate_gaps(true).closed(true);

    assert!(
        synthesize_control_points(&points, &config)
            .iter()
            .all(Option::is_none)
    );
}

#[test]
fn test_gap_interpolation_sees_through_gaps() {
    let points = vec![
        Some(Vec2::new(0.0, 0.0)),
        None,
        Some(Vec2::new(2.0, 2.0)),
        None,
        None,
        Some(Vec2::new(5.0, 0.0)),
        Some(Vec2::new(6.0, 1.0)),
    ];
    let config = SmoothingConfig::new().interpolate_gaps(true);
    let pairs = synthesize_control_points(&points, &config);

    assert_eq!(pairs.len(), points.len());
    for (point, pair) in points.iter().zip(&pairs) {
        assert_eq!(point.is_none(), pair.is_none());
    }

    // Interior real points resolve neighbours across the gaps.
    assert!(!pairs[2].unwrap().is_degenerate());
    assert!(!pairs[5].unwrap().is_degenerate());
    // Open ends have no outer neighbour.
    assert!(pairs[0].unwrap().is_degenerate());
    assert!(pairs[6].unwrap().is_degenerate());
}

#[test]
fn test_tangent_limit_cases() {
    assert_eq!(
        function_tangent(Vec2::new(0.0, 4.0), Vec2::new(0.0, -1.0), 1.0),
        Vec2::ZERO
    );
    assert_eq!(
        phase_tangent(Vec2::ZERO, Vec2::new(3.0, 1.0), 1.0),
        Vec2::ZERO
    );
    assert_eq!(
        phase_tangent(Vec2::new(3.0, 1.0), Vec2::ZERO, 1.0),
        Vec2::ZERO
    );
}

/// Collinear points keep a straight curve.
#[test]
fn test_collinear_series_keeps_unit_slope() {
    let points: Vec<SeriesPoint> = (0..4).map(|i| Some(Vec2::splat(i as f32))).collect();
    let pairs = synthesize_control_points(&points, &SmoothingConfig::default());

    for i in 1..3 {
        let point = points[i].unwrap();
        let pair = pairs[i].unwrap();

        let incoming = point - pair.incoming;
        let outgoing = pair.outgoing - point;
        assert_eq!(incoming.y / incoming.x, 1.0);
        assert_eq!(outgoing.y / outgoing.x, 1.0);
    }
}

// ============================================================================
// Sampled Paths
// ============================================================================

/// Without control pairs two points become a bare line.
#[test]
fn test_missing_pairs_fall_back_to_line() {
    let points = [Some(Vec2::new(0.0, 0.0)), Some(Vec2::new(1.0, 1.0))];
    let path = build_path(&points, &[None, None], 20);

    assert_eq!(path, vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)]);
}

/// Every adjacent pair touches the gap, so nothing is drawn.
#[test]
fn test_gap_between_two_points_draws_nothing() {
    let points = [Some(Vec2::new(0.0, 0.0)), None, Some(Vec2::new(2.0, 0.0))];

    let config = SmoothingConfig::default().interpolate_gaps(true);
    let fitted = synthesize_control_points(&points, &config);
    assert!(build_path(&points, &fitted, 10).is_empty());

    let made_up = [
        Some(ControlPair::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 1.0))),
        None,
        Some(ControlPair::new(Vec2::new(1.0, -1.0), Vec2::new(3.0, 0.0))),
    ];
    assert!(build_path(&points, &made_up, 10).is_empty());
}

#[test]
fn test_sampled_path_passes_through_points() {
    let raw = [
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 3.0),
        Vec2::new(2.0, 2.0),
        Vec2::new(3.0, 5.0),
    ];
    let points: Vec<SeriesPoint> = raw.iter().copied().map(Some).collect();
    let pairs = synthesize_control_points(&points, &SmoothingConfig::default());
    let path = build_path(&points, &pairs, 9);

    assert_eq!(path.len(), 9 + 8 + 8);
    for (i, point) in raw.iter().enumerate() {
        assert_eq!(path[i * 8], *point);
    }
}
