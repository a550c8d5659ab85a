//! Fitted series.
//!
//! [`SmoothCurve`] fits control pairs once and hands out whichever output a
//! drawing backend wants: a sampled polyline, a vector path, an area outline,
//! or the individual cubic segments for hit-testing.

use crate::build::build_path;
use crate::config::SmoothingConfig;
use crate::control::{ControlPair, synthesize_control_points};
use crate::curve::CubicBezier;
use crate::path::{Path, PathBuilder};
use smoothline_core::profiling::{profile_function, profile_scope};
use smoothline_core::series::{SeriesPoint, contiguous_runs, from_points};

use glam::Vec2;
use std::ops::Range;

/// A series together with its fitted control pairs.
///
/// # Example
///
/// ```
/// use smoothline::{SmoothCurve, SmoothingConfig};
/// use glam::Vec2;
///
/// let curve = SmoothCurve::fit_points(
///     &[Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(2.0, 1.0)],
///     SmoothingConfig::default(),
/// );
///
/// let polyline = curve.sampled(16);
/// assert_eq!(polyline.first(), Some(&Vec2::new(0.0, 0.0)));
/// assert_eq!(polyline.last(), Some(&Vec2::new(2.0, 1.0)));
/// assert_eq!(curve.to_path().subpath_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothCurve {
    points: Vec<SeriesPoint>,
    pairs: Vec<Option<ControlPair>>,
    config: SmoothingConfig,
}

impl SmoothCurve {
    /// Fit control pairs for a possibly gapped series.
    pub fn fit(points: &[SeriesPoint], config: SmoothingConfig) -> Self {
        profile_function!();
        config.check();

        let pairs = synthesize_control_points(points, &config);
        tracing::debug!(
            points = points.len(),
            pairs = pairs.iter().flatten().count(),
            mode = config.mode.name(),
            "fitted smooth curve"
        );

        Self {
            points: points.to_vec(),
            pairs,
            config,
        }
    }

    /// Fit control pairs for a gap-free series.
    pub fn fit_points(points: &[Vec2], config: SmoothingConfig) -> Self {
        Self::fit(&from_points(points), config)
    }

    /// The series this curve was fitted to.
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// One control pair per series entry, `None` at gaps.
    pub fn control_pairs(&self) -> &[Option<ControlPair>] {
        &self.pairs
    }

    /// Configuration used for fitting.
    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    /// Sampled polyline, see [`build_path`].
    pub fn sampled(&self, samples_per_segment: usize) -> Vec<Vec2> {
        build_path(&self.points, &self.pairs, samples_per_segment)
    }

    /// Drawable cubic segment starting at `index`, if both ends and both
    /// control pairs exist.
    pub fn segment(&self, index: usize) -> Option<CubicBezier> {
        let start = self.points.get(index).copied().flatten()?;
        let end = self.points.get(index + 1).copied().flatten()?;
        let left = self.pairs.get(index).copied().flatten()?;
        let right = self.pairs.get(index + 1).copied().flatten()?;

        Some(CubicBezier::new(start, left.outgoing, right.incoming, end))
    }

    /// All drawable cubic segments with the index of their start point.
    pub fn segments(&self) -> impl Iterator<Item = (usize, CubicBezier)> + '_ {
        (0..self.points.len().saturating_sub(1))
            .filter_map(|index| self.segment(index).map(|curve| (index, curve)))
    }

    /// Total length of all drawable segments.
    pub fn length(&self, samples_per_segment: usize) -> f32 {
        self.segments()
            .map(|(_, curve)| curve.arc_length(samples_per_segment))
            .sum()
    }

    /// Closing segment from the last point back to the first.
    ///
    /// Only gap-free closed series with at least two points have one.
    pub fn closing_segment(&self) -> Option<CubicBezier> {
        let len = self.points.len();
        if !self.config.closed || len < 2 || self.points.iter().any(Option::is_none) {
            return None;
        }

        let start = self.points[len - 1]?;
        let end = self.points[0]?;
        let left = self.pairs[len - 1]?;
        let right = self.pairs[0]?;

        Some(CubicBezier::new(start, left.outgoing, right.incoming, end))
    }

    /// Emit the edge through one contiguous run of real points.
    fn trace_run(&self, builder: &mut PathBuilder, run: Range<usize>) {
        for index in run.start..run.end - 1 {
            match self.segment(index) {
                Some(curve) => {
                    builder.cubic_to(curve.control1, curve.control2, curve.to);
                }
                None => {
                    if let Some(end) = self.points[index + 1] {
                        builder.line_to(end);
                    }
                }
            }
        }
    }

    /// Vector path for Bezier-capable backends.
    ///
    /// Each contiguous run of real points becomes one sub-path. A closed,
    /// gap-free series gets a closing cubic back to its first point.
    pub fn to_path(&self) -> Path {
        profile_function!();

        let mut builder = PathBuilder::new();
        for run in contiguous_runs(&self.points) {
            let Some(start) = self.points[run.start] else {
                continue;
            };
            builder.move_to(start);
            self.trace_run(&mut builder, run);
        }

        if let Some(closing) = self.closing_segment() {
            builder.cubic_to(closing.control1, closing.control2, closing.to);
            builder.close();
        }

        builder.build()
    }

    /// Filled area between the curve and a horizontal baseline.
    ///
    /// Each run of two or more real points becomes one closed sub-path; single
    /// isolated points enclose no area and are skipped.
    pub fn to_area_path(&self, baseline: f32) -> Path {
        profile_scope!("smooth_curve_area_path");

        let mut builder = PathBuilder::new();
        for run in contiguous_runs(&self.points) {
            if run.len() < 2 {
                continue;
            }
            let (Some(first), Some(last)) = (self.points[run.start], self.points[run.end - 1])
            else {
                continue;
            };

            builder.move_to(first);
            self.trace_run(&mut builder, run);
            builder.line_to(Vec2::new(last.x, baseline));
            builder.line_to(Vec2::new(first.x, baseline));
            builder.close();
        }

        builder.build()
    }
}
