//! Fit a gapped series and print its control pairs, sampled polyline and
//! vector path.
//!
//! Run with `RUST_LOG=trace` to see the fitting events.

use glam::Vec2;
use smoothline::{CurveMode, PathCommand, SmoothCurve, SmoothingConfig};
use smoothline_core::logging;
use smoothline_core::math::polyline_length;
use smoothline_core::profiling::{ProfilingBackend, init_profiling, new_frame};

fn main() {
    logging::init();
    init_profiling(ProfilingBackend::InProcess);

    let series = vec![
        Some(Vec2::new(0.0, 20.0)),
        Some(Vec2::new(30.0, 60.0)),
        Some(Vec2::new(60.0, 35.0)),
        None,
        Some(Vec2::new(120.0, 80.0)),
        Some(Vec2::new(150.0, 40.0)),
        Some(Vec2::new(180.0, 55.0)),
    ];

    for mode in [CurveMode::Function, CurveMode::Phase] {
        let config = SmoothingConfig::new()
            .with_smoothing(0.8)
            .with_mode(mode)
            .interpolate_gaps(true);
        let curve = SmoothCurve::fit(&series, config);

        tracing::info!("{} mode", mode.name());
        for (index, pair) in curve.control_pairs().iter().enumerate() {
            match pair {
                Some(pair) => tracing::info!(
                    "  [{}] in = {:?}, out = {:?}",
                    index,
                    pair.incoming,
                    pair.outgoing
                ),
                None => tracing::info!("  [{}] gap", index),
            }
        }

        let polyline = curve.sampled(6);
        tracing::info!(
            "  sampled polyline: {} points, length {:.2}",
            polyline.len(),
            polyline_length(&polyline)
        );

        let path = curve.to_path();
        for command in path.commands() {
            match command {
                PathCommand::MoveTo(to) => tracing::info!("  M {:?}", to),
                PathCommand::LineTo(to) => tracing::info!("  L {:?}", to),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => tracing::info!("  C {:?} {:?} {:?}", control1, control2, to),
                PathCommand::Close => tracing::info!("  Z"),
            }
        }
        tracing::info!("  drawn length: {:.2}", path.length());

        new_frame();
    }
}
