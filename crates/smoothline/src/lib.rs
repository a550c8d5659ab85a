//! Smoothline - smoothed curves through chart series
//!
//! This crate provides:
//! - Quadratic and cubic Bezier evaluation, derivatives and sampling
//! - Tangent strategies for function graphs and free trajectories
//! - Control point synthesis across gaps and closed loops
//! - Polyline and vector-path output for line and area charts
//! - Arc length and length-to-parameter queries for hit-testing
//!
//! # Example
//!
//! ```
//! use smoothline::*;
//! use glam::Vec2;
//!
//! let series = [
//!     Some(Vec2::new(0.0, 10.0)),
//!     Some(Vec2::new(40.0, 30.0)),
//!     None,
//!     Some(Vec2::new(120.0, 20.0)),
//!     Some(Vec2::new(160.0, 45.0)),
//! ];
//!
//! let config = SmoothingConfig::new().with_smoothing(0.8).interpolate_gaps(true);
//! let pairs = synthesize_control_points(&series, &config);
//! let polyline = build_path(&series, &pairs, 12);
//!
//! assert_eq!(pairs.len(), series.len());
//! assert!(!polyline.is_empty());
//! ```

// Core primitives
mod curve;
mod sample;
mod tangent;

// Fitting
mod config;
mod control;
mod error;

// Output
mod build;
mod path;
mod smooth;

// Re-exports
pub use curve::*;
pub use sample::*;
pub use tangent::*;

pub use config::*;
pub use control::*;
pub use error::*;

pub use build::*;
pub use path::*;
pub use smooth::*;

pub use smoothline_core::math::Vec2;
pub use smoothline_core::series::{Direction, SeriesPoint, find_neighbor};
