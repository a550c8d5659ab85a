//! Smoothline Core
//!
//! Shared building blocks for the smoothline crates: the 2D vector type,
//! gap-aware series helpers, logging and profiling setup.

pub mod logging;
pub mod math;
pub mod profiling;
pub mod series;
