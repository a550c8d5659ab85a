//! Smoothing configuration.

use crate::tangent::CurveMode;

/// Settings shared by control-point synthesis and path output.
///
/// # Example
///
/// ```
/// use smoothline::{CurveMode, SmoothingConfig};
///
/// let config = SmoothingConfig::new()
///     .with_smoothing(0.6)
///     .with_mode(CurveMode::Phase)
///     .closed(true);
/// assert!(config.closed);
/// assert!(!config.interpolate_gaps);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingConfig {
    /// 0 draws straight segments, 1 the smoothest curve. Not clamped.
    pub smoothing: f32,
    /// Tangent strategy.
    pub mode: CurveMode,
    /// The last point connects back to the first.
    pub closed: bool,
    /// Neighbour lookup skips over gaps to the nearest real point.
    pub interpolate_gaps: bool,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            smoothing: 1.0,
            mode: CurveMode::Function,
            closed: false,
            interpolate_gaps: false,
        }
    }
}

impl SmoothingConfig {
    /// Create the default configuration: full smoothing, function mode, open,
    /// no gap interpolation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the smoothing factor.
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the tangent strategy.
    pub fn with_mode(mut self, mode: CurveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Treat the series as a closed loop.
    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Resolve neighbours across gaps.
    pub fn interpolate_gaps(mut self, interpolate: bool) -> Self {
        self.interpolate_gaps = interpolate;
        self
    }

    /// Whether the smoothing factor lies in the documented `[0, 1]` range.
    pub fn is_smoothing_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.smoothing)
    }

    /// Log a warning when the smoothing factor is outside `[0, 1]`.
    ///
    /// Out-of-range factors are still used as given.
    pub fn check(&self) -> bool {
        let ok = self.is_smoothing_in_range();
        if !ok {
            tracing::warn!(
                smoothing = self.smoothing,
                "Smoothing factor outside [0, 1]; using it unclamped"
            );
        }
        ok
    }
}
