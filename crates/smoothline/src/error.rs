/// Errors reported by the checked curve-building APIs.
///
/// Numeric limit cases (zero-length displacements, vertical neighbours,
/// coincident control points) are never errors; they resolve to zero or
/// axis-aligned tangents instead.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The point sequence and its control-pair sequence differ in length.
    LengthMismatch { points: usize, pairs: usize },

    /// A sampling routine was asked for fewer samples than it needs.
    InvalidSampleCount(usize),
}

impl std::fmt::Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::LengthMismatch { points, pairs } => write!(
                f,
                "Control pair count does not match point count: {} points, {} pairs",
                points, pairs
            ),
            CurveError::InvalidSampleCount(count) => {
                write!(f, "Invalid sample count: {} (at least 2 required)", count)
            }
        }
    }
}

impl std::error::Error for CurveError {}

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;
