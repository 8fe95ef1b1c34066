//! Error types for curve sampling and inversion.

use thiserror::Error;

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while sampling or inverting a profile curve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// The profile has too few control points to form a segment.
    #[error("profile needs at least {min} control points, got {actual}")]
    TooFewPoints {
        /// Minimum required control points.
        min: usize,
        /// Actual control point count.
        actual: usize,
    },

    /// No sample of the curve crosses the queried line.
    ///
    /// Only produced by [`SampledCurve::solve_for_y`]; the symmetric
    /// [`SampledCurve::solve_for_x`] handles the extremity case itself.
    ///
    /// [`SampledCurve::solve_for_y`]: crate::SampledCurve::solve_for_y
    /// [`SampledCurve::solve_for_x`]: crate::SampledCurve::solve_for_x
    #[error("no solution on the curve for independent value {independent}")]
    NoSolution {
        /// The x value that was queried.
        independent: f64,
    },
}
