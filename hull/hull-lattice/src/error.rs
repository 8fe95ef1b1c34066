//! Error types for lattice construction.

use thiserror::Error;

/// Result type for lattice operations.
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Fatal errors raised while building the hull lattice.
///
/// Every variant indicates a malformed curve set; hull generation aborts
/// and nothing is retried.
#[derive(Debug, Error)]
pub enum LatticeError {
    /// A profile has too few control points for scalar extraction.
    #[error("{profile} profile needs at least {min} control points, got {actual}")]
    TooFewControlPoints {
        /// Which profile was short.
        profile: &'static str,
        /// Minimum required control points.
        min: usize,
        /// Actual control point count.
        actual: usize,
    },

    /// The side profile produced the wrong number of hull intercepts at a
    /// vertical station.
    #[error("found {count} hull intercepts at depth {depth} (want two)")]
    InterceptCount {
        /// The station depth that was inverted.
        depth: f64,
        /// How many intercepts came back.
        count: usize,
    },

    /// The scaled cross-section profile is not single-valued at a station:
    /// the curve does not pass the horizontal line test.
    #[error("cross-section curve does not pass the horizontal line test ({count} solutions at depth {depth})")]
    LineTest {
        /// The station depth that was inverted.
        depth: f64,
        /// How many solutions came back.
        count: usize,
    },

    /// A lattice coordinate came out NaN.
    #[error("NaN coordinate in lattice row {row}")]
    NanCoordinate {
        /// The affected lattice row.
        row: usize,
    },

    /// A curve-level failure during sampling or inversion.
    #[error(transparent)]
    Curve(#[from] hull_curves::CurveError),
}
