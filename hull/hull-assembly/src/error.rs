//! Error types for hull generation.

use thiserror::Error;

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Fatal errors from the hull generation pass.
///
/// A malformed curve set prevents hull load entirely; there is no partial
/// hull and nothing is retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Lattice construction failed.
    #[error(transparent)]
    Lattice(#[from] hull_lattice::LatticeError),

    /// A curve-level failure outside lattice construction.
    #[error(transparent)]
    Curve(#[from] hull_curves::CurveError),

    /// The splitter produced a panel whose identifier is not in the
    /// uid table: the slab grid and the table disagree.
    #[error("no uid for panel at x={x_start} layer={layer} deck={deck}")]
    PanelLookup {
        /// Slab start of the unmatched panel.
        x_start: f64,
        /// Vertical sub-layer of the unmatched panel.
        layer: u32,
        /// Deck of the unmatched panel.
        deck: u32,
    },
}
