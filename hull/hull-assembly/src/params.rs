//! Generation parameters.

use hull_lattice::LatticeParams;

/// Configuration for a full hull generation pass.
///
/// # Examples
///
/// ```
/// use hull_assembly::HullParams;
///
/// let params = HullParams::default();
/// assert!((params.texture_tiling - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct HullParams {
    /// Lattice construction parameters.
    pub lattice: LatticeParams,

    /// World units covered by one repetition of the hull texture.
    ///
    /// Wall texture coordinates are `x / tiling` and `|y| / tiling`, so
    /// the texture tiles seamlessly across slab cuts.
    pub texture_tiling: f64,
}

impl Default for HullParams {
    fn default() -> Self {
        Self {
            lattice: LatticeParams::default(),
            texture_tiling: 4.0,
        }
    }
}

impl HullParams {
    /// Create parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the lattice parameters.
    #[must_use]
    pub fn with_lattice(mut self, lattice: LatticeParams) -> Self {
        self.lattice = lattice;
        self
    }
}
