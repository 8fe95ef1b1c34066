//! Lattice generation parameters.

/// Configuration for hull lattice construction.
///
/// The defaults are the values the rest of the pipeline is calibrated to:
/// a deck is 2.13 units tall, deck partition boxes and wall slabs are half
/// a unit wide, and each deck wall is five primitives tall.
///
/// # Examples
///
/// ```
/// use hull_lattice::LatticeParams;
///
/// let params = LatticeParams::new().with_deck_height(2.5);
/// assert!((params.deck_height - 2.5).abs() < 1e-12);
/// assert_eq!(params.primitives_per_deck, 5);
/// ```
#[derive(Debug, Clone)]
pub struct LatticeParams {
    /// Vertical extent of one deck.
    pub deck_height: f64,

    /// Width of the deck partition boxes and of the wall slabs.
    ///
    /// Also sets the horizontal lattice resolution: the builder aims for
    /// one column per two box widths.
    pub slab_width: f64,

    /// Vertical subdivisions per deck wall.
    pub primitives_per_deck: usize,
}

impl Default for LatticeParams {
    fn default() -> Self {
        Self {
            deck_height: 2.13,
            slab_width: 0.5,
            primitives_per_deck: 5,
        }
    }
}

impl LatticeParams {
    /// Create parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deck height.
    #[must_use]
    pub fn with_deck_height(mut self, deck_height: f64) -> Self {
        self.deck_height = deck_height;
        self
    }

    /// Set the slab/box width.
    #[must_use]
    pub fn with_slab_width(mut self, slab_width: f64) -> Self {
        self.slab_width = slab_width;
        self
    }

    /// Set the vertical subdivisions per deck.
    #[must_use]
    pub fn with_primitives_per_deck(mut self, primitives_per_deck: usize) -> Self {
        self.primitives_per_deck = primitives_per_deck;
        self
    }
}
