//! Addressing keys for hull panels and deck floor tiles.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::side::HullSide;

/// Slab-start tolerance for panel identity.
///
/// Slab starts are multiples of the slab width, so any tolerance well
/// under half a slab width is unambiguous.
const X_START_EPSILON: f64 = 0.01;

/// Addressing key for one wall panel of the hull.
///
/// A panel is identified by the slab it was cut from (its start coordinate
/// on the slicing axis), its vertical sub-layer within the deck, the hull
/// side and the deck index. Two identifiers are equal iff all four fields
/// match, with the slab start compared under a small tolerance. That is
/// why this type implements [`PartialEq`] but not `Eq` or `Hash`, and why
/// buffers look identifiers up by linear scan.
///
/// # Example
///
/// ```
/// use hull_types::{HullSide, PanelId};
///
/// let a = PanelId::new(2.0, 0, HullSide::Starboard, 3);
/// let b = PanelId::new(2.004, 0, HullSide::Starboard, 3);
/// assert_eq!(a, b);
/// assert_ne!(a, PanelId::new(2.5, 0, HullSide::Starboard, 3));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelId {
    /// Start of the slab this panel was cut from, on the slicing axis.
    pub x_start: f64,
    /// Vertical sub-layer index within the deck.
    pub layer: u32,
    /// Hull side.
    pub side: HullSide,
    /// Deck index (0 = weather deck).
    pub deck: u32,
}

impl PanelId {
    /// Create a panel identifier.
    #[inline]
    #[must_use]
    pub const fn new(x_start: f64, layer: u32, side: HullSide, deck: u32) -> Self {
        Self {
            x_start,
            layer,
            side,
            deck,
        }
    }
}

impl PartialEq for PanelId {
    fn eq(&self, other: &Self) -> bool {
        (self.x_start - other.x_start).abs() < X_START_EPSILON
            && self.layer == other.layer
            && self.side == other.side
            && self.deck == other.deck
    }
}

/// Addressing key for one tile of a deck floor buffer.
///
/// Plate tiles are addressed by their grid origin, scaled to integer
/// coordinates (two grid steps per unit) so equality is exact. Filler
/// tiles close the gap between the box grid and the hull silhouette and
/// are never individually addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FloorTileId {
    /// A deck plate cut from the bounding-box grid.
    Plate {
        /// Scaled (x, z) origin of the plate's box.
        origin: (i32, i32),
        /// Deck index.
        deck: u32,
    },
    /// A border filler quad between the box grid and the hull silhouette.
    Filler,
}

impl FloorTileId {
    /// Scale factor mapping model-space plate origins to integers.
    const GRID_STEPS_PER_UNIT: f64 = 2.0;

    /// Create a plate identifier from a model-space origin.
    ///
    /// # Example
    ///
    /// ```
    /// use hull_types::{FloorTileId, Point3};
    ///
    /// let id = FloorTileId::plate(Point3::new(1.5, 0.0, -0.5), 2);
    /// assert_eq!(id, FloorTileId::Plate { origin: (3, -1), deck: 2 });
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn plate(origin: Point3<f64>, deck: u32) -> Self {
        Self::Plate {
            origin: (
                (origin.x * Self::GRID_STEPS_PER_UNIT).round() as i32,
                (origin.z * Self::GRID_STEPS_PER_UNIT).round() as i32,
            ),
            deck,
        }
    }
}
