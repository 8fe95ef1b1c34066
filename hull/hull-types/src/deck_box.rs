//! Deck partition boxes.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One axis-aligned box of a deck's partition grid.
///
/// The bounding-box partitioner tiles each deck floor with boxes of uniform
/// width; together they approximate the (non-rectangular) hull silhouette
/// and drive object placement and the panel splitter's slab boundaries.
///
/// # Example
///
/// ```
/// use hull_types::{DeckBox, Point3};
///
/// let b = DeckBox::new(
///     Point3::new(1.0, 0.0, -0.5),
///     Point3::new(1.5, 0.0, 0.0),
/// );
/// assert!((b.width() - 0.5).abs() < 1e-12);
/// assert!(b.contains_xz(1.2, -0.3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeckBox {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl DeckBox {
    /// Create a box from two corners.
    ///
    /// The corners are normalized so `min <= max` holds per axis; this
    /// keeps boxes well-formed through the final hull mirror, which negates
    /// every x coordinate.
    #[must_use]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Extent along the longitudinal (x) axis.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along the lateral (z) axis.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Whether the given (x, z) position falls inside the box footprint.
    #[inline]
    #[must_use]
    pub fn contains_xz(&self, x: f64, z: f64) -> bool {
        x >= self.min.x && x < self.max.x && z >= self.min.z && z < self.max.z
    }

    /// The box reflected across the x axis.
    #[inline]
    #[must_use]
    pub fn reflected_x(&self) -> Self {
        Self::new(
            Point3::new(-self.min.x, self.min.y, self.min.z),
            Point3::new(-self.max.x, self.max.y, self.max.z),
        )
    }

    /// The four footprint corners at the box's y level.
    ///
    /// Order: min, max, (max.x, min.z), (min.x, max.z). Placement tooling
    /// consumes these as wall-selection points.
    #[must_use]
    pub fn corner_points(&self) -> [Point3<f64>; 4] {
        [
            self.min,
            self.max,
            Point3::new(self.max.x, self.max.y, self.min.z),
            Point3::new(self.min.x, self.max.y, self.max.z),
        ]
    }
}
