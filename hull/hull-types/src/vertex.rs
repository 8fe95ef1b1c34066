//! Hull mesh vertex.

use nalgebra::{Point3, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertex of the hull mesh: position, normal and texture coordinate.
///
/// Unlike a general-purpose mesh vertex, all three channels are always
/// present; the panel splitter interpolates them together so they stay
/// geometrically consistent across slab boundaries.
///
/// # Example
///
/// ```
/// use hull_types::{HullVertex, Point3, Vector2, Vector3};
///
/// let v = HullVertex::new(
///     Point3::new(1.0, -2.0, 0.5),
///     Vector3::new(0.0, 0.0, 1.0),
///     Vector2::new(0.25, 0.5),
/// );
/// assert_eq!(v.position.x, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HullVertex {
    /// 3D position.
    pub position: Point3<f64>,
    /// Outward surface normal.
    pub normal: Vector3<f64>,
    /// Texture coordinate (u, v).
    pub uv: Vector2<f64>,
}

impl HullVertex {
    /// Create a vertex from its three channels.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>, normal: Vector3<f64>, uv: Vector2<f64>) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Create a vertex at a position with zero normal and UV.
    ///
    /// Used when building geometry whose normals are filled in later.
    #[inline]
    #[must_use]
    pub fn at(position: Point3<f64>) -> Self {
        Self::new(position, Vector3::zeros(), Vector2::zeros())
    }

    /// Return a copy with the position's x coordinate negated.
    ///
    /// Hull generation builds one half of the ship and mirrors the final
    /// geometry across the x axis.
    #[inline]
    #[must_use]
    pub fn mirrored_x(&self) -> Self {
        Self {
            position: Point3::new(-self.position.x, self.position.y, self.position.z),
            normal: self.normal,
            uv: self.uv,
        }
    }
}

impl Default for HullVertex {
    fn default() -> Self {
        Self::at(Point3::origin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_origin() {
        let v = HullVertex::default();
        assert_eq!(v.position, Point3::origin());
        assert_eq!(v.normal, Vector3::zeros());
    }

    #[test]
    fn mirror_negates_x_only() {
        let v = HullVertex::new(
            Point3::new(2.0, -1.0, 3.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector2::new(0.5, 0.5),
        );
        let m = v.mirrored_x();
        assert_eq!(m.position, Point3::new(-2.0, -1.0, 3.0));
        assert_eq!(m.normal, v.normal);
        assert_eq!(m.uv, v.uv);
    }
}
