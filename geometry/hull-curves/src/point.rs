//! Curve control points and cubic Bézier evaluation.

use nalgebra::{Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A control point of a piecewise cubic profile curve.
///
/// Each point carries a center position plus two tangent-handle *offsets*:
/// `prev` shapes the segment arriving at this point, `next` shapes the
/// segment leaving it. Adjacent points `a` and `b` are joined by the cubic
/// with absolute control points
/// `a.pos`, `a.pos + a.next`, `b.pos + b.prev`, `b.pos`.
///
/// # Example
///
/// ```
/// use hull_curves::CurvePoint;
/// use nalgebra::{Point2, Vector2};
///
/// let p = CurvePoint::new(
///     Point2::new(10.0, 10.0),
///     Vector2::new(-4.0, 0.0),
///     Vector2::new(4.0, 0.0),
/// );
/// assert_eq!(p.next_handle(), Point2::new(14.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurvePoint {
    /// Center position.
    pub pos: Point2<f64>,
    /// Handle offset toward the previous point.
    pub prev: Vector2<f64>,
    /// Handle offset toward the next point.
    pub next: Vector2<f64>,
}

impl CurvePoint {
    /// Create a control point from a position and two handle offsets.
    #[inline]
    #[must_use]
    pub const fn new(pos: Point2<f64>, prev: Vector2<f64>, next: Vector2<f64>) -> Self {
        Self { pos, prev, next }
    }

    /// Create a control point from raw coordinates.
    ///
    /// Argument order is `(pos.x, pos.y, prev.x, prev.y, next.x, next.y)`.
    #[inline]
    #[must_use]
    pub fn from_coords(px: f64, py: f64, bx: f64, by: f64, fx: f64, fy: f64) -> Self {
        Self::new(
            Point2::new(px, py),
            Vector2::new(bx, by),
            Vector2::new(fx, fy),
        )
    }

    /// Absolute position of the previous-side handle.
    #[inline]
    #[must_use]
    pub fn prev_handle(&self) -> Point2<f64> {
        self.pos + self.prev
    }

    /// Absolute position of the next-side handle.
    #[inline]
    #[must_use]
    pub fn next_handle(&self) -> Point2<f64> {
        self.pos + self.next
    }

    /// Return a copy with position and both handles scaled componentwise.
    ///
    /// The hull generator shrinks the cross-section profile per station by
    /// scaling x by the local width factor and y by the local depth factor.
    /// Scaling the offsets along with the center is equivalent to scaling
    /// the absolute handle positions.
    #[must_use]
    pub fn scaled(&self, scale_x: f64, scale_y: f64) -> Self {
        Self {
            pos: Point2::new(self.pos.x * scale_x, self.pos.y * scale_y),
            prev: Vector2::new(self.prev.x * scale_x, self.prev.y * scale_y),
            next: Vector2::new(self.next.x * scale_x, self.next.y * scale_y),
        }
    }
}

/// Evaluate a cubic Bézier at parameter `t` by repeated linear interpolation.
///
/// `a` and `d` are the endpoints, `b` and `c` the interior control points.
///
/// # Example
///
/// ```
/// use hull_curves::cubic_point;
/// use nalgebra::Point2;
///
/// let p = cubic_point(
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 2.0),
///     Point2::new(3.0, 2.0),
///     Point2::new(4.0, 0.0),
///     0.0,
/// );
/// assert_eq!(p, Point2::new(0.0, 0.0));
/// ```
#[must_use]
pub fn cubic_point(
    a: Point2<f64>,
    b: Point2<f64>,
    c: Point2<f64>,
    d: Point2<f64>,
    t: f64,
) -> Point2<f64> {
    let ab = lerp(a, b, t);
    let bc = lerp(b, c, t);
    let cd = lerp(c, d, t);
    let abbc = lerp(ab, bc, t);
    let bccd = lerp(bc, cd, t);
    lerp(abbc, bccd, t)
}

#[inline]
fn lerp(a: Point2<f64>, b: Point2<f64>, t: f64) -> Point2<f64> {
    Point2::from(a.coords * (1.0 - t) + b.coords * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cubic_endpoints() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 3.0);
        let c = Point2::new(3.0, 3.0);
        let d = Point2::new(4.0, 0.0);

        assert_relative_eq!(cubic_point(a, b, c, d, 0.0), a, epsilon = 1e-12);
        assert_relative_eq!(cubic_point(a, b, c, d, 1.0), d, epsilon = 1e-12);
    }

    #[test]
    fn cubic_midpoint_pulled_toward_handles() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 3.0);
        let c = Point2::new(3.0, 3.0);
        let d = Point2::new(4.0, 0.0);

        let mid = cubic_point(a, b, c, d, 0.5);
        assert_relative_eq!(mid.x, 2.0, epsilon = 1e-12);
        assert!(mid.y > 0.0);
    }

    #[test]
    fn scaled_copy_scales_handles_with_center() {
        let p = CurvePoint::from_coords(4.0, 10.0, 0.0, -4.0, 1.0, 2.0);
        let s = p.scaled(0.5, 0.1);

        assert_relative_eq!(s.pos.x, 2.0);
        assert_relative_eq!(s.pos.y, 1.0);
        assert_relative_eq!(s.prev.y, -0.4);
        assert_relative_eq!(s.next.x, 0.5);
        // Absolute handle of the scaled copy equals the scaled absolute handle.
        assert_relative_eq!(s.next_handle().x, p.next_handle().x * 0.5);
        assert_relative_eq!(s.next_handle().y, p.next_handle().y * 0.1);
    }
}
