//! Clipping primitives: boundary tracing, attribute interpolation and
//! winding recovery.

use hull_types::{HullSide, HullVertex, Point3};

/// Intersect the ray from `start` through `end` with the vertical plane
/// `x = boundary`.
///
/// The two points must differ in x; the splitter only traces edges that
/// cross a slab boundary, which guarantees that.
#[must_use]
pub fn trace_x(start: Point3<f64>, end: Point3<f64>, boundary: f64) -> Point3<f64> {
    let unit = (end - start).normalize();
    let dist = (boundary - start.x) / unit.x;
    start + unit * dist
}

/// Interpolate a full vertex on the segment from `a` to `b` at the given
/// position.
///
/// The interpolation parameter is the distance ratio
/// `t = |a -> mid| / |a -> b|`, and the *same* `t` against the *same*
/// endpoint pair blends the normal and the texture coordinate, keeping
/// both consistent with the interpolated position. The normal is not
/// re-normalized; the single-estimate hull normals tolerate the slight
/// shortening.
#[must_use]
pub fn interpolate_vertex(a: &HullVertex, b: &HullVertex, mid: Point3<f64>) -> HullVertex {
    let full = (b.position - a.position).norm();
    let part = (mid - a.position).norm();
    let t = part / full;

    HullVertex::new(
        mid,
        a.normal * (1.0 - t) + b.normal * t,
        a.uv * (1.0 - t) + b.uv * t,
    )
}

/// Index order that winds the triangle outward for the given hull side.
///
/// The winding is recomputed from the signed cross product of the
/// triangle's edges, so every emitted triangle faces outward no matter
/// which clipping case produced it.
#[must_use]
pub fn winding_for(verts: &[HullVertex; 3], side: HullSide) -> [u32; 3] {
    let cross = (verts[1].position - verts[0].position).cross(&(verts[2].position - verts[0].position));

    match side {
        HullSide::Port => {
            if cross.z > 0.0 {
                [0, 2, 1]
            } else {
                [0, 1, 2]
            }
        }
        HullSide::Starboard => {
            if cross.z > 0.0 {
                [0, 1, 2]
            } else {
                [0, 2, 1]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hull_types::{Vector2, Vector3};

    #[test]
    fn trace_hits_boundary_exactly() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(4.0, 2.0, -1.0);
        let hit = trace_x(a, b, 1.0);

        assert_relative_eq!(hit.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(hit.y, 0.5, epsilon = 1e-12);
        assert_relative_eq!(hit.z, -0.25, epsilon = 1e-12);
    }

    #[test]
    fn trace_works_backwards() {
        let a = Point3::new(4.0, 0.0, 0.0);
        let b = Point3::new(0.0, 4.0, 0.0);
        let hit = trace_x(a, b, 3.0);
        assert_relative_eq!(hit.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn interpolation_blends_all_channels_with_one_parameter() {
        let a = HullVertex::new(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector2::new(0.0, 0.0),
        );
        let b = HullVertex::new(
            Point3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector2::new(1.0, 0.5),
        );

        let mid = interpolate_vertex(&a, &b, Point3::new(0.5, 0.0, 0.0));
        // t = 0.25
        assert_relative_eq!(mid.normal.z, 0.75, epsilon = 1e-12);
        assert_relative_eq!(mid.normal.y, 0.25, epsilon = 1e-12);
        assert_relative_eq!(mid.uv.x, 0.25, epsilon = 1e-12);
        assert_relative_eq!(mid.uv.y, 0.125, epsilon = 1e-12);
    }

    #[test]
    fn winding_flips_between_sides() {
        let tri = [
            HullVertex::at(Point3::new(0.0, 0.0, 0.0)),
            HullVertex::at(Point3::new(1.0, 0.0, 0.0)),
            HullVertex::at(Point3::new(0.0, 1.0, 0.0)),
        ];
        // cross.z = 1 for this triangle.
        assert_eq!(winding_for(&tri, HullSide::Port), [0, 2, 1]);
        assert_eq!(winding_for(&tri, HullSide::Starboard), [0, 1, 2]);
    }
}
