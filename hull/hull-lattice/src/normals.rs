//! Per-vertex normals and the hull centroid.

use nalgebra::{Point3, Vector3};

use crate::lattice::Lattice;

/// Estimate per-vertex normals for the whole lattice.
///
/// Each cell's normal comes from the cross products of its neighboring
/// edge vectors, accumulated in two passes (forward differences, then
/// backward differences for the far row/column) and normalized in place.
/// Cells whose neighborhood is degenerate fall back to straight down.
/// There is no smoothing beyond this single estimate.
#[must_use]
pub fn generate_normals(lattice: &Lattice) -> Vec<Vec<Vector3<f64>>> {
    let rows = lattice.row_count();
    let cols = lattice.column_count();
    let mut normals = vec![vec![Vector3::zeros(); cols]; rows];

    for r in 0..rows.saturating_sub(1) {
        for c in 0..cols.saturating_sub(1) {
            let here = lattice.point(r, c);
            let s1 = lattice.point(r + 1, c) - here;
            let s2 = lattice.point(r, c + 1) - here;
            let s3 = lattice.point(r + 1, c + 1) - here;

            let cross_sum = s1.cross(&s3) + s3.cross(&s2);
            normals[r][c] += cross_sum;
            if cross_sum != Vector3::zeros() {
                normals[r][c].normalize_mut();
            }
        }
    }

    for r in 1..rows {
        for c in 1..cols {
            let here = lattice.point(r, c);
            let s1 = lattice.point(r - 1, c) - here;
            let s2 = lattice.point(r, c - 1) - here;
            let s3 = lattice.point(r - 1, c - 1) - here;

            let cross_sum = s1.cross(&s3) + s3.cross(&s2);
            normals[r][c] += cross_sum;
            if cross_sum == Vector3::zeros() {
                normals[r][c] = -Vector3::y();
            } else {
                normals[r][c].normalize_mut();
            }
        }
    }

    normals
}

/// The hull's center point.
///
/// This is the original pipeline's simplified form: the sum of the two
/// opposite lattice corners divided by four. It is *not* an area-weighted
/// centroid, and downstream consumers (camera targeting) are calibrated
/// to exactly this value, so keep the definition as is.
#[must_use]
pub fn centroid_of(lattice: &Lattice) -> Point3<f64> {
    let rows = lattice.row_count();
    let cols = lattice.column_count();
    if rows == 0 || cols == 0 {
        return Point3::origin();
    }

    let a = lattice.point(0, 0);
    let b = lattice.point(rows - 1, cols - 1);
    Point3::from((a.coords + b.coords) / 4.0)
}
