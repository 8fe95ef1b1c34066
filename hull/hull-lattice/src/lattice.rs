//! The hull lattice grid.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D grid of 3D points describing the hull's outer surface.
///
/// Indexed `[row][column]`: rows are vertical stations, columns run the
/// length of the ship with both sides mirrored about the centerline. After
/// generation, row 0 is the open deck and rows increase toward the keel;
/// the y coordinates are negative below the deck.
///
/// The lattice is immutable once built; every downstream stage (normals,
/// plates, boxes, panels) reads from it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lattice {
    rows: Vec<Vec<Point3<f64>>>,
}

impl Lattice {
    /// Wrap a grid of points.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not all the same length.
    #[must_use]
    pub fn new(rows: Vec<Vec<Point3<f64>>>) -> Self {
        if let Some(first) = rows.first() {
            assert!(
                rows.iter().all(|r| r.len() == first.len()),
                "lattice rows must be uniform"
            );
        }
        Self { rows }
    }

    /// Number of vertical stations.
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns per station (both sides of the ship).
    #[inline]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// One vertical station.
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> &[Point3<f64>] {
        &self.rows[index]
    }

    /// All stations, top row first.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<Point3<f64>>] {
        &self.rows
    }

    /// A single lattice point.
    #[inline]
    #[must_use]
    pub fn point(&self, row: usize, column: usize) -> Point3<f64> {
        self.rows[row][column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions() {
        let lattice = Lattice::new(vec![
            vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
            vec![Point3::new(0.0, -1.0, 0.0), Point3::new(1.0, -1.0, 0.0)],
        ]);
        assert_eq!(lattice.row_count(), 2);
        assert_eq!(lattice.column_count(), 2);
        assert_eq!(lattice.point(1, 1), Point3::new(1.0, -1.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "uniform")]
    fn ragged_rows_rejected() {
        let _ = Lattice::new(vec![vec![Point3::origin()], vec![]]);
    }
}
