//! The bounding-box partitioner.

use hull_lattice::DeckPlate;
use hull_types::{DeckBox, Point3};
use tracing::debug;

/// The box grids of every deck, plus the selection vertices derived from
/// them.
#[derive(Debug, Clone)]
pub struct DeckGrid {
    /// Partition boxes per deck.
    pub boxes_by_deck: Vec<Vec<DeckBox>>,
    /// The four footprint corners of every box, per deck. These are the
    /// points wall-selection tooling snaps to.
    pub corner_points_by_deck: Vec<Vec<Point3<f64>>>,
    /// Smallest box x across all decks.
    pub min_x: f64,
    /// Largest box x across all decks.
    pub max_x: f64,
}

/// Partition every deck floor and collect the grid extents.
#[must_use]
pub fn partition_decks(plates: &[DeckPlate], box_width: f64) -> DeckGrid {
    let boxes_by_deck: Vec<Vec<DeckBox>> = plates
        .iter()
        .map(|plate| partition_deck(plate, box_width))
        .collect();

    let corner_points_by_deck = boxes_by_deck
        .iter()
        .map(|boxes| boxes.iter().flat_map(DeckBox::corner_points).collect())
        .collect();

    let min_x = boxes_by_deck
        .iter()
        .flatten()
        .fold(f64::INFINITY, |acc, b| acc.min(b.min.x));
    let max_x = boxes_by_deck
        .iter()
        .flatten()
        .fold(f64::NEG_INFINITY, |acc, b| acc.max(b.max.x));

    debug!(
        decks = plates.len(),
        boxes = boxes_by_deck.iter().map(Vec::len).sum::<usize>(),
        "deck grids partitioned"
    );

    DeckGrid {
        boxes_by_deck,
        corner_points_by_deck,
        min_x,
        max_x,
    }
}

/// Divide one deck floor into fixed-width boxes.
///
/// Starting from a slab boundary aligned to the box width, walk the floor
/// in +x steps. Per column, the silhouette's z bound is interpolated at
/// both column edges (re-interpolating with the next segment when the
/// column crosses a silhouette vertex, and bounding to zero when it runs
/// off the stern), converted to an integer box count using the smaller of
/// the two bounds, and that many box pairs are emitted symmetrically
/// about the centerline.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn partition_deck(plate: &DeckPlate, box_width: f64) -> Vec<DeckBox> {
    let silhouette = &plate.silhouette;
    let centerline = &plate.centerline;
    let columns = centerline.len();
    if columns < 2 {
        return Vec::new();
    }

    let y = plate.level();
    let mut boxes = Vec::new();

    // Align the first column to the box-width grid past the bow.
    let mut pos = 0.0;
    while pos < centerline[0].x {
        pos += box_width;
    }

    while pos < centerline[columns - 1].x {
        let Some(index) =
            (0..columns - 1).find(|&i| pos >= centerline[i].x && pos < centerline[i + 1].x)
        else {
            break;
        };

        let seg_start = silhouette[index];
        let seg_end = silhouette[index + 1];

        let z_bound_near = lerp_z(seg_start, seg_end, pos);
        let z_bound_far = if pos + box_width < seg_end.x {
            lerp_z(seg_start, seg_end, pos + box_width)
        } else if index + 2 == columns {
            // Off the stern: nothing beyond the silhouette.
            0.0
        } else {
            lerp_z(seg_end, silhouette[index + 2], pos + box_width)
        };

        let near_count = (z_bound_near / box_width) as i32;
        let far_count = (z_bound_far / box_width) as i32;
        let count = near_count.min(far_count);

        for i in -count..count {
            boxes.push(DeckBox::new(
                Point3::new(pos, y, f64::from(i) * box_width),
                Point3::new(pos + box_width, y, f64::from(i + 1) * box_width),
            ));
        }

        pos += box_width;
    }

    boxes
}

/// Linear interpolation of the silhouette z between two vertices, at the
/// given absolute x.
fn lerp_z(from: Point3<f64>, to: Point3<f64>, x: f64) -> f64 {
    let span = to.x - from.x;
    if span.abs() < f64::EPSILON {
        return from.z;
    }
    let t = (x - from.x) / span;
    from.z + t * (to.z - from.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// A constant-width silhouette: z = 5 for x in [0, reach].
    fn rectangular_plate(reach: usize) -> DeckPlate {
        let silhouette: Vec<Point3<f64>> = (0..=reach)
            .map(|i| Point3::new(i as f64, 0.0, 5.0))
            .collect();
        let centerline = silhouette
            .iter()
            .map(|p| Point3::new(p.x, p.y, 0.0))
            .collect();
        let mirror = silhouette.iter().map(|p| Point3::new(p.x, p.y, -p.z)).collect();
        DeckPlate {
            silhouette,
            centerline,
            mirror,
        }
    }

    #[test]
    fn constant_silhouette_emits_full_columns() {
        // Silhouette carries past x = 10 so every column over [0, 10) sees
        // a far bound of 5 as well.
        let plate = rectangular_plate(11);
        let boxes = partition_deck(&plate, 0.5);

        // Exactly 20 boxes per column over x in [0, 10).
        for column in 0..20 {
            let x0 = f64::from(column) * 0.5;
            let in_column: Vec<&DeckBox> = boxes
                .iter()
                .filter(|b| (b.min.x - x0).abs() < 1e-9)
                .collect();
            assert_eq!(in_column.len(), 20, "column at x={x0}");
            for b in &in_column {
                assert_relative_eq!(b.width(), 0.5, epsilon = 1e-12);
                assert!(b.min.z.abs() <= 5.0 + 1e-12);
                assert!(b.max.z.abs() <= 5.0 + 1e-12);
            }
        }
    }

    #[test]
    fn boxes_never_exceed_silhouette() {
        // A tapering silhouette: z shrinks from 5 to 0 along x.
        let silhouette: Vec<Point3<f64>> = (0..=10)
            .map(|i| Point3::new(f64::from(i), 0.0, 5.0 - f64::from(i) * 0.5))
            .collect();
        let centerline = silhouette
            .iter()
            .map(|p| Point3::new(p.x, p.y, 0.0))
            .collect();
        let mirror = silhouette
            .iter()
            .map(|p| Point3::new(p.x, p.y, -p.z))
            .collect();
        let plate = DeckPlate {
            silhouette: silhouette.clone(),
            centerline,
            mirror,
        };

        let boxes = partition_deck(&plate, 0.5);
        assert!(!boxes.is_empty());

        for b in &boxes {
            // The silhouette bound at the box's far edge (taper means the
            // far edge is the tighter one).
            let bound_far = 5.0 - b.max.x * 0.5;
            let bound = bound_far.min(5.0 - b.min.x * 0.5);
            assert!(
                b.max.z <= bound + 1e-9,
                "box at x={} exceeds silhouette: {} > {}",
                b.min.x,
                b.max.z,
                bound
            );
        }
    }

    #[test]
    fn symmetric_emission_about_centerline() {
        let plate = rectangular_plate(11);
        let boxes = partition_deck(&plate, 0.5);

        for b in &boxes {
            let mirrored = boxes.iter().any(|other| {
                (other.min.x - b.min.x).abs() < 1e-9
                    && (other.min.z + b.max.z).abs() < 1e-9
                    && (other.max.z + b.min.z).abs() < 1e-9
            });
            assert!(mirrored, "box at ({}, {}) has no mirror", b.min.x, b.min.z);
        }
    }

    #[test]
    fn degenerate_plate_emits_nothing() {
        let plate = DeckPlate {
            silhouette: vec![Point3::origin()],
            centerline: vec![Point3::origin()],
            mirror: vec![Point3::origin()],
        };
        assert!(partition_deck(&plate, 0.5).is_empty());
    }

    #[test]
    fn grid_extents_cover_all_decks() {
        let grid = partition_decks(&[rectangular_plate(11), rectangular_plate(6)], 0.5);
        assert_eq!(grid.boxes_by_deck.len(), 2);
        assert_relative_eq!(grid.min_x, 0.0);
        assert!(grid.max_x > 9.0);
        // Four corner points per box.
        for (boxes, corners) in grid
            .boxes_by_deck
            .iter()
            .zip(&grid.corner_points_by_deck)
        {
            assert_eq!(corners.len(), boxes.len() * 4);
        }
    }
}
