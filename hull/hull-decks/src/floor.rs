//! Deck floor geometry.

use hull_buffer::{RenderContext, SlotBuffer};
use hull_lattice::DeckPlate;
use hull_types::{DeckBox, FloorTileId, HullVertex, Point3, Vector2, Vector3};

/// Quad winding shared by every floor tile.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Mesh one deck floor into an addressable buffer.
///
/// Two families of tiles are produced:
///
/// - border fillers between the outermost box edges and the hull
///   silhouette, interpolated along the silhouette segments and mirrored
///   to the other side ([`FloorTileId::Filler`], not individually
///   addressable);
/// - one plate quad per partition box, addressed by the box's origin in
///   final (mirrored) hull coordinates ([`FloorTileId::Plate`]).
///
/// Every tile is an upward-facing quad: 4 vertices, 6 indices, 2
/// primitives per object.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn build_floor_buffer(
    ctx: &RenderContext,
    plate: &DeckPlate,
    boxes: &[DeckBox],
    box_width: f64,
    deck: u32,
) -> SlotBuffer<FloorTileId> {
    let border_quads = border_filler_quads(plate, boxes, box_width);

    let mut buffer = SlotBuffer::new(ctx, border_quads.len() * 2 + boxes.len(), 2, 4, 6);
    buffer.set_manual_update(true);

    for quad in &border_quads {
        buffer.add(FloorTileId::Filler, &QUAD_INDICES, &quad_vertices(quad));

        let reflected = [
            reflect_z(quad[0]),
            reflect_z(quad[1]),
            reflect_z(quad[2]),
            reflect_z(quad[3]),
        ];
        buffer.add(FloorTileId::Filler, &QUAD_INDICES, &quad_vertices(&reflected));
    }

    for deck_box in boxes {
        let min = deck_box.min;
        let x_width = Vector3::new(deck_box.width(), 0.0, 0.0);
        let z_width = Vector3::new(0.0, 0.0, deck_box.depth());
        let corners = [min, min + x_width, min + x_width + z_width, min + z_width];

        // The identifier refers to final hull coordinates: generation
        // mirrors all geometry across the x axis as its last step.
        let id = FloorTileId::plate(Point3::new(-min.x, min.y, min.z), deck);
        buffer.add(id, &QUAD_INDICES, &quad_vertices(&corners));
    }

    buffer.commit();
    buffer.set_manual_update(false);
    buffer
}

/// The border quads between the box grid's outer edge and the silhouette.
///
/// Walks the silhouette in box-width steps; a step that crosses a
/// silhouette vertex is split at the vertex and re-interpolated against
/// the next segment.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn border_filler_quads(
    plate: &DeckPlate,
    boxes: &[DeckBox],
    box_width: f64,
) -> Vec<[Point3<f64>; 4]> {
    let silhouette = &plate.silhouette;
    if silhouette.len() < 2 {
        return Vec::new();
    }

    let y = plate.level();
    let length = silhouette[silhouette.len() - 1].x;

    // Outer |z| of the box grid per column, indexed by x / box_width.
    let columns = (length / box_width).ceil() as usize + 2;
    let mut outer_maxima = vec![0.0_f64; columns];
    for deck_box in boxes {
        let idx = (deck_box.min.x / box_width).round() as usize;
        if idx < outer_maxima.len() {
            outer_maxima[idx] = outer_maxima[idx].max(deck_box.min.z.abs());
        }
    }
    let maxima_at = |x: f64| -> f64 {
        let idx = (x / box_width).round() as usize;
        outer_maxima.get(idx).copied().unwrap_or(0.0)
    };

    let mut prev = 0;
    let mut next = 1;
    let mut quads = Vec::new();

    let mut x = box_width;
    while x < silhouette[prev].x {
        x += box_width;
    }

    while x < length {
        if x > silhouette[next].x {
            // The step crosses a silhouette vertex: emit a quad up to the
            // vertex, then re-interpolate the remainder on the next segment.
            let prev_x = x - box_width;
            let cur_x = silhouette[next].x;
            let z0 = lerp_z(silhouette[prev], silhouette[next], prev_x);
            let z1 = lerp_z(silhouette[prev], silhouette[next], cur_x);
            let outer = maxima_at(prev_x);
            quads.push([
                Point3::new(prev_x, y, outer),
                Point3::new(prev_x, y, z0),
                Point3::new(cur_x, y, z1),
                Point3::new(cur_x, y, outer),
            ]);

            prev += 1;
            next += 1;
            if next >= silhouette.len() {
                break;
            }
            let z0 = lerp_z(silhouette[prev], silhouette[next], cur_x);
            let z1 = lerp_z(silhouette[prev], silhouette[next], x);
            quads.push([
                Point3::new(cur_x, y, outer),
                Point3::new(cur_x, y, z0),
                Point3::new(x, y, z1),
                Point3::new(x, y, outer),
            ]);
        } else {
            let prev_x = x - box_width;
            let z0 = lerp_z(silhouette[prev], silhouette[next], prev_x);
            let z1 = lerp_z(silhouette[prev], silhouette[next], x);
            let outer = maxima_at(prev_x);
            quads.push([
                Point3::new(prev_x, y, outer),
                Point3::new(prev_x, y, z0),
                Point3::new(x, y, z1),
                Point3::new(x, y, outer),
            ]);
        }
        x += box_width;
    }

    quads
}

fn quad_vertices(corners: &[Point3<f64>; 4]) -> [HullVertex; 4] {
    let up = Vector3::y();
    [
        HullVertex::new(corners[0], up, Vector2::new(0.0, 0.0)),
        HullVertex::new(corners[1], up, Vector2::new(1.0, 0.0)),
        HullVertex::new(corners[2], up, Vector2::new(1.0, 1.0)),
        HullVertex::new(corners[3], up, Vector2::new(0.0, 1.0)),
    ]
}

fn reflect_z(p: Point3<f64>) -> Point3<f64> {
    Point3::new(p.x, p.y, -p.z)
}

fn lerp_z(from: Point3<f64>, to: Point3<f64>, x: f64) -> f64 {
    let span = to.x - from.x;
    if span.abs() < f64::EPSILON {
        return from.z;
    }
    from.z + (x - from.x) / span * (to.z - from.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition_deck;

    fn flat_plate() -> DeckPlate {
        let silhouette: Vec<Point3<f64>> = (0..=11)
            .map(|i| Point3::new(f64::from(i), -2.13, 4.3))
            .collect();
        let centerline = silhouette
            .iter()
            .map(|p| Point3::new(p.x, p.y, 0.0))
            .collect();
        let mirror = silhouette
            .iter()
            .map(|p| Point3::new(p.x, p.y, -p.z))
            .collect();
        DeckPlate {
            silhouette,
            centerline,
            mirror,
        }
    }

    #[test]
    fn floor_tiles_cover_boxes_and_border() {
        let ctx = RenderContext::new();
        let plate = flat_plate();
        let boxes = partition_deck(&plate, 0.5);

        let buffer = build_floor_buffer(&ctx, &plate, &boxes, 0.5, 1);

        let plates = buffer
            .identifiers()
            .filter(|id| matches!(id, FloorTileId::Plate { .. }))
            .count();
        let fillers = buffer
            .identifiers()
            .filter(|id| matches!(id, FloorTileId::Filler))
            .count();

        assert_eq!(plates, boxes.len());
        assert!(fillers > 0);
        // Border fillers come in mirrored pairs.
        assert_eq!(fillers % 2, 0);
    }

    #[test]
    fn plate_tiles_addressable_by_mirrored_origin() {
        let ctx = RenderContext::new();
        let plate = flat_plate();
        let boxes = partition_deck(&plate, 0.5);
        let buffer = build_floor_buffer(&ctx, &plate, &boxes, 0.5, 0);

        let first = boxes[0];
        let id = FloorTileId::plate(Point3::new(-first.min.x, first.min.y, first.min.z), 0);
        assert!(buffer.contains(&id));

        // The unmirrored origin is not an address.
        let wrong = FloorTileId::plate(Point3::new(first.min.x + 7.0, first.min.y, first.min.z), 0);
        assert!(!buffer.contains(&wrong));
    }

    #[test]
    fn tiles_face_up_and_stay_level() {
        let ctx = RenderContext::new();
        let plate = flat_plate();
        let boxes = partition_deck(&plate, 0.5);
        let buffer = build_floor_buffer(&ctx, &plate, &boxes, 0.5, 0);

        for record in buffer.records() {
            for vertex in &record.vertices {
                assert_eq!(vertex.normal, Vector3::y());
                assert!((vertex.position.y - plate.level()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn empty_plate_builds_empty_buffer() {
        let ctx = RenderContext::new();
        let plate = DeckPlate {
            silhouette: vec![Point3::origin()],
            centerline: vec![Point3::origin()],
            mirror: vec![Point3::origin()],
        };
        let buffer = build_floor_buffer(&ctx, &plate, &[], 0.5, 0);
        assert_eq!(buffer.object_count(), 0);
    }
}
