//! The full hull generation pass.

use hashbrown::HashMap;
use hull_buffer::{RenderContext, SlotBuffer};
use hull_curves::CurvePoint;
use hull_decks::{build_floor_buffer, partition_decks};
use hull_lattice::{build_lattice, centroid_of, deck_plates, generate_normals};
use hull_panels::split_layer_geometry;
use hull_types::{HullSide, HullVertex, PanelId, Point3};
use tracing::info;

use crate::attributes::ShipAttributes;
use crate::decks::DeckSet;
use crate::error::{GenerationError, GenerationResult};
use crate::params::HullParams;
use crate::walls::{extract_sections, wall_quad_strip, WallSectionSet};

/// Everything a generation pass produces.
///
/// The buffers inside are long-lived and mutated by external tools; the
/// scalars and grids are immutable once generated.
#[derive(Debug)]
pub struct HullGeometry {
    /// The hull's (approximate) center point, in final coordinates.
    pub center_point: Point3<f64>,
    /// Number of decks.
    pub deck_count: usize,
    /// Vertical extent of one deck.
    pub deck_height: f64,
    /// Slab and partition-box width.
    pub wall_resolution: f64,
    /// Grid extent of the partition space, in boxes: (length, berth).
    pub max_box_dims: (u32, u32),
    /// Global ship attributes.
    pub attributes: ShipAttributes,
    /// Wall panel buffers and sections.
    pub walls: WallSectionSet,
    /// Deck floor buffers and partition grids.
    pub decks: DeckSet,
}

/// Generate a complete hull from the three profile curve sets.
///
/// Runs the whole pipeline: lattice, normals and centroid, deck plates,
/// partition grids, floor buffers, wall texcoords, the panel splitter and
/// the per-deck wall buffers, finishing with the x mirror that puts the
/// ship in its final orientation. The resulting buffers are registered
/// with the given render context and already staged for upload.
///
/// # Errors
///
/// Any curve-set malformation aborts generation; see
/// [`GenerationError`]. There is no partial hull.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn generate_hull(
    side: &[CurvePoint],
    top: &[CurvePoint],
    back: &[CurvePoint],
    ctx: &RenderContext,
    params: &HullParams,
) -> GenerationResult<HullGeometry> {
    let started = std::time::Instant::now();
    let slab_width = params.lattice.slab_width;
    let ppd = params.lattice.primitives_per_deck;

    let build = build_lattice(side, top, back, &params.lattice)?;
    let normals = generate_normals(&build.lattice);
    let centroid = centroid_of(&build.lattice);
    let plates = deck_plates(&build.lattice, build.deck_count, ppd);
    let grid = partition_decks(&plates, slab_width);

    // Floor geometry per deck.
    let mut floor_buffers = Vec::with_capacity(build.deck_count);
    for deck in 0..build.deck_count {
        floor_buffers.push(build_floor_buffer(
            ctx,
            &plates[deck],
            &grid.boxes_by_deck[deck],
            slab_width,
            deck as u32,
        ));
    }

    // The uid table: one key per (slab, sub-layer, side, deck)
    // combination the splitter can produce.
    let (uid_table, uid_to_id) = build_uid_table(build.length, build.deck_count, ppd, slab_width);

    // Wall geometry: quad strips per side, split into slab panels, keyed
    // into one buffer per deck.
    let columns = build.lattice.column_count();
    let half = columns / 2;
    let mut wall_buffers = Vec::with_capacity(build.deck_count);
    for deck in 0..build.deck_count {
        let levels = build.deck_levels(deck);

        let mut panels = Vec::new();
        for range in [(0, half), (half, columns)] {
            let strip = wall_quad_strip(
                levels,
                &normals,
                deck * ppd,
                range,
                params.texture_tiling,
            );
            panels.extend(split_layer_geometry(slab_width, &strip, deck as u32));
        }

        let mut buffer: SlotBuffer<u32> = SlotBuffer::new(ctx, panels.len(), 1, 3, 3);
        buffer.set_manual_update(true);
        for panel in &panels {
            let uid = lookup_uid(&uid_table, &panel.id, slab_width).ok_or_else(|| {
                GenerationError::PanelLookup {
                    x_start: panel.id.x_start,
                    layer: panel.id.layer,
                    deck: panel.id.deck,
                }
            })?;
            buffer.add(uid, &panel.indices, &panel.vertices);
        }
        buffer.commit();
        buffer.set_manual_update(false);
        wall_buffers.push(buffer);
    }

    // Final orientation: mirror everything across the x axis.
    for buffer in &mut wall_buffers {
        buffer.apply_transform(HullVertex::mirrored_x);
    }
    for buffer in &mut floor_buffers {
        buffer.apply_transform(HullVertex::mirrored_x);
    }
    let boxes_by_deck: Vec<_> = grid
        .boxes_by_deck
        .iter()
        .map(|boxes| boxes.iter().map(hull_types::DeckBox::reflected_x).collect())
        .collect();
    let corner_points_by_deck: Vec<_> = grid
        .corner_points_by_deck
        .iter()
        .map(|points| {
            points
                .iter()
                .map(|p| Point3::new(-p.x, p.y, p.z))
                .collect()
        })
        .collect();
    let center_point = Point3::new(-centroid.x, centroid.y, centroid.z);

    let sections = extract_sections(&wall_buffers, &uid_to_id);

    let attributes = ShipAttributes::from_geometry(
        build.length,
        build.berth,
        build.draft,
        build.deck_count,
        params.lattice.deck_height,
        center_point,
    );

    info!(
        decks = build.deck_count,
        sections = sections.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "hull generated"
    );

    Ok(HullGeometry {
        center_point,
        deck_count: build.deck_count,
        deck_height: params.lattice.deck_height,
        wall_resolution: slab_width,
        max_box_dims: (
            (build.length / slab_width) as u32,
            (build.berth / slab_width) as u32,
        ),
        attributes,
        walls: WallSectionSet::new(wall_buffers, sections),
        decks: DeckSet::new(floor_buffers, boxes_by_deck, corner_points_by_deck),
    })
}

type UidKey = (i64, u32, HullSide, u32);

/// Enumerate every addressable panel of the hull, in slab-major order.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn build_uid_table(
    length: f64,
    deck_count: usize,
    primitives_per_deck: usize,
    slab_width: f64,
) -> (HashMap<UidKey, u32>, Vec<PanelId>) {
    let mut table = HashMap::new();
    let mut uid_to_id = Vec::new();

    let mut x = 0.0;
    while x < length {
        for deck in 0..deck_count as u32 {
            for layer in 0..primitives_per_deck as u32 {
                for hull_side in [HullSide::Port, HullSide::Starboard] {
                    let uid = uid_to_id.len() as u32;
                    table.insert((quantize(x, slab_width), layer, hull_side, deck), uid);
                    uid_to_id.push(PanelId::new(x, layer, hull_side, deck));
                }
            }
        }
        x += slab_width;
    }

    (table, uid_to_id)
}

fn lookup_uid(table: &HashMap<UidKey, u32>, id: &PanelId, slab_width: f64) -> Option<u32> {
    table
        .get(&(quantize(id.x_start, slab_width), id.layer, id.side, id.deck))
        .copied()
}

/// Slab starts are multiples of the slab width; snapping to the grid
/// index makes them exact hash keys.
#[allow(clippy::cast_possible_truncation)]
fn quantize(x: f64, slab_width: f64) -> i64 {
    (x / slab_width).round() as i64
}
