//! The persisted hull state.

use hull_buffer::{RenderContext, SerializedSlotBuffer, SlotBuffer};
use hull_types::{DeckBox, FloorTileId, Point3};
use serde::{Deserialize, Serialize};

use crate::attributes::ShipAttributes;
use crate::decks::DeckSet;
use crate::generate::HullGeometry;
use crate::walls::{WallSection, WallSectionSet};

/// The wall side of the persisted hull state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedWallSet {
    /// Number of decks.
    pub deck_count: usize,
    /// The section table.
    pub sections: Vec<WallSection>,
    /// Per-deck wall buffers in flat form.
    pub buffers: Vec<SerializedSlotBuffer<u32>>,
}

/// The deck side of the persisted hull state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedDeckSet {
    /// Number of decks.
    pub deck_count: usize,
    /// Per-deck floor buffers in flat form.
    pub buffers: Vec<SerializedSlotBuffer<FloorTileId>>,
    /// Per-deck partition boxes.
    pub boxes_by_deck: Vec<Vec<DeckBox>>,
    /// Per-deck box-corner vertices.
    pub corner_points_by_deck: Vec<Vec<Point3<f64>>>,
}

/// A complete hull, ready for persistence.
///
/// Captures the buffer contents (identifier, slot offset, indices,
/// vertices, enabled flag) per deck, the partition grids and floor
/// vertex lists, and the global scalar attributes. Loading rebuilds the
/// in-memory structures with identical addressing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedHull {
    /// Global scalar attributes.
    pub attributes: ShipAttributes,
    /// Slab and partition-box width.
    pub wall_resolution: f64,
    /// Grid extent of the partition space, in boxes.
    pub max_box_dims: (u32, u32),
    /// Wall buffers and sections.
    pub walls: SerializedWallSet,
    /// Floor buffers and grids.
    pub decks: SerializedDeckSet,
}

impl WallSectionSet {
    /// Extract the wall set's persistable form.
    #[must_use]
    pub fn to_serialized(&self) -> SerializedWallSet {
        SerializedWallSet {
            deck_count: self.deck_count(),
            sections: self.sections().to_vec(),
            buffers: self.buffers().iter().map(SlotBuffer::to_serialized).collect(),
        }
    }

    /// Rebuild a wall set, registering its buffers with the context.
    #[must_use]
    pub fn from_serialized(ctx: &RenderContext, serialized: &SerializedWallSet) -> Self {
        let buffers = serialized
            .buffers
            .iter()
            .map(|b| SlotBuffer::from_serialized(ctx, b))
            .collect();
        Self::new(buffers, serialized.sections.clone())
    }
}

impl DeckSet {
    /// Extract the deck set's persistable form.
    #[must_use]
    pub fn to_serialized(&self) -> SerializedDeckSet {
        SerializedDeckSet {
            deck_count: self.deck_count(),
            buffers: self.buffers().iter().map(SlotBuffer::to_serialized).collect(),
            boxes_by_deck: self.boxes_by_deck().to_vec(),
            corner_points_by_deck: self.corner_points_by_deck().to_vec(),
        }
    }

    /// Rebuild a deck set, registering its buffers with the context.
    #[must_use]
    pub fn from_serialized(ctx: &RenderContext, serialized: &SerializedDeckSet) -> Self {
        let buffers = serialized
            .buffers
            .iter()
            .map(|b| SlotBuffer::from_serialized(ctx, b))
            .collect();
        Self::new(
            buffers,
            serialized.boxes_by_deck.clone(),
            serialized.corner_points_by_deck.clone(),
        )
    }
}

impl HullGeometry {
    /// Extract the hull's full persistable state.
    #[must_use]
    pub fn to_serialized(&self) -> SerializedHull {
        SerializedHull {
            attributes: self.attributes.clone(),
            wall_resolution: self.wall_resolution,
            max_box_dims: self.max_box_dims,
            walls: self.walls.to_serialized(),
            decks: self.decks.to_serialized(),
        }
    }

    /// Rebuild a hull from its persisted state.
    ///
    /// Buffer identifiers come back addressable at the same slot offsets
    /// they held when saved.
    #[must_use]
    pub fn from_serialized(ctx: &RenderContext, serialized: &SerializedHull) -> Self {
        let attributes = serialized.attributes.clone();
        Self {
            center_point: attributes.centroid,
            deck_count: attributes.deck_count,
            deck_height: attributes.deck_height,
            wall_resolution: serialized.wall_resolution,
            max_box_dims: serialized.max_box_dims,
            walls: WallSectionSet::from_serialized(ctx, &serialized.walls),
            decks: DeckSet::from_serialized(ctx, &serialized.decks),
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_hull;
    use crate::params::HullParams;
    use crate::test_curves::sample_profiles;

    fn generated() -> (RenderContext, HullGeometry) {
        let (side, top, back) = sample_profiles();
        let ctx = RenderContext::new();
        let hull = generate_hull(&side, &top, &back, &ctx, &HullParams::default()).unwrap();
        (ctx, hull)
    }

    #[test]
    fn hull_round_trip_preserves_addressing() {
        let (ctx, mut hull) = generated();

        // Mix enabled and disabled panels before saving.
        let toggled: Vec<_> = hull.walls.sections()[..4]
            .iter()
            .map(|s| s.id)
            .collect();
        for id in &toggled {
            assert!(hull.walls.set_panel_enabled(id, false));
        }

        let serialized = hull.to_serialized();
        let restored = HullGeometry::from_serialized(&ctx, &serialized);

        assert_eq!(restored.deck_count, hull.deck_count);
        assert_eq!(restored.walls.sections().len(), hull.walls.sections().len());

        for deck in 0..hull.deck_count {
            let a = hull.walls.buffer(deck);
            let b = restored.walls.buffer(deck);
            assert_eq!(a.object_count(), b.object_count());
            assert_eq!(a.raw_indices(), b.raw_indices());
            for (ra, rb) in a.records().iter().zip(b.records()) {
                assert_eq!(ra.identifier, rb.identifier);
                assert_eq!(ra.slot, rb.slot);
                assert_eq!(ra.enabled, rb.enabled);
            }
        }

        // The disabled panels are still disabled, and re-enabling works.
        let mut restored = restored;
        for id in &toggled {
            assert!(restored.walls.set_panel_enabled(id, true));
        }
    }

    #[test]
    fn bincode_round_trip() {
        let (ctx, hull) = generated();

        let bytes = bincode::serialize(&hull.to_serialized()).unwrap();
        let parsed: SerializedHull = bincode::deserialize(&bytes).unwrap();
        let restored = HullGeometry::from_serialized(&ctx, &parsed);

        assert_eq!(restored.deck_count, hull.deck_count);
        assert_eq!(
            restored.decks.boxes_by_deck().len(),
            hull.decks.boxes_by_deck().len()
        );
        assert_eq!(restored.max_box_dims, hull.max_box_dims);
    }

    #[test]
    fn floor_buffers_round_trip() {
        let (ctx, hull) = generated();
        let serialized = hull.decks.to_serialized();
        let restored = DeckSet::from_serialized(&ctx, &serialized);

        for deck in 0..hull.decks.deck_count() {
            assert_eq!(
                restored.buffer(deck).object_count(),
                hull.decks.buffer(deck).object_count()
            );
            assert_eq!(restored.boxes(deck), hull.decks.boxes(deck));
        }
    }
}
