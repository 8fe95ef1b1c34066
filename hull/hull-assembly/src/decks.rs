//! Deck floor buffers and partition grids.

use hull_buffer::SlotBuffer;
use hull_types::{DeckBox, FloorTileId, Point3};

/// The deck side of the hull: per-deck floor buffers, partition boxes
/// and box-corner vertex lists.
#[derive(Debug)]
pub struct DeckSet {
    buffers_by_deck: Vec<SlotBuffer<FloorTileId>>,
    boxes_by_deck: Vec<Vec<DeckBox>>,
    corner_points_by_deck: Vec<Vec<Point3<f64>>>,
    top_exposed: usize,
}

impl DeckSet {
    /// Assemble the deck set.
    ///
    /// # Panics
    ///
    /// Panics if the three per-deck collections disagree in length.
    #[must_use]
    pub fn new(
        buffers_by_deck: Vec<SlotBuffer<FloorTileId>>,
        boxes_by_deck: Vec<Vec<DeckBox>>,
        corner_points_by_deck: Vec<Vec<Point3<f64>>>,
    ) -> Self {
        assert_eq!(buffers_by_deck.len(), boxes_by_deck.len());
        assert_eq!(buffers_by_deck.len(), corner_points_by_deck.len());
        Self {
            buffers_by_deck,
            boxes_by_deck,
            corner_points_by_deck,
            top_exposed: 0,
        }
    }

    /// Number of decks.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.buffers_by_deck.len()
    }

    /// The per-deck floor buffers.
    #[must_use]
    pub fn buffers(&self) -> &[SlotBuffer<FloorTileId>] {
        &self.buffers_by_deck
    }

    /// One deck's floor buffer.
    #[must_use]
    pub fn buffer(&self, deck: usize) -> &SlotBuffer<FloorTileId> {
        &self.buffers_by_deck[deck]
    }

    /// Mutable access to one deck's floor buffer.
    pub fn buffer_mut(&mut self, deck: usize) -> &mut SlotBuffer<FloorTileId> {
        &mut self.buffers_by_deck[deck]
    }

    /// One deck's partition boxes.
    #[must_use]
    pub fn boxes(&self, deck: usize) -> &[DeckBox] {
        &self.boxes_by_deck[deck]
    }

    /// Partition boxes for every deck.
    #[must_use]
    pub fn boxes_by_deck(&self) -> &[Vec<DeckBox>] {
        &self.boxes_by_deck
    }

    /// One deck's box-corner vertices (wall-selection points).
    #[must_use]
    pub fn corner_points(&self, deck: usize) -> &[Point3<f64>] {
        &self.corner_points_by_deck[deck]
    }

    /// Box-corner vertices for every deck.
    #[must_use]
    pub fn corner_points_by_deck(&self) -> &[Vec<Point3<f64>>] {
        &self.corner_points_by_deck
    }

    /// The currently exposed (top visible) deck index.
    #[must_use]
    pub fn top_exposed(&self) -> usize {
        self.top_exposed
    }

    /// Expose decks from `deck` downward.
    ///
    /// Floors at and below the exposed deck become visible; floors above
    /// it are hidden. Out-of-range requests leave the exposure as is.
    pub fn set_top_visible_deck(&mut self, deck: usize) -> usize {
        if deck >= self.deck_count() {
            return self.top_exposed;
        }
        for i in deck..self.deck_count() {
            self.buffers_by_deck[i].set_visible(true);
        }
        for i in 0..deck {
            self.buffers_by_deck[i].set_visible(false);
        }
        self.top_exposed = deck;
        self.top_exposed
    }

}
