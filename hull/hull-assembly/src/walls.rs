//! Wall panel buffers and hull sections.

use hashbrown::HashMap;
use hull_buffer::{FaceCulling, SlotBuffer};
use hull_types::{HullVertex, PanelId, Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// One addressable section of the hull wall.
///
/// Carries the section's uid (the buffer key), its panel identifier and a
/// coarse six-vertex outline recovered from the section's extreme top and
/// bottom vertices, enough for picking and hit tests without touching
/// the full geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSection {
    /// Buffer key of this section.
    pub uid: u32,
    /// The section's addressing identifier.
    pub id: PanelId,
    /// Owning deck.
    pub deck: u32,
    /// Coarse quad outline (two triangles' worth of corners).
    pub aliased_vertices: [Point3<f64>; 6],
}

/// The hull wall: per-deck panel buffers plus the section table.
#[derive(Debug)]
pub struct WallSectionSet {
    buffers_by_deck: Vec<SlotBuffer<u32>>,
    sections: Vec<WallSection>,
    top_exposed: usize,
}

impl WallSectionSet {
    /// Assemble the wall set from its per-deck buffers and sections.
    #[must_use]
    pub fn new(buffers_by_deck: Vec<SlotBuffer<u32>>, sections: Vec<WallSection>) -> Self {
        Self {
            buffers_by_deck,
            sections,
            top_exposed: 0,
        }
    }

    /// Number of decks.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.buffers_by_deck.len()
    }

    /// The per-deck wall buffers.
    #[must_use]
    pub fn buffers(&self) -> &[SlotBuffer<u32>] {
        &self.buffers_by_deck
    }

    /// One deck's wall buffer.
    #[must_use]
    pub fn buffer(&self, deck: usize) -> &SlotBuffer<u32> {
        &self.buffers_by_deck[deck]
    }

    /// Mutable access to one deck's wall buffer.
    pub fn buffer_mut(&mut self, deck: usize) -> &mut SlotBuffer<u32> {
        &mut self.buffers_by_deck[deck]
    }

    /// All hull sections.
    #[must_use]
    pub fn sections(&self) -> &[WallSection] {
        &self.sections
    }

    /// Look a section up by its panel identifier.
    ///
    /// Identifier equality is tolerance-based on the slab start, so this
    /// is a linear scan.
    #[must_use]
    pub fn section(&self, id: &PanelId) -> Option<&WallSection> {
        self.sections.iter().find(|s| s.id == *id)
    }

    /// The currently exposed (top visible) deck index.
    #[must_use]
    pub fn top_exposed(&self) -> usize {
        self.top_exposed
    }

    /// Expose decks from `deck` downward.
    ///
    /// Wall buffers at and below the exposed deck draw both faces; the
    /// decks above switch to interior culling so the camera sees into the
    /// ship from above. Out-of-range requests leave the exposure as is.
    pub fn set_top_visible_deck(&mut self, deck: usize) -> usize {
        if deck >= self.deck_count() {
            return self.top_exposed;
        }
        for i in deck..self.deck_count() {
            self.buffers_by_deck[i].set_culling(FaceCulling::Disabled);
        }
        for i in 0..deck {
            self.buffers_by_deck[i].set_culling(FaceCulling::Interior);
        }
        self.top_exposed = deck;
        self.top_exposed
    }

    /// Toggle one panel's visibility by identifier.
    ///
    /// Returns `false` when no section matches.
    pub fn set_panel_enabled(&mut self, id: &PanelId, enabled: bool) -> bool {
        let Some(section) = self.sections.iter().find(|s| s.id == *id) else {
            return false;
        };
        let uid = section.uid;
        let deck = section.deck as usize;
        if enabled {
            self.buffers_by_deck[deck].enable(&uid)
        } else {
            self.buffers_by_deck[deck].disable(&uid)
        }
    }
}

/// Build one hull side's wall quad strip for a deck.
///
/// `levels` are the deck's lattice rows, `normals` the matching normal
/// rows for the whole lattice (offset by the deck's first row), and
/// `columns` the half-row range of this side. Texture coordinates tile by
/// hull position so the pattern continues seamlessly across slab cuts and
/// meets itself at the hull bottom.
pub(crate) fn wall_quad_strip(
    levels: &[Vec<Point3<f64>>],
    normals: &[Vec<Vector3<f64>>],
    normal_row_offset: usize,
    columns: (usize, usize),
    texture_tiling: f64,
) -> Vec<HullVertex> {
    let (start, end) = columns;
    let mut verts = Vec::with_capacity((levels.len() - 1) * (end - start - 1) * 4);

    let make = |row: usize, col: usize| {
        let pos = levels[row][col];
        HullVertex::new(
            pos,
            normals[normal_row_offset + row][col],
            Vector2::new(pos.x / texture_tiling, pos.y.abs() / texture_tiling),
        )
    };

    for row in 0..levels.len() - 1 {
        for col in start..end - 1 {
            verts.push(make(row, col));
            verts.push(make(row, col + 1));
            verts.push(make(row + 1, col + 1));
            verts.push(make(row + 1, col));
        }
    }

    verts
}

/// Recover the section table from the populated wall buffers.
///
/// Buffer records are grouped by uid; each group's vertices yield the
/// coarse aliased outline from the extreme x positions on the group's top
/// and bottom edges.
#[allow(clippy::float_cmp)]
// Band edge y values are exact copies of lattice rows, so the extreme
// scan can compare them directly.
pub(crate) fn extract_sections(
    buffers_by_deck: &[SlotBuffer<u32>],
    uid_to_id: &[PanelId],
) -> Vec<WallSection> {
    let mut verts_by_uid: HashMap<u32, Vec<Point3<f64>>> = HashMap::new();
    let mut deck_by_uid: HashMap<u32, u32> = HashMap::new();

    #[allow(clippy::cast_possible_truncation)]
    for (deck, buffer) in buffers_by_deck.iter().enumerate() {
        for record in buffer.records() {
            verts_by_uid
                .entry(record.identifier)
                .or_default()
                .extend(record.vertices.iter().map(|v| v.position));
            deck_by_uid.insert(record.identifier, deck as u32);
        }
    }

    let mut sections: Vec<WallSection> = verts_by_uid
        .into_iter()
        .map(|(uid, verts)| {
            let max_y = verts.iter().fold(f64::NEG_INFINITY, |a, v| a.max(v.y));
            let min_y = verts.iter().fold(f64::INFINITY, |a, v| a.min(v.y));

            let mut max_x_max_y = verts[0];
            let mut min_x_max_y = verts[0];
            let mut max_x_min_y = verts[0];
            let mut min_x_min_y = verts[0];
            let mut max_x_top = f64::NEG_INFINITY;
            let mut min_x_top = f64::INFINITY;
            let mut max_x_bot = f64::NEG_INFINITY;
            let mut min_x_bot = f64::INFINITY;

            for v in &verts {
                if v.y == max_y {
                    if v.x > max_x_top {
                        max_x_max_y = *v;
                        max_x_top = v.x;
                    }
                    if v.x < min_x_top {
                        min_x_max_y = *v;
                        min_x_top = v.x;
                    }
                }
                if v.y == min_y {
                    if v.x > max_x_bot {
                        max_x_min_y = *v;
                        max_x_bot = v.x;
                    }
                    if v.x < min_x_bot {
                        min_x_min_y = *v;
                        min_x_bot = v.x;
                    }
                }
            }

            WallSection {
                uid,
                id: uid_to_id[uid as usize],
                deck: deck_by_uid[&uid],
                aliased_vertices: [
                    max_x_max_y,
                    min_x_max_y,
                    min_x_min_y,
                    max_x_max_y,
                    max_x_min_y,
                    min_x_min_y,
                ],
            }
        })
        .collect();

    sections.sort_unstable_by_key(|s| s.uid);
    sections
}
