//! End-to-end hull generation.
//!
//! This crate wires the pipeline together: profile curves go in, a
//! [`HullGeometry`] comes out. That means per-deck wall panel buffers addressable by
//! [`PanelId`], per-deck floor buffers, bounding-box grids, floor-corner
//! vertex lists, the hull centroid and the global scalars, everything an
//! external placement/editor/damage tool or renderer consumes.
//!
//! ```text
//! curves -> lattice -> (normals, plates) -> (boxes, floors)
//!                                        -> (texcoords, splitter, walls)
//!                                        -> mirrored buffers + sections
//! ```
//!
//! The full state round-trips through [`SerializedHull`] with identical
//! addressing: identifiers keep their slot offsets across save and load.
//!
//! [`PanelId`]: hull_types::PanelId

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod attributes;
mod decks;
mod error;
mod generate;
mod params;
mod serialized;
mod walls;

pub use attributes::ShipAttributes;
pub use decks::DeckSet;
pub use error::{GenerationError, GenerationResult};
pub use generate::{generate_hull, HullGeometry};
pub use params::HullParams;
pub use serialized::{SerializedDeckSet, SerializedHull, SerializedWallSet};
pub use walls::{WallSection, WallSectionSet};

#[cfg(test)]
mod test_curves;
