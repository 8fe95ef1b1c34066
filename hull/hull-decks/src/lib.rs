//! Deck floor partitioning.
//!
//! Each deck's floor silhouette is divided into fixed-width axis-aligned
//! boxes approximating the (non-rectangular) hull outline. The box grid
//! drives collision/placement queries and supplies the slab boundaries
//! the panel splitter cuts along; the floor mesher then fills the grid
//! and its silhouette border with addressable floor-tile geometry.
//!
//! # Invariant
//!
//! Emitted boxes never extend past the true hull silhouette at their x
//! range: the box count per column is derived from the *smaller* of the
//! silhouette bounds interpolated at the column's two edges.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod floor;
mod partition;

pub use floor::build_floor_buffer;
pub use partition::{partition_deck, partition_decks, DeckGrid};
