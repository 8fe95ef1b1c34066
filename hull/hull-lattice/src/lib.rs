//! Hull lattice construction.
//!
//! This crate turns three profile curve sets (side, top, cross-section)
//! into the hull's outer surface: a 2D lattice of 3D points with one row
//! per vertical station, mirrored about the centerline to cover both sides
//! of the ship. It also derives the per-vertex normals, the (intentionally
//! approximate) hull centroid and the flat deck-plate silhouettes that the
//! deck partitioner consumes.
//!
//! Generation is a single synchronous CPU pass performed once at load
//! time. All failure modes are fatal: a curve set that yields the wrong
//! number of inversions, or any NaN coordinate, aborts the pass. There is
//! no partial or degraded hull.
//!
//! # Pipeline Position
//!
//! ```text
//! curves -> lattice -> (normals, deck plates) -> (deck boxes, wall panels)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod error;
mod generate;
mod lattice;
mod normals;
mod params;
mod plates;

#[cfg(test)]
mod test_curves;

pub use error::{LatticeError, LatticeResult};
pub use generate::{build_lattice, LatticeBuild};
pub use lattice::Lattice;
pub use normals::{centroid_of, generate_normals};
pub use params::LatticeParams;
pub use plates::{deck_plates, DeckPlate};
