//! Foundation types for hull geometry.
//!
//! This crate provides the types shared by every stage of hull generation:
//!
//! - [`HullVertex`] - position + normal + texture coordinate
//! - [`HullSide`] - port/starboard classification
//! - [`PanelId`] - addressing key for wall panels
//! - [`FloorTileId`] - addressing key for deck floor tiles
//! - [`DeckBox`] - axis-aligned box of the deck partition grid
//!
//! # Coordinate System
//!
//! The generated hull uses x for the longitudinal axis (bow to stern), y
//! for the vertical axis (deck at 0, keel below at negative y) and z for
//! the lateral axis (positive toward port). All coordinates are `f64`.
//!
//! # Example
//!
//! ```
//! use hull_types::{HullSide, PanelId};
//!
//! let id = PanelId::new(3.5, 2, HullSide::Port, 1);
//! // Slab starts are compared with tolerance.
//! assert_eq!(id, PanelId::new(3.5005, 2, HullSide::Port, 1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod deck_box;
mod identifier;
mod side;
mod vertex;

pub use deck_box::DeckBox;
pub use identifier::{FloorTileId, PanelId};
pub use side::HullSide;
pub use vertex::HullVertex;

// Re-export nalgebra types for convenience.
pub use nalgebra::{Point2, Point3, Vector2, Vector3};
