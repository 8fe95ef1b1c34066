//! Parametric ship hull generation.
//!
//! This umbrella crate re-exports the hull workspace under one roof. The
//! pipeline turns three profile curve sets into a fully addressable hull:
//!
//! - [`curves`] - profile control points, dense sampling, inversion
//! - [`types`] - vertices, identifiers, deck boxes, hull sides
//! - [`lattice`] - the hull surface lattice, normals, deck plates
//! - [`decks`] - bounding-box partitioning and floor geometry
//! - [`panels`] - slab-wise wall splitting into tagged panels
//! - [`buffer`] - fixed-capacity addressable geometry buffers
//! - [`assembly`] - the end-to-end pass and persisted hull state
//!
//! # Quick Start
//!
//! ```no_run
//! use aerohull::prelude::*;
//!
//! # fn curves() -> (Vec<CurvePoint>, Vec<CurvePoint>, Vec<CurvePoint>) { todo!() }
//! let (side, top, back) = curves();
//! let ctx = RenderContext::new();
//!
//! let hull = generate_hull(&side, &top, &back, &ctx, &HullParams::default()).unwrap();
//!
//! // Hide a damaged panel.
//! let id = hull.walls.sections()[0].id;
//! let mut hull = hull;
//! hull.walls.set_panel_enabled(&id, false);
//!
//! // The renderer joins pending uploads before drawing.
//! ctx.flush_uploads();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Profile control points, dense sampling, inversion.
pub use hull_curves as curves;

/// Foundation types: vertices, identifiers, deck boxes, hull sides.
pub use hull_types as types;

/// Hull lattice construction, normals, deck plates.
pub use hull_lattice as lattice;

/// Deck partitioning and floor geometry.
pub use hull_decks as decks;

/// Slab-wise wall splitting.
pub use hull_panels as panels;

/// Addressable geometry buffers and the render context.
pub use hull_buffer as buffer;

/// The end-to-end generation pass and persistence shapes.
pub use hull_assembly as assembly;

/// The common imports for working with generated hulls.
pub mod prelude {
    pub use hull_assembly::{
        generate_hull, HullGeometry, HullParams, SerializedHull, ShipAttributes,
    };
    pub use hull_buffer::{RenderContext, SlotBuffer};
    pub use hull_curves::{CurvePoint, SampledCurve};
    pub use hull_lattice::LatticeParams;
    pub use hull_types::{DeckBox, FloorTileId, HullSide, HullVertex, PanelId};
}
