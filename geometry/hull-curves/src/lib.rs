//! Profile curves for parametric hull generation.
//!
//! A hull is described by three 2D profiles (side, top and cross-section),
//! each an ordered sequence of [`CurvePoint`]s joined by cubic Bézier
//! segments. The curves are not analytically invertible, so inversion
//! ("given one coordinate, solve for the other") goes through a
//! [`SampledCurve`]: a dense polyline approximation built once per curve,
//! queried by scanning for crossings.
//!
//! # Coordinate Conventions
//!
//! Profiles are 2D. What the axes mean depends on the profile:
//!
//! - side profile: x = longitudinal position, y = depth below the deck
//! - top profile: x = longitudinal position, y = lateral half-width
//! - cross-section profile: x = lateral offset, y = depth below the deck
//!
//! # Curve Assumptions
//!
//! Inversion relies on the "line test" assumptions of the hull generator:
//! the side profile passes the vertical line test (one y per x), and the
//! trimmed top and cross-section profiles pass their respective line tests.
//! A curve set that violates these produces the wrong number of crossings,
//! which the hull generator reports as a fatal error.
//!
//! # Example
//!
//! ```
//! use hull_curves::{CurvePoint, SampledCurve};
//!
//! // A shallow arc from (0,0) to (4,0) arching up to y = 1.5.
//! let profile = vec![
//!     CurvePoint::from_coords(0.0, 0.0, 0.0, 0.0, 1.0, 2.0),
//!     CurvePoint::from_coords(4.0, 0.0, -1.0, 2.0, 0.0, 0.0),
//! ];
//!
//! let sampled = SampledCurve::sample(&profile).unwrap();
//! // Two crossings of the horizontal line y = 1.
//! assert_eq!(sampled.solve_for_x(1.0).len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod error;
mod point;
mod sample;

pub use error::{CurveError, CurveResult};
pub use point::{cubic_point, CurvePoint};
pub use sample::SampledCurve;

// Re-export the 2D math types used throughout.
pub use nalgebra::{Point2, Vector2};
