//! Global ship attributes.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// The scalar attributes of a generated ship model.
///
/// Geometry-derived fields come straight from the generation pass; the
/// motion limits are the fleet-wide defaults until hull analysis drives
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipAttributes {
    /// Hull length.
    pub length: f64,
    /// Hull width scalar.
    pub berth: f64,
    /// Keel depth below the deck.
    pub depth: f64,
    /// Number of decks.
    pub deck_count: usize,
    /// Vertical extent of one deck.
    pub deck_height: f64,
    /// The hull's (approximate) center point.
    pub centroid: Point3<f64>,

    /// Maximum forward velocity.
    pub max_forward_velocity: f64,
    /// Maximum reverse velocity.
    pub max_reverse_velocity: f64,
    /// Maximum ascent rate.
    pub max_ascent_rate: f64,
    /// Maximum linear acceleration.
    pub max_acceleration: f64,
    /// Maximum ascent acceleration.
    pub max_ascent_acceleration: f64,
    /// Maximum turn rate in radians per second.
    pub max_turn_speed: f64,
    /// Maximum turn acceleration in radians per second squared.
    pub max_turn_acceleration: f64,
}

impl ShipAttributes {
    /// Assemble attributes from generation scalars and default limits.
    #[must_use]
    pub fn from_geometry(
        length: f64,
        berth: f64,
        depth: f64,
        deck_count: usize,
        deck_height: f64,
        centroid: Point3<f64>,
    ) -> Self {
        Self {
            length,
            berth,
            depth,
            deck_count,
            deck_height,
            centroid,
            max_forward_velocity: 40.0,
            max_reverse_velocity: 20.0,
            max_ascent_rate: 25.0,
            max_acceleration: 10.0,
            max_ascent_acceleration: 7.0,
            max_turn_speed: 0.87265,
            max_turn_acceleration: 0.22685,
        }
    }
}
