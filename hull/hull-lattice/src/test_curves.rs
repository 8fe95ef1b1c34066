//! Shared curve fixtures for the lattice tests.

use hull_curves::CurvePoint;

/// A well-formed profile triple: draft 10, length 20, berth 8.
///
/// The side profile is a U from bow (0,0) through the keel (10,10) to the
/// stern (20,0); the top profile bulges to its widest amidships; the
/// cross-section starts above the deck (so the deck row has nonzero
/// width) and flares toward the keel. The top and cross-section sets
/// carry the throwaway leading point the generator drops.
pub fn sample_profiles() -> (Vec<CurvePoint>, Vec<CurvePoint>, Vec<CurvePoint>) {
    let side = vec![
        CurvePoint::from_coords(0.0, 0.0, 0.0, 0.0, 2.0, 3.0),
        CurvePoint::from_coords(10.0, 10.0, -4.0, 0.0, 4.0, 0.0),
        CurvePoint::from_coords(20.0, 0.0, -2.0, 3.0, 0.0, 0.0),
    ];
    let top = vec![
        CurvePoint::from_coords(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        CurvePoint::from_coords(0.0, 0.0, 0.0, 0.0, 3.0, 4.0),
        CurvePoint::from_coords(10.0, 8.0, -3.0, 0.0, 3.0, 0.0),
        CurvePoint::from_coords(20.0, 0.0, -3.0, 4.0, 0.0, 0.0),
    ];
    let back = vec![
        CurvePoint::from_coords(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        CurvePoint::from_coords(0.0, -2.0, 0.0, 0.0, 3.0, 0.0),
        CurvePoint::from_coords(4.0, 10.0, 0.0, -4.0, 0.0, 0.0),
    ];
    (side, top, back)
}
