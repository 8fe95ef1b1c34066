//! Shared curve fixtures for the assembly tests.

use hull_curves::CurvePoint;

/// A well-formed profile triple: draft 10, length 20, berth 8.
///
/// Same shape the lattice crate tests use: U-shaped side profile,
/// amidships-widest top profile, and a cross-section that starts above
/// the deck line and flares toward the keel. Top and cross-section carry
/// the throwaway leading point the generator drops.
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
