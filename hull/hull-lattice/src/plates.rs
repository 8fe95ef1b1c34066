//! Flat deck-plate silhouettes.

use nalgebra::Point3;

use crate::lattice::Lattice;

/// The walkable floor outline of one deck.
///
/// Extracted from the deck's topmost lattice row: the outer silhouette of
/// one hull side, that same half projected flat onto the centerline
/// (z = 0), and the mirrored half of the opposite side. Y is constant
/// across all three polylines; the deck floor is level.
#[derive(Debug, Clone)]
pub struct DeckPlate {
    /// Outer silhouette, bow to stern.
    pub silhouette: Vec<Point3<f64>>,
    /// The silhouette flattened onto the centerline.
    pub centerline: Vec<Point3<f64>>,
    /// The opposite side's silhouette.
    pub mirror: Vec<Point3<f64>>,
}

impl DeckPlate {
    /// The deck's y level.
    #[must_use]
    pub fn level(&self) -> f64 {
        self.silhouette.first().map_or(0.0, |p| p.y)
    }
}

/// Extract the floor silhouette of every deck.
///
/// Deck `d`'s floor is lattice row `d * primitives_per_deck`, the top row
/// of that deck's wall band.
#[must_use]
pub fn deck_plates(
    lattice: &Lattice,
    deck_count: usize,
    primitives_per_deck: usize,
) -> Vec<DeckPlate> {
    let half = lattice.column_count() / 2;
    let mut plates = Vec::with_capacity(deck_count);

    for deck in 0..deck_count {
        let row = lattice.row(deck * primitives_per_deck);

        let mut silhouette = Vec::with_capacity(half);
        let mut centerline = Vec::with_capacity(half);
        let mut mirror = Vec::with_capacity(half);
        for v in 0..half {
            let outer = row[half + v];
            silhouette.push(outer);
            centerline.push(Point3::new(outer.x, outer.y, 0.0));
            mirror.push(row[half - v - 1]);
        }

        plates.push(DeckPlate {
            silhouette,
            centerline,
            mirror,
        });
    }

    plates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::build_lattice;
    use crate::params::LatticeParams;
    use crate::test_curves;
    use approx::assert_relative_eq;

    #[test]
    fn one_plate_per_deck() {
        let (side, top, back) = test_curves::sample_profiles();
        let params = LatticeParams::default();
        let build = build_lattice(&side, &top, &back, &params).unwrap();
        let plates = deck_plates(&build.lattice, build.deck_count, params.primitives_per_deck);

        assert_eq!(plates.len(), build.deck_count);
        for plate in &plates {
            assert_eq!(plate.silhouette.len(), build.lattice.column_count() / 2);
        }
    }

    #[test]
    fn plates_are_flat() {
        let (side, top, back) = test_curves::sample_profiles();
        let params = LatticeParams::default();
        let build = build_lattice(&side, &top, &back, &params).unwrap();
        let plates = deck_plates(&build.lattice, build.deck_count, params.primitives_per_deck);

        for (deck, plate) in plates.iter().enumerate() {
            let level = plate.level();
            for p in plate.silhouette.iter().chain(&plate.centerline) {
                assert_relative_eq!(p.y, level, epsilon = 1e-9);
            }
            // Decks step downward by the deck height.
            #[allow(clippy::cast_precision_loss)]
            let expected = -(deck as f64) * params.deck_height;
            assert_relative_eq!(level, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn centerline_is_flattened_silhouette() {
        let (side, top, back) = test_curves::sample_profiles();
        let params = LatticeParams::default();
        let build = build_lattice(&side, &top, &back, &params).unwrap();
        let plates = deck_plates(&build.lattice, build.deck_count, params.primitives_per_deck);

        for plate in &plates {
            for (s, c) in plate.silhouette.iter().zip(&plate.centerline) {
                assert_relative_eq!(s.x, c.x);
                assert_relative_eq!(c.z, 0.0);
            }
        }
    }

    #[test]
    fn interior_silhouette_has_width_below_deck_zero() {
        let (side, top, back) = test_curves::sample_profiles();
        let params = LatticeParams::default();
        let build = build_lattice(&side, &top, &back, &params).unwrap();
        let plates = deck_plates(&build.lattice, build.deck_count, params.primitives_per_deck);

        // Every deck silhouette keeps a nonzero interior width: the
        // cross-section profile starts above the deck line.
        for plate in &plates {
            let max_z = plate
                .silhouette
                .iter()
                .fold(0.0_f64, |acc, p| acc.max(p.z.abs()));
            assert!(max_z > 0.0, "deck plate has no width");
        }
    }
}
