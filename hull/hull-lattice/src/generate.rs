//! Lattice construction from the three profile curve sets.

use hull_curves::{CurvePoint, SampledCurve};
use nalgebra::Point3;
use tracing::{debug, info};

use crate::error::{LatticeError, LatticeResult};
use crate::lattice::Lattice;
use crate::params::LatticeParams;

/// Horizontal resolution divisor: one lattice column per this many slab
/// widths across the hull length.
const HORIZONTAL_DIVISOR: usize = 2;

/// The output of a lattice construction pass.
///
/// Holds the mirrored lattice plus the global scalars extracted from the
/// curve set. Immutable once built.
#[derive(Debug, Clone)]
pub struct LatticeBuild {
    /// The full mirrored lattice, deck row first.
    pub lattice: Lattice,
    /// Number of decks: `floor(draft / deck_height) + 1`.
    pub deck_count: usize,
    /// Keel depth below the deck.
    pub draft: f64,
    /// Hull width scalar from the top profile.
    pub berth: f64,
    /// Hull length from the side profile.
    pub length: f64,
    /// Vertical subdivisions per deck, as configured.
    pub primitives_per_deck: usize,
}

impl LatticeBuild {
    /// The lattice rows belonging to one deck.
    ///
    /// Deck `d` owns rows `d*ppd ..= d*ppd + ppd`: the deck's own top row
    /// plus its wall subdivisions, sharing its bottom row with the deck
    /// below.
    #[must_use]
    pub fn deck_levels(&self, deck: usize) -> &[Vec<Point3<f64>>] {
        let start = deck * self.primitives_per_deck;
        &self.lattice.rows()[start..=start + self.primitives_per_deck]
    }
}

/// Build the hull lattice from the three profile curve sets.
///
/// The curve sets follow the standard curve assumptions: the leading
/// control point of the top and cross-section profiles is dropped so the
/// trimmed curves pass their line tests, the side profile's second point
/// carries the draft, and its third carries the hull length.
///
/// The vertical stations are spaced `deck_height / primitives_per_deck`
/// apart except for the bottom partial deck, which gets its own spacing so
/// the final station lands exactly on the keel. Per station, the side
/// profile is inverted for the bow/stern intercepts; per column, the top
/// and side profiles provide width and depth scale factors for the
/// cross-section profile, whose inversion yields the lateral coordinate.
/// The half-lattice is then mirrored about the centerline, reflected so
/// the deck opening faces up, and column-reversed for consistent normal
/// generation.
///
/// # Errors
///
/// All errors are fatal (the curve set is malformed, there is no partial
/// hull): wrong intercept counts, a cross-section that fails the
/// horizontal line test, NaN coordinates, or degenerate profiles.
#[allow(clippy::too_many_lines)]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn build_lattice(
    side: &[CurvePoint],
    top: &[CurvePoint],
    back: &[CurvePoint],
    params: &LatticeParams,
) -> LatticeResult<LatticeBuild> {
    let started = std::time::Instant::now();
    check_len("side", side, 3)?;
    check_len("top", top, 3)?;
    check_len("back", back, 3)?;

    // Drop the leading control point so the trimmed curves pass the
    // vertical (top) and horizontal (cross-section) line tests.
    let top = &top[1..];
    let back = &back[1..];

    let ppd = params.primitives_per_deck;
    let meters_per_primitive = params.deck_height / ppd as f64;

    let side_sampled = SampledCurve::sample(side)?;
    let top_sampled = SampledCurve::sample(top)?;

    let draft = side[1].pos.y;
    let berth = top[1].pos.y;
    let length = side[2].pos.x;
    let deck_count = (draft / params.deck_height) as usize + 1;
    let num_vertical = (deck_count - 1) * ppd + ppd + 1;

    // Vertical stations: uniform spacing down to the last full deck, then
    // a separately computed spacing for the bottom partial deck so the
    // final station terminates exactly at the keel.
    let mut station_depths = Vec::with_capacity(num_vertical);
    for i in 0..num_vertical - ppd {
        station_depths.push(i as f64 * meters_per_primitive);
    }
    let bottom_deck = station_depths[station_depths.len() - 1];
    let bottom_prim_height = (draft - bottom_deck) / ppd as f64;
    for i in 1..=ppd {
        station_depths.push(i as f64 * bottom_prim_height + bottom_deck);
    }

    // Bow/stern intercept pair per station. A single intercept happens at
    // the hull's extremity (the keel) and is duplicated.
    let mut intercepts = Vec::with_capacity(num_vertical);
    for &depth in &station_depths {
        let mut hits = side_sampled.solve_for_x(depth);
        if hits.len() == 1 {
            hits.push(hits[0]);
        }
        if hits.len() != 2 {
            return Err(LatticeError::InterceptCount {
                depth,
                count: hits.len(),
            });
        }
        intercepts.push((hits[0], hits[1]));
    }

    let num_horizontal = {
        let mut n = ((length / params.slab_width + 1.0) as usize) / HORIZONTAL_DIVISOR;
        if n % 2 != 0 {
            n += 1;
        }
        n
    };
    debug!(
        stations = num_vertical,
        columns = num_horizontal,
        deck_count,
        "lattice resolution fixed"
    );

    // One half of the hull, row by row.
    let mut half_rows: Vec<Vec<Point3<f64>>> = Vec::with_capacity(num_vertical);
    for (row, &depth) in station_depths.iter().enumerate() {
        let (start, end) = intercepts[row];
        let x_diff = end.x - start.x;

        let mut strip = Vec::with_capacity(num_horizontal);
        for col in 0..num_horizontal {
            let tx = col as f64 / (num_horizontal - 1) as f64;
            let x_pos = tx * x_diff + start.x;

            // Depth scale from where the keel sits at this column.
            let keel = side_sampled.solve_for_y(x_pos)?;
            let depth_scale = keel.y / draft;

            // Width scale from the plan profile, relative to its leading y.
            let top_hit = top_sampled.solve_for_y(x_pos)?;
            let width_scale = (top_hit.y - top[0].pos.y) / (berth / 2.0);

            // Shrink the cross-section to this station and invert it for
            // the lateral coordinate.
            let scaled: Vec<CurvePoint> = back
                .iter()
                .map(|p| p.scaled(width_scale, depth_scale))
                .collect();
            let scaled_sampled = SampledCurve::sample(&scaled)?;
            let hits = scaled_sampled.solve_for_x(depth);
            if hits.len() != 1 {
                return Err(LatticeError::LineTest {
                    depth,
                    count: hits.len(),
                });
            }

            // The seam columns close the hull: lateral offset zero.
            let base = if col == 0 || col == num_horizontal - 1 {
                hits[0].x
            } else {
                scaled[0].pos.x
            };
            let z = if row == num_vertical - 1 {
                0.0
            } else {
                hits[0].x - base
            };

            strip.push(Point3::new(keel.x, depth, z));
        }
        half_rows.push(strip);
    }

    for (row, strip) in half_rows.iter().enumerate() {
        if strip
            .iter()
            .any(|p| p.x.is_nan() || p.y.is_nan() || p.z.is_nan())
        {
            return Err(LatticeError::NanCoordinate { row });
        }
    }

    // Mirror each half-row about the centerline: the reversed half first,
    // then the negated-z copy.
    let mut full_rows: Vec<Vec<Point3<f64>>> = Vec::with_capacity(num_vertical);
    for strip in &half_rows {
        let mut full = Vec::with_capacity(strip.len() * 2);
        full.extend(strip.iter().rev().copied());
        full.extend(strip.iter().map(|p| Point3::new(p.x, p.y, -p.z)));
        full_rows.push(full);
    }

    // Reflect vertically so the deck opening faces up, then reverse column
    // order so normal generation comes out consistent.
    for row in &mut full_rows {
        for p in row.iter_mut() {
            p.y = -p.y;
        }
        row.reverse();
    }

    let lattice = Lattice::new(full_rows);

    info!(
        rows = lattice.row_count(),
        columns = lattice.column_count(),
        deck_count,
        elapsed_ms = started.elapsed().as_millis(),
        "hull lattice built"
    );

    Ok(LatticeBuild {
        lattice,
        deck_count,
        draft,
        berth,
        length,
        primitives_per_deck: ppd,
    })
}

fn check_len(profile: &'static str, points: &[CurvePoint], min: usize) -> LatticeResult<()> {
    if points.len() < min {
        return Err(LatticeError::TooFewControlPoints {
            profile,
            min,
            actual: points.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_curves;
    use approx::assert_relative_eq;

    #[test]
    fn deck_count_from_draft() {
        let (side, top, back) = test_curves::sample_profiles();
        let build = build_lattice(&side, &top, &back, &LatticeParams::default()).unwrap();

        // draft 10, deck height 2.13: floor(10 / 2.13) + 1 = 5.
        assert_eq!(build.deck_count, 5);
        assert_relative_eq!(build.draft, 10.0);
        assert_relative_eq!(build.length, 20.0);
    }

    #[test]
    fn lattice_dimensions() {
        let (side, top, back) = test_curves::sample_profiles();
        let params = LatticeParams::default();
        let build = build_lattice(&side, &top, &back, &params).unwrap();

        let rows = build.deck_count * params.primitives_per_deck + 1;
        assert_eq!(build.lattice.row_count(), rows);

        // Columns are mirrored: twice the half-lattice resolution.
        assert_eq!(build.lattice.column_count() % 2, 0);

        // Every deck's row group is primitives_per_deck + 1 rows tall.
        for deck in 0..build.deck_count {
            assert_eq!(
                build.deck_levels(deck).len(),
                params.primitives_per_deck + 1
            );
        }
    }

    #[test]
    fn lattice_is_mirror_symmetric() {
        let (side, top, back) = test_curves::sample_profiles();
        let build = build_lattice(&side, &top, &back, &LatticeParams::default()).unwrap();

        let cols = build.lattice.column_count();
        for row in build.lattice.rows() {
            for c in 0..cols / 2 {
                let a = row[c];
                let b = row[cols - 1 - c];
                assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
                assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
                assert_relative_eq!(a.z, -b.z, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn deck_opening_faces_up() {
        let (side, top, back) = test_curves::sample_profiles();
        let build = build_lattice(&side, &top, &back, &LatticeParams::default()).unwrap();

        // Row 0 is the deck at y = 0; the keel row sits below it.
        for p in build.lattice.row(0) {
            assert_relative_eq!(p.y, 0.0);
        }
        let keel_row = build.lattice.row(build.lattice.row_count() - 1);
        for p in keel_row {
            assert_relative_eq!(p.y, -10.0, epsilon = 1e-9);
            assert_relative_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn seam_columns_are_closed() {
        let (side, top, back) = test_curves::sample_profiles();
        let build = build_lattice(&side, &top, &back, &LatticeParams::default()).unwrap();

        let cols = build.lattice.column_count();
        for row in build.lattice.rows() {
            // The half-lattice edge columns sit at the centerline; after
            // mirroring they are columns 0, half-1, half, last.
            for c in [0, cols / 2 - 1, cols / 2, cols - 1] {
                assert_relative_eq!(row[c].z, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn short_profile_rejected() {
        let (side, top, back) = test_curves::sample_profiles();
        let err = build_lattice(&side[..2], &top, &back, &LatticeParams::default()).unwrap_err();
        assert!(matches!(
            err,
            LatticeError::TooFewControlPoints { profile: "side", .. }
        ));
    }
}
