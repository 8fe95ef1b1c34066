//! Dense sampling and brute-force inversion of profile curves.

use nalgebra::Point2;

use crate::error::{CurveError, CurveResult};
use crate::point::{cubic_point, CurvePoint};

/// Samples taken per unit of estimated segment chord length.
///
/// Inversion accuracy is bounded by the sample spacing; this resolution
/// keeps the worst case under a centimeter at hull scale. Sampling runs
/// once per generation pass, so speed is not a concern here.
const SAMPLES_PER_UNIT: usize = 200;

/// A dense polyline approximation of a piecewise cubic profile curve.
///
/// Built once, then queried for crossings. The sample resolution is fixed
/// at build time and is not adaptive.
///
/// # Example
///
/// ```
/// use hull_curves::{CurvePoint, SampledCurve};
///
/// // Monotone descent from (0,0) to (4,10).
/// let profile = vec![
///     CurvePoint::from_coords(0.0, 0.0, 0.0, 0.0, 3.0, 0.0),
///     CurvePoint::from_coords(4.0, 10.0, 0.0, -4.0, 0.0, 0.0),
/// ];
/// let sampled = SampledCurve::sample(&profile).unwrap();
///
/// // One crossing per depth: the profile passes the horizontal line test.
/// assert_eq!(sampled.solve_for_x(5.0).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SampledCurve {
    samples: Vec<Point2<f64>>,
}

impl SampledCurve {
    /// Densely sample every cubic segment of the profile.
    ///
    /// A profile whose leading chord is zero-length degenerates to a single
    /// cached point; this happens when the hull generator scales a profile
    /// by a zero width factor at the bow or stern, and the inversion
    /// queries fall back to that single point.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::TooFewPoints`] if the profile has fewer than
    /// two control points.
    pub fn sample(profile: &[CurvePoint]) -> CurveResult<Self> {
        if profile.len() < 2 {
            return Err(CurveError::TooFewPoints {
                min: 2,
                actual: profile.len(),
            });
        }

        let mut samples = Vec::new();
        for pair in profile.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            let est_chord = (to.pos - from.pos).norm();

            if est_chord == 0.0 {
                // Degenerate profile (e.g. scaled by zero): one cached point.
                samples.push(profile[0].pos);
                return Ok(Self { samples });
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let num_points = ((est_chord as usize) * SAMPLES_PER_UNIT).max(1);

            #[allow(clippy::cast_precision_loss)]
            for point in 0..=num_points {
                let t = point as f64 / num_points as f64;
                samples.push(cubic_point(
                    from.pos,
                    from.next_handle(),
                    to.prev_handle(),
                    to.pos,
                    t,
                ));
            }
        }

        Ok(Self { samples })
    }

    /// The cached polyline samples.
    #[must_use]
    pub fn samples(&self) -> &[Point2<f64>] {
        &self.samples
    }

    /// Every point where the sampled curve crosses the horizontal line `y`.
    ///
    /// Crossings are located by walking the per-sample distance list
    /// `|sample.y - y|` and recording each decreasing-to-increasing
    /// transition, with endpoint special cases so crossings at the first or
    /// last sample are not missed.
    ///
    /// If no sample crosses the line (a vertical-tangent extremity, e.g.
    /// querying exactly the keel depth), the last cached sample is returned
    /// as the single solution; callers that need two intercepts duplicate
    /// it.
    #[must_use]
    pub fn solve_for_x(&self, y: f64) -> Vec<Point2<f64>> {
        let dist: Vec<f64> = self.samples.iter().map(|s| (s.y - y).abs()).collect();
        let mut found: Vec<Point2<f64>> = self
            .crossing_indices(&dist)
            .into_iter()
            .map(|i| self.samples[i])
            .collect();

        if found.is_empty() {
            // Extremity fallback: report the closest end of the curve.
            if let Some(last) = self.samples.last() {
                found.push(*last);
            }
        }
        found
    }

    /// The point where the sampled curve crosses the vertical line `x`.
    ///
    /// The curve is assumed to pass the vertical line test; when several
    /// crossings exist the first one wins.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NoSolution`] if no crossing is found.
    pub fn solve_for_y(&self, x: f64) -> CurveResult<Point2<f64>> {
        let dist: Vec<f64> = self.samples.iter().map(|s| (s.x - x).abs()).collect();
        self.crossing_indices(&dist)
            .first()
            .map(|&i| self.samples[i])
            .ok_or(CurveError::NoSolution { independent: x })
    }

    /// Indices of the local minima of a per-sample distance list.
    ///
    /// A crossing of the queried line shows up as the distance list
    /// switching from decreasing to increasing.
    fn crossing_indices(&self, dist: &[f64]) -> Vec<usize> {
        let mut found = Vec::new();

        if dist.len() < 2 {
            found.push(0);
            return found;
        }

        // First sample: if the distance immediately grows, the curve starts
        // on the queried line.
        let mut decreasing = if dist[1] - dist[0] > 0.0 {
            found.push(0);
            false
        } else {
            true
        };

        for i in 1..dist.len() - 1 {
            if decreasing {
                if dist[i + 1] - dist[i] > 0.0 {
                    decreasing = false;
                    found.push(i);
                }
            } else if dist[i + 1] - dist[i] < 0.0 {
                decreasing = true;
            }
        }

        // Last sample: still approaching the line when the samples run out.
        if dist[dist.len() - 1] - dist[dist.len() - 2] < 0.0 {
            found.push(dist.len() - 1);
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// U-shaped side profile: bow at (0,0), keel at (10,10), stern at (20,0).
    fn u_profile() -> Vec<CurvePoint> {
        vec![
            CurvePoint::from_coords(0.0, 0.0, 0.0, 0.0, 2.0, 3.0),
            CurvePoint::from_coords(10.0, 10.0, -4.0, 0.0, 4.0, 0.0),
            CurvePoint::from_coords(20.0, 0.0, -2.0, 3.0, 0.0, 0.0),
        ]
    }

    /// Monotone cross-section: deck center (0,0) flaring to (4,10).
    fn monotone_profile() -> Vec<CurvePoint> {
        vec![
            CurvePoint::from_coords(0.0, 0.0, 0.0, 0.0, 3.0, 0.0),
            CurvePoint::from_coords(4.0, 10.0, 0.0, -4.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn too_few_points_rejected() {
        let err = SampledCurve::sample(&u_profile()[..1]).unwrap_err();
        assert_eq!(err, CurveError::TooFewPoints { min: 2, actual: 1 });
    }

    #[test]
    fn u_profile_has_two_intercepts_mid_depth() {
        let sampled = SampledCurve::sample(&u_profile()).unwrap();
        let hits = sampled.solve_for_x(5.0);
        assert_eq!(hits.len(), 2);
        // Bow-side hit left of the keel, stern-side hit right of it.
        assert!(hits[0].x < 10.0);
        assert!(hits[1].x > 10.0);
        assert_relative_eq!(hits[0].y, 5.0, epsilon = 0.05);
        assert_relative_eq!(hits[1].y, 5.0, epsilon = 0.05);
    }

    #[test]
    fn u_profile_endpoints_found_at_surface() {
        let sampled = SampledCurve::sample(&u_profile()).unwrap();
        let hits = sampled.solve_for_x(0.0);
        assert_eq!(hits.len(), 2);
        assert_relative_eq!(hits[0].x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(hits[1].x, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn extremity_yields_single_intercept() {
        let sampled = SampledCurve::sample(&u_profile()).unwrap();
        // Exactly the keel depth: only one sample region approaches it.
        let hits = sampled.solve_for_x(10.0);
        assert_eq!(hits.len(), 1);
        assert_relative_eq!(hits[0].x, 10.0, epsilon = 0.05);
    }

    #[test]
    fn beyond_extremity_falls_back_to_last_sample() {
        let sampled = SampledCurve::sample(&monotone_profile()).unwrap();
        let hits = sampled.solve_for_x(11.0);
        assert_eq!(hits.len(), 1);
        // The last cached sample is the deep end of the profile.
        assert_relative_eq!(hits[0].y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn solve_for_y_single_valued() {
        let sampled = SampledCurve::sample(&u_profile()).unwrap();
        let p = sampled.solve_for_y(10.0).unwrap();
        assert_relative_eq!(p.y, 10.0, epsilon = 0.05);
    }

    #[test]
    fn degenerate_profile_single_cached_point() {
        let point = CurvePoint::from_coords(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let sampled = SampledCurve::sample(&[point, point]).unwrap();
        assert_eq!(sampled.samples().len(), 1);

        // Queries fall back to the single cached point.
        let hits = sampled.solve_for_x(5.0);
        assert_eq!(hits.len(), 1);
        assert_relative_eq!(hits[0], Point2::new(0.0, 0.0));
    }

    #[test]
    fn monotone_profile_inverts_uniquely() {
        let sampled = SampledCurve::sample(&monotone_profile()).unwrap();
        for depth in [1.0, 2.5, 5.0, 7.5, 9.0] {
            let hits = sampled.solve_for_x(depth);
            assert_eq!(hits.len(), 1, "depth {depth} should have one solution");
        }
    }
}
