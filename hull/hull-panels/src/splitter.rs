//! Slab-wise subdivision of wall layer geometry.

use hull_types::{HullSide, HullVertex, PanelId};
use tracing::debug;

use crate::clip::{interpolate_vertex, trace_x, winding_for};

/// One output triangle of the splitter, tagged for later addressing.
#[derive(Debug, Clone)]
pub struct SplitPanel {
    /// The triangle's vertices.
    pub vertices: [HullVertex; 3],
    /// Index order winding the triangle outward for its hull side.
    pub indices: [u32; 3],
    /// The panel this triangle belongs to.
    pub id: PanelId,
}

/// Slice one deck's wall quad strip into slab-aligned panels.
///
/// The strip is the wall geometry of a single hull side, laid out as
/// consecutive quads (four vertices each). The hull side is inferred from
/// the strip itself; the quads are regrouped into triangles, bucketed
/// into vertical sub-layers by their top edge, and every sub-layer is cut
/// into `[begin, begin + slab_width)` slabs stepping across the hull
/// length. Triangles straddling a slab boundary are re-triangulated so
/// each emitted triangle lies inside exactly one slab.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn split_layer_geometry(
    slab_width: f64,
    quad_strip: &[HullVertex],
    deck: u32,
) -> Vec<SplitPanel> {
    if quad_strip.len() < 4 {
        return Vec::new();
    }

    let side = HullSide::of_z(quad_strip[1].position.z);

    // Quads to triangles: [0,1,2] and [2,3,0] per quad.
    let mut triangles = Vec::with_capacity(quad_strip.len() / 4 * 2);
    for quad in quad_strip.chunks_exact(4) {
        triangles.push([quad[0], quad[1], quad[2]]);
        triangles.push([quad[2], quad[3], quad[0]]);
    }

    // Bucket into vertical sub-layers by top edge, preserving first-seen
    // order so layer 0 is the strip's topmost band.
    #[allow(clippy::float_cmp)]
    // Row y values are copied verbatim from the lattice, so triangles of
    // one band share bit-identical maxima.
    let layers = {
        let mut layers: Vec<(f64, Vec<[HullVertex; 3]>)> = Vec::new();
        for tri in triangles {
            let top = tri
                .iter()
                .fold(f64::NEG_INFINITY, |acc, v| acc.max(v.position.y));
            match layers.iter_mut().find(|(y, _)| *y == top) {
                Some(entry) => entry.1.push(tri),
                None => layers.push((top, vec![tri])),
            }
        }
        layers
    };

    let mut panels = Vec::new();
    for (layer_idx, (_, tris)) in layers.iter().enumerate() {
        subdivide_layer(
            slab_width,
            tris,
            layer_idx as u32,
            deck,
            side,
            &mut panels,
        );
    }

    debug!(
        deck,
        layers = layers.len(),
        panels = panels.len(),
        "wall layer split into slab panels"
    );
    panels
}

/// Cut one sub-layer's triangles into slabs.
fn subdivide_layer(
    slab_width: f64,
    triangles: &[[HullVertex; 3]],
    layer: u32,
    deck: u32,
    side: HullSide,
    out: &mut Vec<SplitPanel>,
) {
    let min_x = triangles
        .iter()
        .flatten()
        .fold(f64::INFINITY, |acc, v| acc.min(v.position.x));
    let max_x = triangles
        .iter()
        .flatten()
        .fold(f64::NEG_INFINITY, |acc, v| acc.max(v.position.x));

    // Align the first slab to the slab-width grid at or below min_x.
    let mut begin = 0.0;
    while begin + slab_width < min_x {
        begin += slab_width;
    }
    let mut end = begin + slab_width;

    while begin < max_x {
        let id = PanelId::new(begin, layer, side, deck);

        for tri in triangles {
            let enclosed = [
                is_enclosed(&tri[0], begin, end),
                is_enclosed(&tri[1], begin, end),
                is_enclosed(&tri[2], begin, end),
            ];
            let count = enclosed.iter().filter(|&&e| e).count();

            if !is_relevant(tri, count, begin, end) {
                continue;
            }

            let pieces = match count {
                0 => slice_zero_enclosure(tri, begin, end),
                1 => slice_single_enclosure(tri, &enclosed, begin, end),
                2 => slice_double_enclosure(tri, &enclosed, begin, end),
                _ => vec![*tri],
            };

            for vertices in pieces {
                out.push(SplitPanel {
                    indices: winding_for(&vertices, side),
                    vertices,
                    id,
                });
            }
        }

        begin += slab_width;
        end += slab_width;
    }
}

fn is_enclosed(v: &HullVertex, begin: f64, end: f64) -> bool {
    v.position.x >= begin && v.position.x <= end
}

/// A triangle matters for this slab if a vertex falls inside it or the
/// triangle engulfs it entirely.
fn is_relevant(tri: &[HullVertex; 3], enclosed_count: usize, begin: f64, end: f64) -> bool {
    if enclosed_count > 0 {
        return true;
    }
    let past_end = tri.iter().any(|v| v.position.x >= end);
    let before_begin = tri.iter().any(|v| v.position.x <= begin);
    past_end && before_begin
}

/// No vertex inside the slab: the triangle straddles both boundaries.
///
/// The lone "anchor" vertex sits on one side, the two "satellites" on the
/// other; both satellites are interpolated against the anchor at both
/// boundaries, and the strip between the boundaries becomes two
/// triangles.
fn slice_zero_enclosure(
    tri: &[HullVertex; 3],
    begin: f64,
    end: f64,
) -> Vec<[HullVertex; 3]> {
    let high: Vec<&HullVertex> = tri.iter().filter(|v| v.position.x >= end).collect();
    let low: Vec<&HullVertex> = tri.iter().filter(|v| v.position.x <= begin).collect();

    let (anchor, mut satellites, anchor_boundary, satellite_boundary) = if high.len() == 1 {
        (high[0], low, end, begin)
    } else {
        debug_assert_eq!(low.len(), 1);
        (low[0], high, begin, end)
    };

    if satellites[0].position.y < satellites[1].position.y {
        satellites.swap(0, 1);
    }

    let s1 = interpolate_vertex(
        satellites[0],
        anchor,
        trace_x(satellites[0].position, anchor.position, satellite_boundary),
    );
    let s2 = interpolate_vertex(
        satellites[1],
        anchor,
        trace_x(satellites[1].position, anchor.position, satellite_boundary),
    );
    let a1 = interpolate_vertex(
        satellites[0],
        anchor,
        trace_x(satellites[0].position, anchor.position, anchor_boundary),
    );
    let a2 = interpolate_vertex(
        satellites[1],
        anchor,
        trace_x(satellites[1].position, anchor.position, anchor_boundary),
    );

    vec![[s1, a1, s2], [a2, s2, a1]]
}

/// One vertex inside the slab.
///
/// Both outer vertices on the same side clip to a single triangle; outer
/// vertices on opposite sides produce three, with the middle "connector"
/// triangle built from the two interpolants farthest from the inside
/// vertex.
fn slice_single_enclosure(
    tri: &[HullVertex; 3],
    enclosed: &[bool; 3],
    begin: f64,
    end: f64,
) -> Vec<[HullVertex; 3]> {
    let middle = pick(tri, enclosed, true)[0];
    let outer = pick(tri, enclosed, false);
    let left: Vec<&HullVertex> = outer
        .iter()
        .copied()
        .filter(|v| v.position.x > end)
        .collect();
    let right: Vec<&HullVertex> = outer
        .iter()
        .copied()
        .filter(|v| v.position.x < begin)
        .collect();

    if left.len() != 1 {
        // Both outer vertices straddle the same boundary.
        let (anchors, limit) = if left.len() == 2 {
            (left, end)
        } else {
            (right, begin)
        };
        let i1 = interpolate_vertex(
            anchors[0],
            middle,
            trace_x(anchors[0].position, middle.position, limit),
        );
        let i2 = interpolate_vertex(
            anchors[1],
            middle,
            trace_x(anchors[1].position, middle.position, limit),
        );
        return vec![[i1, *middle, i2]];
    }

    let far_left = left[0];
    let far_right = right[0];

    let l1 = interpolate_vertex(
        far_left,
        middle,
        trace_x(far_left.position, middle.position, end),
    );
    let l2 = interpolate_vertex(
        far_left,
        far_right,
        trace_x(far_left.position, far_right.position, end),
    );
    let r1 = interpolate_vertex(
        far_right,
        middle,
        trace_x(far_right.position, middle.position, begin),
    );
    let r2 = interpolate_vertex(
        far_right,
        far_left,
        trace_x(far_right.position, far_left.position, begin),
    );

    // The connector uses, from each boundary, the interpolant farthest
    // from the inside vertex.
    let connect_l = if dist(&l1, middle) < dist(&l2, middle) {
        l2
    } else {
        l1
    };
    let connect_r = if dist(&r1, middle) < dist(&r2, middle) {
        r2
    } else {
        r1
    };

    vec![
        [r1, r2, *middle],
        [l1, l2, *middle],
        [connect_l, connect_r, *middle],
    ]
}

/// Two vertices inside the slab: clip the lone outside vertex.
fn slice_double_enclosure(
    tri: &[HullVertex; 3],
    enclosed: &[bool; 3],
    begin: f64,
    end: f64,
) -> Vec<[HullVertex; 3]> {
    let middle = pick(tri, enclosed, true);
    let outside = pick(tri, enclosed, false)[0];

    let limit = if outside.position.x > end { end } else { begin };

    let i1 = interpolate_vertex(
        outside,
        middle[0],
        trace_x(outside.position, middle[0].position, limit),
    );
    let i2 = interpolate_vertex(
        outside,
        middle[1],
        trace_x(outside.position, middle[1].position, limit),
    );

    vec![[i1, i2, *middle[0]], [*middle[0], *middle[1], i2]]
}

fn pick<'a>(tri: &'a [HullVertex; 3], enclosed: &[bool; 3], want: bool) -> Vec<&'a HullVertex> {
    tri.iter()
        .zip(enclosed)
        .filter(|(_, &e)| e == want)
        .map(|(v, _)| v)
        .collect()
}

fn dist(a: &HullVertex, b: &HullVertex) -> f64 {
    (a.position - b.position).norm()
}
