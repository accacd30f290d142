//! Path skewing: turn a flat base path into the stairs' neutral line.

use stg_core::{Result, StairError, Tolerance};
use stg_math::Point3;

use crate::curve::{Curve, Helix, Polyline};
use crate::multicurve::MultiCurve;
use crate::segment::Segment;

/// Skew a flat, connected base path so it climbs `height` over its full
/// length.
///
/// Polylines become sloped polylines (elevation distributed linearly
/// across their vertices); arcs become helices whose pitch covers the
/// segment's share of the climb. With `reversed` the profile starts at
/// `base z + height` and descends.
///
/// Segments that are already helical cannot appear in a flat base path
/// and fail hard.
pub fn skew(
    base: &[Segment],
    height: f64,
    reversed: bool,
    tol: Tolerance,
) -> Result<MultiCurve> {
    if base.is_empty() {
        return Err(StairError::EmptyPath("no segments to skew".into()));
    }
    if !height.is_finite() {
        return Err(StairError::InvalidParameter(format!(
            "skew height must be finite, got {height}"
        )));
    }

    let total: f64 = base.iter().map(|s| s.length()).sum();
    if tol.is_zero(total) {
        return Err(StairError::EmptyPath(
            "base path has zero length".into(),
        ));
    }

    let base_z = base[0].start().z;
    let (mut h0, slope) = if reversed {
        (base_z + height, -height / total)
    } else {
        (base_z, height / total)
    };

    let mut skewed = Vec::with_capacity(base.len());
    for seg in base {
        let h1 = h0 + slope * seg.length();
        let out = match seg {
            Segment::Polyline(p) => {
                let pts = p.points();
                let dh = (h1 - h0) / (pts.len() - 1) as f64;
                let lifted: Vec<Point3> = pts
                    .iter()
                    .enumerate()
                    .map(|(i, v)| Point3::new(v.x, v.y, h0 + i as f64 * dh))
                    .collect();
                Segment::Polyline(Polyline::new(lifted)?)
            }
            Segment::Arc(a) => {
                let dz_per_rad = (h1 - h0) / a.sweep();
                Segment::Helix(Helix::new(a.clone(), h0, dz_per_rad))
            }
            Segment::Helix(_) => {
                return Err(StairError::UnsupportedCurve(
                    "helix segment in flat base path".into(),
                ));
            }
        };
        skewed.push(out);
        h0 = h1;
    }

    MultiCurve::new(skewed)
}
