//! Step slab generation along a skewed path.
//!
//! The path is sampled at `n_risers + 1` evenly spaced parameters. Each
//! adjacent pair of samples yields one riser slab and one tread slab,
//! oriented by the horizontal projection of the path tangent. On curved
//! spans the inner half-width is clipped so neighbouring steps cannot
//! overlap past the local centre of curvature.

use stg_core::{Result, StairError, Tolerance};
use stg_geometry::MultiCurve;
use stg_math::{flatten, flatten_normalize, Point3, Vector3};
use stg_solid::{make_slab, vertical_face, FacetSolid, ShapeKernel, Shell};

use crate::config::StairConfig;

/// Slabs of one stair run, in path order.
#[derive(Debug, Clone)]
pub struct StepSlabs {
    pub risers: Vec<Shell>,
    pub treads: Vec<Shell>,
}

impl StepSlabs {
    pub fn len(&self) -> usize {
        self.risers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.risers.is_empty()
    }
}

/// Largest half-width before a step folds onto its neighbour.
///
/// `alpha` is the turn angle between two consecutive horizontal tangents
/// and `chord` the horizontal distance between the sample points. Returns
/// `None` on straight spans, where the width is unbounded.
fn max_half_width(alpha: f64, chord: f64, tol: Tolerance) -> Option<f64> {
    if tol.angle_is_zero(alpha) {
        None
    } else {
        Some(0.499 * (chord / (alpha / 2.0).sin()).abs())
    }
}

fn clamp_width(half: f64, maxw: Option<f64>) -> f64 {
    match maxw {
        Some(m) => half.min(m),
        None => half,
    }
}

/// Generates riser and tread slabs for `config` along `path`.
///
/// The path is always walked uphill: when it descends, sampling runs from
/// the far parameter backwards and the tangents are negated. `rise_override`
/// replaces the sampled per-step rise by `override / n_risers` when given.
pub fn generate_steps(
    path: &MultiCurve,
    config: &StairConfig,
    rise_override: Option<f64>,
    tol: Tolerance,
) -> Result<StepSlabs> {
    config.validate()?;
    let n = config.n_risers as usize;

    let (first, last) = (path.first_parameter(), path.last_parameter());
    let mut val: Vec<f64> = (0..=n)
        .map(|i| first + (last - first) * i as f64 / n as f64)
        .collect();

    let dz = path.value_at(val[n]).z - path.value_at(val[0]).z;
    let flip = if dz > 0.0 {
        1.0
    } else {
        val.reverse();
        -1.0
    };

    // points and uphill horizontal unit tangents at every sample
    let mut samples: Vec<(Point3, Vector3)> = Vec::with_capacity(n + 1);
    for (i, &v) in val.iter().enumerate() {
        let p = path.value_at(v);
        let t = flatten_normalize(path.tangent_at(v), tol.linear).ok_or_else(|| {
            StairError::InvalidBaseShape(format!(
                "path tangent is vertical at sample {i}, cannot orient step"
            ))
        })?;
        samples.push((p, flip * t));
    }

    let rise = match rise_override {
        Some(h) => h / n as f64,
        None => samples[1].0.z - samples[0].0.z,
    };
    let riser_height = rise - config.tread_thickness;

    let half = config.tread_width / 2.0;
    let thickness = config.tread_thickness;
    let nosing = config.tread_nosing;

    let mut risers = Vec::with_capacity(n);
    let mut treads = Vec::with_capacity(n);
    for pair in samples.windows(2) {
        let (pa, ta) = pair[0];
        let (pb, tb) = pair[1];

        let alpha = ta.angle_between(tb);
        let sense = ta.cross(ta - tb);
        let chord = flatten(pa - pb).length();
        let maxw = max_half_width(alpha, chord, tol);

        // clip the inner side of the turn only
        let (wl, wr) = if sense.z > 0.0 {
            (half, clamp_width(half, maxw))
        } else {
            (clamp_width(half, maxw), half)
        };

        let near = vertical_face(pa, ta, wl, wr, riser_height);
        let far = vertical_face(pa + ta * thickness, ta, wl, wr, riser_height);
        risers.push(make_slab(near, far));

        // tread hangs below the next riser's top edge, pushed back by the nosing
        let offs = Vector3::new(0.0, 0.0, pb.z - pa.z) - tb * nosing;
        let near = vertical_face(pa + offs, ta, wl, wr, -thickness);
        let far = vertical_face(pb + tb * thickness, tb, wl, wr, -thickness);
        treads.push(make_slab(near, far));
    }

    Ok(StepSlabs { risers, treads })
}

/// Fuses all slabs into one solid, riser then tread per step in path order.
pub fn fuse_steps(kernel: &dyn ShapeKernel, slabs: &StepSlabs) -> Result<FacetSolid> {
    if slabs.is_empty() {
        return Err(StairError::boolean("fuse", "no step slabs to fuse"));
    }
    let mut out = FacetSolid::empty();
    for (riser, tread) in slabs.risers.iter().zip(&slabs.treads) {
        out = kernel.fuse(out, FacetSolid::from_shell(riser.clone()))?;
        out = kernel.fuse(out, FacetSolid::from_shell(tread.clone()))?;
    }
    Ok(out)
}
