//! StairGen: stairs generated along an arbitrary 3-D path.
//!
//! A stair run starts from a flat base path drawn in the plane. The path
//! is chained into a connected sequence, skewed so it climbs the
//! configured elevation, then cut into riser and tread slabs that follow
//! the path's curvature. An optional housing solid trims the result, and
//! an optional support beam is swept underneath.

pub mod config;
pub mod document;
pub mod steps;
pub mod support;

pub use config::{RailType, StairConfig};
pub use document::{ChildObject, Document, ObjectId};
pub use steps::{fuse_steps, generate_steps, StepSlabs};
pub use support::build_support;

use stg_core::{Result, Tolerance};
use stg_geometry::{skew, sort_connected, MultiCurve, Segment};
use stg_math::Vector3;
use stg_solid::{FacetSolid, Profile, ShapeKernel};

/// Everything one recompute produces.
#[derive(Debug, Clone)]
pub struct StairsOutput {
    /// The fused (and housed, if a housing was given) stair solid.
    pub solid: FacetSolid,
    /// Support beam, present when the config asks for one.
    pub support: Option<FacetSolid>,
}

/// Chain an unordered set of flat segments and skew them into the
/// stairs' neutral line, climbing `elevation` over the full run.
pub fn compute_stair_path(
    base: Vec<Segment>,
    elevation: f64,
    reversed: bool,
    tol: Tolerance,
) -> Result<MultiCurve> {
    let sorted = sort_connected(base, tol)?;
    skew(&sorted, elevation, reversed, tol)
}

/// Build the stair solid (and support) for `config` along `path`.
///
/// Pure with respect to the caller's state: any error leaves whatever
/// the caller held before untouched, nothing partial escapes.
pub fn compute_stairs(
    kernel: &dyn ShapeKernel,
    path: &MultiCurve,
    config: &StairConfig,
    housing: Option<&FacetSolid>,
) -> Result<StairsOutput> {
    config.validate()?;

    let tol = Tolerance::default_precision();
    let slabs = generate_steps(path, config, None, tol)?;
    let mut solid = fuse_steps(kernel, &slabs)?;

    if let Some(housing) = housing {
        solid = kernel.common(&solid, housing)?;
    }

    let support = if config.has_support {
        let beam = build_support(
            kernel,
            path,
            Some(Profile::Rectangle {
                x_dim: 100.0,
                y_dim: 120.0,
            }),
            Vector3::ZERO,
        )?;
        Some(beam)
    } else {
        None
    };

    Ok(StairsOutput { solid, support })
}

/// Result of [`recompute`]: the stair solid plus the ids of the child
/// objects now owned by the document.
#[derive(Debug)]
pub struct RecomputeResult {
    pub solid: FacetSolid,
    pub children: Vec<ObjectId>,
}

/// Full recompute against a document: derive the path, build the
/// stairs, then swap the generated children in one step.
///
/// The document is only touched after every shape has been built, so a
/// failing recompute keeps the previous children alive.
pub fn recompute(
    doc: &mut Document,
    kernel: &dyn ShapeKernel,
    old_children: &[ObjectId],
    base: Vec<Segment>,
    config: &StairConfig,
    housing: Option<&FacetSolid>,
) -> Result<RecomputeResult> {
    let path = compute_stair_path(
        base,
        config.elevation,
        config.path_reversed,
        Tolerance::loose(),
    )?;
    let output = compute_stairs(kernel, &path, config, housing)?;

    let mut children = Vec::new();
    if let Some(support) = output.support {
        children.push(ChildObject {
            label: "support".into(),
            shape: support,
        });
    }
    let children = doc.replace_children(old_children, children);

    Ok(RecomputeResult {
        solid: output.solid,
        children,
    })
}
