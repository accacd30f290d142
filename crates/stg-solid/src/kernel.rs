//! The shape-kernel seam between the stair core and its CAD host.

use stg_core::{Result, StairError, Tolerance};
use stg_geometry::MultiCurve;
use stg_math::Vector3;

use crate::clip::clip_to_convex;
use crate::profile::Profile;
use crate::solid::FacetSolid;
use crate::sweep::sweep_along;

/// Solid-construction operations the stair generator needs from its
/// host. A CAD host with a full B-Rep kernel implements this against
/// its own booleans and sweeps; `FacetKernel` is the self-contained
/// reference implementation.
pub trait ShapeKernel {
    /// Boolean union of two solids.
    fn fuse(&self, a: FacetSolid, b: FacetSolid) -> Result<FacetSolid>;

    /// Boolean intersection, used to trim stairs to a housing.
    ///
    /// An empty intersection is an error: the caller must never commit
    /// an empty shape in place of the stairs.
    fn common(&self, subject: &FacetSolid, housing: &FacetSolid) -> Result<FacetSolid>;

    /// Sweep a profile along a spine, producing a solid translated by
    /// `offset`.
    fn sweep_solid(
        &self,
        profile: &Profile,
        offset: Vector3,
        spine: &MultiCurve,
    ) -> Result<FacetSolid>;
}

/// Reference kernel over faceted shells.
///
/// `fuse` keeps the operands' shells as a compound (step slabs abut
/// face to face, so extent and bounds match a regularized union);
/// `common` clips against convex housings; `sweep_solid` stitches a
/// faceted tube.
#[derive(Debug, Clone, Copy)]
pub struct FacetKernel {
    pub tolerance: Tolerance,
    /// Chord deviation for tessellating curved spines, in model units.
    pub chord_tolerance: f64,
}

impl Default for FacetKernel {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default_precision(),
            chord_tolerance: 1.0,
        }
    }
}

impl ShapeKernel for FacetKernel {
    fn fuse(&self, a: FacetSolid, b: FacetSolid) -> Result<FacetSolid> {
        if a.is_empty() && b.is_empty() {
            return Err(StairError::boolean("fuse", "both operands are empty"));
        }
        Ok(a.merged(b))
    }

    fn common(&self, subject: &FacetSolid, housing: &FacetSolid) -> Result<FacetSolid> {
        let disjoint = match (subject.aabb(), housing.aabb()) {
            (Some(a), Some(b)) => !a.intersects(&b),
            _ => true,
        };
        if disjoint {
            return Err(StairError::boolean(
                "common",
                "housing does not intersect the stairs",
            ));
        }
        let clipped = clip_to_convex(subject, housing, self.tolerance)?;
        if clipped.is_empty() {
            return Err(StairError::boolean(
                "common",
                "housing does not intersect the stairs",
            ));
        }
        Ok(clipped)
    }

    fn sweep_solid(
        &self,
        profile: &Profile,
        offset: Vector3,
        spine: &MultiCurve,
    ) -> Result<FacetSolid> {
        let ring = profile.points();
        let shell = sweep_along(&ring, spine, self.chord_tolerance)?;
        Ok(FacetSolid::from_shell(shell.translated(offset)))
    }
}
