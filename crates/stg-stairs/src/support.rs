//! Support beam swept under the stair path.

use stg_core::Result;
use stg_geometry::MultiCurve;
use stg_math::Vector3;
use stg_solid::{FacetSolid, Profile, ShapeKernel};

/// Sweeps `profile` along the stair path and translates the result by
/// `offset`. Without a profile a 20 mm radius circle is used.
///
/// The spine is traversed from the top of the stairs down, matching the
/// edge order the rest of the stair run is built in.
pub fn build_support(
    kernel: &dyn ShapeKernel,
    path: &MultiCurve,
    profile: Option<Profile>,
    offset: Vector3,
) -> Result<FacetSolid> {
    let profile = profile.unwrap_or_else(Profile::default_support);
    let spine = path.reversed();
    kernel.sweep_solid(&profile, offset, &spine)
}
