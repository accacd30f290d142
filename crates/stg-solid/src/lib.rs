//! StairGen solids: faceted shells, step slabs, clipping, sweeps, and
//! the shape-kernel seam towards the CAD host.

pub mod clip;
pub mod kernel;
pub mod profile;
pub mod slab;
pub mod solid;
pub mod sweep;

pub use kernel::{FacetKernel, ShapeKernel};
pub use profile::Profile;
pub use slab::{make_slab, vertical_face};
pub use solid::{FacetSolid, Shell};
