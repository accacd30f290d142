//! StairGen geometry: curves, multi-segment paths, and path skewing.

pub mod curve;
pub mod multicurve;
pub mod segment;
pub mod skew;
pub mod tessellate;

pub use curve::{Arc, Curve, Helix, Polyline};
pub use multicurve::{sort_connected, MultiCurve};
pub use segment::Segment;
pub use skew::skew;
