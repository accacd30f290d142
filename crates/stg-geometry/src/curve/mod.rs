//! Curve traits and implementations.

mod arc;
mod helix;
mod polyline;

use stg_math::{Point3, Vector3};

pub use arc::Arc;
pub use helix::Helix;
pub use polyline::Polyline;

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the unit tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Arc length of the curve over its full domain.
    fn length(&self) -> f64;
}
