//! Circular arc curve.

use serde::{Deserialize, Serialize};
use stg_core::{Result, StairError};
use stg_math::{DVec3, Point3, Vector3};

use super::Curve;

/// A circular arc, parameterized by angle over `[first_angle, last_angle]`.
///
/// The arc lies in the plane through `center` with normal `axis`; the
/// reference direction for angle 0 is derived from the axis by
/// `local_frame`: for a +Z axis angle 0 points along +Y and angles grow
/// towards -X. An axis with negative z yields clockwise travel when
/// viewed from +Z, which is what downstream helix handedness keys on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point3,
    pub axis: Vector3,
    pub radius: f64,
    pub first_angle: f64,
    pub last_angle: f64,
}

impl Arc {
    pub fn new(
        center: Point3,
        axis: Vector3,
        radius: f64,
        first_angle: f64,
        last_angle: f64,
    ) -> Result<Self> {
        if radius <= 0.0 || !radius.is_finite() {
            return Err(StairError::InvalidBaseShape(format!(
                "arc radius must be positive, got {radius}"
            )));
        }
        if !(last_angle > first_angle) {
            return Err(StairError::InvalidBaseShape(format!(
                "arc angle window must be increasing, got [{first_angle}, {last_angle}]"
            )));
        }
        Ok(Self {
            center,
            axis: axis.normalize(),
            radius,
            first_angle,
            last_angle,
        })
    }

    /// Angular sweep of the arc (always positive).
    pub fn sweep(&self) -> f64 {
        self.last_angle - self.first_angle
    }

    /// Compute an orthonormal frame (u_axis, v_axis) in the arc plane.
    pub(crate) fn local_frame(&self) -> (DVec3, DVec3) {
        let n = self.axis;
        // Choose a vector not parallel to the axis to build the frame
        let ref_vec = if n.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
        let u = n.cross(ref_vec).normalize();
        let v = n.cross(u).normalize();
        (u, v)
    }

    pub fn start(&self) -> Point3 {
        self.point_at(self.first_angle)
    }

    pub fn end(&self) -> Point3 {
        self.point_at(self.last_angle)
    }

    /// The same arc traversed end-to-start.
    ///
    /// Flipping the axis negates the frame's u direction and keeps v, so
    /// an angle `t` on the original shows up as `PI - t` on the flipped
    /// frame; the reversed window is `[PI - last, PI - first]`.
    pub fn reversed(&self) -> Self {
        Self {
            center: self.center,
            axis: -self.axis,
            radius: self.radius,
            first_angle: std::f64::consts::PI - self.last_angle,
            last_angle: std::f64::consts::PI - self.first_angle,
        }
    }
}

impl Curve for Arc {
    fn point_at(&self, t: f64) -> Point3 {
        let (u, v) = self.local_frame();
        self.center + self.radius * (t.cos() * u + t.sin() * v)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let (u, v) = self.local_frame();
        -t.sin() * u + t.cos() * v
    }

    fn domain(&self) -> (f64, f64) {
        (self.first_angle, self.last_angle)
    }

    fn length(&self) -> f64 {
        self.radius * self.sweep()
    }
}
