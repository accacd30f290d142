//! Helix curve: a circular-arc footprint with linear elevation.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use stg_math::{Point3, Vector3};

use super::{Arc, Curve};

/// A helical segment produced by skewing a flat arc.
///
/// The footprint supplies the XY evaluation (and with it the start-angle
/// alignment and the handedness of the turn); elevation is linear in the
/// angle parameter: `z(t) = z0 + dz_per_rad * (t - first_angle)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Helix {
    pub footprint: Arc,
    pub z0: f64,
    pub dz_per_rad: f64,
}

impl Helix {
    pub fn new(footprint: Arc, z0: f64, dz_per_rad: f64) -> Self {
        Self {
            footprint,
            z0,
            dz_per_rad,
        }
    }

    /// Elevation gained over one full turn.
    pub fn pitch(&self) -> f64 {
        self.dz_per_rad * 2.0 * PI
    }

    /// Elevation gained over the helix's angular sweep.
    pub fn height(&self) -> f64 {
        self.dz_per_rad * self.footprint.sweep()
    }

    /// Left-handed iff the footprint axis points below the XY plane.
    pub fn left_handed(&self) -> bool {
        self.footprint.axis.z < 0.0
    }

    pub fn start(&self) -> Point3 {
        self.point_at(self.footprint.first_angle)
    }

    pub fn end(&self) -> Point3 {
        self.point_at(self.footprint.last_angle)
    }

    /// The same helix traversed end-to-start (elevation runs downhill).
    pub fn reversed(&self) -> Self {
        Self {
            footprint: self.footprint.reversed(),
            z0: self.z0 + self.height(),
            dz_per_rad: -self.dz_per_rad,
        }
    }
}

impl Curve for Helix {
    fn point_at(&self, t: f64) -> Point3 {
        let p = self.footprint.point_at(t);
        let z = self.z0 + self.dz_per_rad * (t - self.footprint.first_angle);
        Point3::new(p.x, p.y, z)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        // d/dt of the footprint has magnitude radius; the vertical rate
        // is dz_per_rad, so the two combine before normalizing.
        let horiz = self.footprint.tangent_at(t) * self.footprint.radius;
        let d = Vector3::new(horiz.x, horiz.y, self.dz_per_rad);
        d.normalize()
    }

    fn domain(&self) -> (f64, f64) {
        self.footprint.domain()
    }

    fn length(&self) -> f64 {
        let arc = self.footprint.length();
        let h = self.height();
        (arc * arc + h * h).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::relative_eq;
    use stg_math::DVec3;

    fn quarter_turn(height: f64) -> Helix {
        let arc = Arc::new(DVec3::ZERO, DVec3::Z, 10.0, 0.0, PI / 2.0).unwrap();
        let dz = height / arc.sweep();
        Helix::new(arc, 0.0, dz)
    }

    #[test]
    fn test_pitch_and_height() {
        let h = quarter_turn(5.0);
        assert!(relative_eq!(h.height(), 5.0, epsilon = 1e-12));
        // pitch = height * 2*PI / sweep
        assert!(relative_eq!(h.pitch(), 5.0 * 2.0 * PI / (PI / 2.0), epsilon = 1e-12));
    }

    #[test]
    fn test_endpoint_elevations() {
        let h = quarter_turn(5.0);
        assert!(h.start().z.abs() < 1e-12);
        assert!(relative_eq!(h.end().z, 5.0, epsilon = 1e-12));
        // Footprint is untouched in XY
        let flat = h.footprint.point_at(PI / 4.0);
        let lifted = h.point_at(PI / 4.0);
        assert!((flat.x - lifted.x).abs() < 1e-12);
        assert!((flat.y - lifted.y).abs() < 1e-12);
    }

    #[test]
    fn test_handedness_follows_axis() {
        let ccw = Arc::new(DVec3::ZERO, DVec3::Z, 1.0, 0.0, PI).unwrap();
        let cw = Arc::new(DVec3::ZERO, -DVec3::Z, 1.0, 0.0, PI).unwrap();
        assert!(!Helix::new(ccw, 0.0, 1.0).left_handed());
        assert!(Helix::new(cw, 0.0, 1.0).left_handed());
    }

    #[test]
    fn test_length() {
        let h = quarter_turn(3.0);
        let arc_len = 10.0 * PI / 2.0;
        let expect = (arc_len * arc_len + 9.0).sqrt();
        assert!(relative_eq!(h.length(), expect, epsilon = 1e-12));
    }

    #[test]
    fn test_reversed_runs_downhill() {
        let h = quarter_turn(5.0);
        let r = h.reversed();
        assert!((r.start() - h.end()).length() < 1e-10);
        assert!((r.end() - h.start()).length() < 1e-10);
        assert!(relative_eq!(r.height(), -5.0, epsilon = 1e-12));
    }

    #[test]
    fn test_tangent_is_unit() {
        let h = quarter_turn(5.0);
        for i in 0..5 {
            let t = i as f64 * PI / 8.0;
            assert!(relative_eq!(h.tangent_at(t).length(), 1.0, epsilon = 1e-12));
        }
    }
}
