//! Sweep cross-section profiles.

use serde::{Deserialize, Serialize};
use stg_math::{Point3, DVec3};

/// A closed 2-D cross-section in the XY plane, swept along a spine to
/// form the support beam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Profile {
    Circle { radius: f64 },
    Rectangle { x_dim: f64, y_dim: f64 },
    Arbitrary { points: Vec<Point3> },
}

impl Profile {
    /// Default support cross-section: a 20-radius circle.
    pub fn default_support() -> Self {
        Profile::Circle { radius: 20.0 }
    }

    /// Counter-clockwise boundary points of the profile, `z = 0`.
    pub fn points(&self) -> Vec<Point3> {
        match self {
            Profile::Rectangle { x_dim, y_dim } => {
                let hx = x_dim / 2.0;
                let hy = y_dim / 2.0;
                vec![
                    DVec3::new(-hx, -hy, 0.0),
                    DVec3::new(hx, -hy, 0.0),
                    DVec3::new(hx, hy, 0.0),
                    DVec3::new(-hx, hy, 0.0),
                ]
            }
            Profile::Circle { radius } => {
                // Approximate circle with 32 segments
                let n = 32;
                (0..n)
                    .map(|i| {
                        let angle = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
                        DVec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
                    })
                    .collect()
            }
            Profile::Arbitrary { points } => points
                .iter()
                .map(|p| DVec3::new(p.x, p.y, 0.0))
                .collect(),
        }
    }
}
