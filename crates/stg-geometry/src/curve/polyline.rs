//! Polyline curve: straight segments through an ordered point list.

use serde::{Deserialize, Serialize};
use stg_core::{Result, StairError};
use stg_math::{Point3, Vector3};

use super::Curve;

/// A chain of straight segments through `points`, parameterized by arc
/// length over `[0, length]`.
///
/// Interior vertices are kept because the skewing stage redistributes
/// elevation across them; a plain two-point line is the `points.len() == 2`
/// case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Point3>,
    cum_len: Vec<f64>,
}

impl Polyline {
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        if points.len() < 2 {
            return Err(StairError::InvalidBaseShape(format!(
                "polyline requires at least 2 points, got {}",
                points.len()
            )));
        }
        let mut cum_len = Vec::with_capacity(points.len() - 1);
        let mut total = 0.0;
        for pair in points.windows(2) {
            total += (pair[1] - pair[0]).length();
            cum_len.push(total);
        }
        Ok(Self { points, cum_len })
    }

    pub fn line(start: Point3, end: Point3) -> Self {
        // Two distinct points always satisfy the constructor.
        Self::new(vec![start, end]).expect("two-point polyline")
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn start(&self) -> Point3 {
        self.points[0]
    }

    pub fn end(&self) -> Point3 {
        *self.points.last().expect("non-empty polyline")
    }

    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self::new(points).expect("reversed polyline keeps its points")
    }

    /// Locate the sub-segment containing arc-length `t`.
    ///
    /// A `t` exactly at an interior vertex resolves to the following
    /// sub-segment, matching the multi-curve joint policy.
    fn locate(&self, t: f64) -> (usize, f64) {
        let total = self.length();
        let t = t.clamp(0.0, total);
        let i = self
            .cum_len
            .iter()
            .position(|&l| l > t)
            .unwrap_or(self.cum_len.len() - 1);
        let seg_start = if i == 0 { 0.0 } else { self.cum_len[i - 1] };
        (i, t - seg_start)
    }
}

impl Curve for Polyline {
    fn point_at(&self, t: f64) -> Point3 {
        let (i, local) = self.locate(t);
        let dir = self.points[i + 1] - self.points[i];
        let len = dir.length();
        if len <= f64::EPSILON {
            return self.points[i];
        }
        self.points[i] + dir * (local / len)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let (i, _) = self.locate(t);
        let dir = self.points[i + 1] - self.points[i];
        let len = dir.length();
        if len <= f64::EPSILON {
            Vector3::ZERO
        } else {
            dir / len
        }
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, self.length())
    }

    fn length(&self) -> f64 {
        *self.cum_len.last().expect("non-empty polyline")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stg_math::dvec3;

    #[test]
    fn test_too_few_points_rejected() {
        assert!(Polyline::new(vec![dvec3(0.0, 0.0, 0.0)]).is_err());
    }

    #[test]
    fn test_endpoints() {
        let pl = Polyline::line(dvec3(1.0, 2.0, 3.0), dvec3(4.0, 6.0, 3.0));
        assert!((pl.point_at(0.0) - pl.start()).length() < 1e-12);
        assert!((pl.point_at(pl.length()) - pl.end()).length() < 1e-12);
        assert!((pl.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_interior_vertex_parameterization() {
        let pl = Polyline::new(vec![
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 0.0, 0.0),
            dvec3(1.0, 2.0, 0.0),
        ])
        .unwrap();
        assert!((pl.length() - 3.0).abs() < 1e-12);
        let p = pl.point_at(2.0);
        assert!((p - dvec3(1.0, 1.0, 0.0)).length() < 1e-12);
        // Exactly at the joint the tangent belongs to the second segment
        let t = pl.tangent_at(1.0);
        assert!((t - dvec3(0.0, 1.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_clamping() {
        let pl = Polyline::line(dvec3(0.0, 0.0, 0.0), dvec3(2.0, 0.0, 0.0));
        assert!((pl.point_at(-5.0) - pl.start()).length() < 1e-12);
        assert!((pl.point_at(99.0) - pl.end()).length() < 1e-12);
    }

    #[test]
    fn test_reversed() {
        let pl = Polyline::new(vec![
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 0.0, 0.0),
            dvec3(1.0, 2.0, 0.0),
        ])
        .unwrap();
        let r = pl.reversed();
        assert!((r.start() - pl.end()).length() < 1e-12);
        assert!((r.end() - pl.start()).length() < 1e-12);
        assert!((r.length() - pl.length()).abs() < 1e-12);
    }
}
