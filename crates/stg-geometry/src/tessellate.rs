//! Tessellation utilities for converting curves to polylines.

use stg_math::Point3;

use crate::curve::Curve;
use crate::multicurve::MultiCurve;

/// Convert a curve to a polyline using adaptive subdivision.
///
/// The algorithm recursively subdivides segments where the midpoint
/// deviation from the chord exceeds the given `tolerance`.
pub fn curve_to_polyline(curve: &dyn Curve, tolerance: f64) -> Vec<Point3> {
    let (t_min, t_max) = curve.domain();
    let mut points = Vec::new();
    points.push(curve.point_at(t_min));
    subdivide_curve(curve, t_min, t_max, tolerance, &mut points, 0);
    points
}

/// Sample a whole multi-curve into one polyline, deduplicating the
/// shared points at segment joints.
pub fn path_to_polyline(path: &MultiCurve, tolerance: f64) -> Vec<Point3> {
    let mut points: Vec<Point3> = Vec::new();
    for seg in path.segments() {
        let sampled = curve_to_polyline(seg, tolerance);
        let skip = match points.last() {
            Some(&last) if !sampled.is_empty() && (sampled[0] - last).length() < tolerance => 1,
            _ => 0,
        };
        points.extend(sampled.into_iter().skip(skip));
    }
    points
}

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

fn subdivide_curve(
    curve: &dyn Curve,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point3>,
    depth: u32,
) {
    if depth >= MAX_DEPTH {
        points.push(curve.point_at(t1));
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let p1 = curve.point_at(t1);
    let p_mid = curve.point_at(t_mid);

    // Chord midpoint
    let chord_mid = (p0 + p1) * 0.5;
    let deviation = (p_mid - chord_mid).length();

    if deviation > tolerance {
        subdivide_curve(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide_curve(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(curve.point_at(t1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Arc, Polyline};
    use crate::segment::Segment;
    use std::f64::consts::PI;
    use stg_math::{dvec3, DVec3};

    #[test]
    fn test_straight_curve_needs_no_subdivision() {
        let line = Polyline::line(DVec3::ZERO, dvec3(10.0, 0.0, 0.0));
        let pts = curve_to_polyline(&line, 0.1);
        assert_eq!(pts.len(), 2);
    }

    #[test]
    fn test_arc_subdivision_respects_tolerance() {
        let arc = Arc::new(DVec3::ZERO, DVec3::Z, 10.0, 0.0, PI).unwrap();
        let pts = curve_to_polyline(&arc, 0.01);
        assert!(pts.len() > 8);
        // Every sampled point stays on the circle
        for p in &pts {
            assert!((p.length() - 10.0).abs() < 1e-9);
        }
        // Chord midpoints stay within tolerance of the circle
        for pair in pts.windows(2) {
            let mid = (pair[0] + pair[1]) * 0.5;
            assert!(10.0 - mid.length() < 0.011);
        }
    }

    #[test]
    fn test_path_to_polyline_dedups_joints() {
        let path = MultiCurve::new(vec![
            Segment::Polyline(Polyline::line(DVec3::ZERO, dvec3(1.0, 0.0, 0.0))),
            Segment::Polyline(Polyline::line(dvec3(1.0, 0.0, 0.0), dvec3(1.0, 1.0, 0.0))),
        ])
        .unwrap();
        let pts = path_to_polyline(&path, 0.01);
        assert_eq!(pts.len(), 3);
    }
}
