//! Solid sweep of a closed profile along a spine curve.

use stg_core::{Result, StairError};
use stg_geometry::tessellate::path_to_polyline;
use stg_geometry::MultiCurve;
use stg_math::{DQuat, Point3, Transform, Vector3};

use crate::solid::Shell;

/// Unit tangents for a sampled spine: central differences inside,
/// one-sided at the ends.
fn polyline_tangents(points: &[Point3]) -> Vec<Vector3> {
    let n = points.len();
    let mut tangents = Vec::with_capacity(n);
    for i in 0..n {
        let d = if i == 0 {
            points[1] - points[0]
        } else if i == n - 1 {
            points[n - 1] - points[n - 2]
        } else {
            points[i + 1] - points[i - 1]
        };
        let len = d.length();
        if len > 0.0 {
            tangents.push(d / len);
        } else {
            // Fall back on the previous direction for a stalled sample
            tangents.push(*tangents.last().unwrap_or(&Vector3::X));
        }
    }
    tangents
}

fn any_perpendicular(v: Vector3) -> Vector3 {
    let reference = if v.x.abs() < 0.9 { Vector3::X } else { Vector3::Y };
    v.cross(reference).normalize()
}

/// Sweep a closed profile (points in the XY plane) along `spine`.
///
/// The first ring is oriented by the yaw/pitch placement derived from
/// the spine's initial tangent (`yaw = atan2(t.y, t.x)`,
/// `pitch = 90 + atan2(t.z, |t_xy|)`, degrees); subsequent rings carry
/// the frame forward with the minimal rotation between consecutive
/// tangents, then the tube is stitched and capped at both ends.
pub fn sweep_along(profile_ring: &[Point3], spine: &MultiCurve, chord_tol: f64) -> Result<Shell> {
    let m = profile_ring.len();
    if m < 3 {
        return Err(StairError::boolean(
            "sweep",
            format!("profile must have at least 3 points, got {m}"),
        ));
    }

    // Sample the spine and drop stalled points
    let raw = path_to_polyline(spine, chord_tol);
    let mut samples: Vec<Point3> = Vec::with_capacity(raw.len());
    for p in raw {
        if samples
            .last()
            .map_or(true, |&last| (p - last).length() > 1e-9)
        {
            samples.push(p);
        }
    }
    let n = samples.len();
    if n < 2 {
        return Err(StairError::boolean(
            "sweep",
            "spine has no extent after sampling",
        ));
    }

    let tangents = polyline_tangents(&samples);

    // Initial frame from the yaw/pitch placement of the profile
    let t0 = tangents[0];
    let yaw = t0.y.atan2(t0.x).to_degrees();
    let horizontal = (t0.x * t0.x + t0.y * t0.y).sqrt();
    let pitch = 90.0 + t0.z.atan2(horizontal).to_degrees();
    let placement = Transform::from_yaw_pitch(yaw, pitch);

    let mut x_axis = placement.transform_vector(Vector3::X);
    x_axis -= t0 * x_axis.dot(t0);
    if x_axis.length() < 1e-9 {
        x_axis = any_perpendicular(t0);
    }
    x_axis = x_axis.normalize();
    let mut y_axis = t0.cross(x_axis);

    // Emit one ring per sample, rotating the frame minimally between
    // consecutive tangents
    let mut vertices = Vec::with_capacity(n * m);
    for i in 0..n {
        if i > 0 {
            let q = DQuat::from_rotation_arc(tangents[i - 1], tangents[i]);
            x_axis = (q * x_axis).normalize();
            y_axis = (q * y_axis).normalize();
        }
        for p in profile_ring {
            vertices.push(samples[i] + x_axis * p.x + y_axis * p.y);
        }
    }

    let mut faces: Vec<Vec<u32>> = Vec::with_capacity((n - 1) * m + 2);
    // Start cap, wound against the side quads' first ring
    faces.push((0..m as u32).rev().collect());
    for i in 0..n - 1 {
        let ring = (i * m) as u32;
        let next = ((i + 1) * m) as u32;
        for j in 0..m as u32 {
            let j1 = (j + 1) % m as u32;
            faces.push(vec![ring + j, ring + j1, next + j1, next + j]);
        }
    }
    let top = ((n - 1) * m) as u32;
    faces.push((0..m as u32).map(|j| top + j).collect());

    Ok(Shell::new(vertices, faces))
}
