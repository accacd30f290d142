//! Half-space clipping of faceted solids against a convex housing.

use stg_core::{Result, StairError, Tolerance};
use stg_math::{Plane, Point3, Vector3};

use crate::solid::{FacetSolid, Shell};

/// Newell's method: area-weighted normal of a (possibly non-planar)
/// polygon.
fn newell_normal(pts: &[Point3]) -> Vector3 {
    let mut n = Vector3::ZERO;
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[(i + 1) % pts.len()];
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
    }
    n
}

/// Derive the inward half-spaces of a convex housing solid.
///
/// Each face contributes one plane, oriented so the housing's vertex
/// centroid lies on the positive (keep) side.
pub fn convex_planes(housing: &FacetSolid, tol: Tolerance) -> Result<Vec<Plane>> {
    let mut all_points: Vec<Point3> = Vec::new();
    for shell in &housing.shells {
        all_points.extend_from_slice(&shell.vertices);
    }
    if all_points.is_empty() {
        return Err(StairError::InvalidBaseShape(
            "housing solid has no vertices".into(),
        ));
    }
    let centroid = all_points.iter().sum::<Point3>() / all_points.len() as f64;

    let mut planes = Vec::new();
    for shell in &housing.shells {
        for fi in 0..shell.faces.len() {
            let pts = shell.face_points(fi);
            let n = newell_normal(&pts);
            if n.length() < tol.linear {
                return Err(StairError::Topology(format!(
                    "housing face {fi} has a degenerate normal"
                )));
            }
            let mut plane = Plane::new(pts[0], n);
            let d = plane.signed_distance(centroid);
            if d.abs() < tol.linear {
                return Err(StairError::Topology(format!(
                    "housing face {fi} passes through the housing centroid"
                )));
            }
            if d < 0.0 {
                plane = plane.flipped();
            }
            planes.push(plane);
        }
    }
    Ok(planes)
}

/// Sutherland-Hodgman clip of one polygon against the positive side of
/// `plane`. Intersection points are appended to `cut_points` for cap
/// reconstruction.
fn clip_polygon(
    poly: &[Point3],
    plane: &Plane,
    eps: f64,
    cut_points: &mut Vec<Point3>,
) -> Option<Vec<Point3>> {
    let mut out = Vec::with_capacity(poly.len() + 2);
    for i in 0..poly.len() {
        let cur = poly[i];
        let next = poly[(i + 1) % poly.len()];
        let d_cur = plane.signed_distance(cur);
        let d_next = plane.signed_distance(next);
        let cur_in = d_cur >= -eps;
        let next_in = d_next >= -eps;

        if cur_in {
            out.push(cur);
        }
        if cur_in != next_in {
            let x = plane.intersect_segment(cur, next);
            out.push(x);
            cut_points.push(x);
        }
    }
    if out.len() < 3 {
        None
    } else {
        Some(out)
    }
}

/// Order the cut points of one plane into a cap polygon, wound so its
/// outward normal opposes the keep direction.
fn build_cap(points: &[Point3], plane: &Plane, eps: f64) -> Option<Vec<Point3>> {
    // Deduplicate within eps
    let mut unique: Vec<Point3> = Vec::new();
    for &p in points {
        if !unique.iter().any(|&q| (p - q).length() < eps) {
            unique.push(p);
        }
    }
    if unique.len() < 3 {
        return None;
    }

    let n = plane.normal;
    let reference = if n.x.abs() < 0.9 { Vector3::X } else { Vector3::Y };
    let u = n.cross(reference).normalize();
    let v = n.cross(u).normalize();

    let centroid = unique.iter().sum::<Point3>() / unique.len() as f64;
    unique.sort_by(|a, b| {
        let pa = *a - centroid;
        let pb = *b - centroid;
        let aa = pa.dot(v).atan2(pa.dot(u));
        let ab = pb.dot(v).atan2(pb.dot(u));
        aa.partial_cmp(&ab).unwrap_or(std::cmp::Ordering::Equal)
    });
    // Angle-sorted order is counter-clockwise around +n (the keep side);
    // the cap faces the other way.
    unique.reverse();
    Some(unique)
}

fn clip_shell(shell: &Shell, planes: &[Plane], tol: Tolerance) -> Option<Shell> {
    let eps = tol.linear.max(1e-9);
    let mut polys: Vec<Vec<Point3>> = (0..shell.faces.len())
        .map(|fi| shell.face_points(fi))
        .collect();

    for plane in planes {
        let mut cut_points = Vec::new();
        let mut kept = Vec::new();
        for poly in &polys {
            if let Some(clipped) = clip_polygon(poly, plane, eps, &mut cut_points) {
                kept.push(clipped);
            }
        }
        if let Some(cap) = build_cap(&cut_points, plane, eps) {
            kept.push(cap);
        }
        polys = kept;
        if polys.is_empty() {
            return None;
        }
    }

    // Rebuild an indexed shell, deduplicating shared corners
    let mut vertices: Vec<Point3> = Vec::new();
    let mut faces = Vec::with_capacity(polys.len());
    for poly in polys {
        let mut face = Vec::with_capacity(poly.len());
        for p in poly {
            let idx = match vertices.iter().position(|&q| (p - q).length() < eps) {
                Some(i) => i,
                None => {
                    vertices.push(p);
                    vertices.len() - 1
                }
            };
            face.push(idx as u32);
        }
        faces.push(face);
    }
    Some(Shell::new(vertices, faces))
}

/// Intersect `subject` with a convex `housing` solid.
///
/// Every shell of the subject is clipped independently against the
/// housing's inward half-spaces; shells clipped away entirely are
/// dropped. The result is empty when nothing of the subject lies inside
/// the housing.
pub fn clip_to_convex(
    subject: &FacetSolid,
    housing: &FacetSolid,
    tol: Tolerance,
) -> Result<FacetSolid> {
    let planes = convex_planes(housing, tol)?;
    let shells = subject
        .shells
        .iter()
        .filter(|s| !s.is_empty())
        .filter_map(|s| clip_shell(s, &planes, tol))
        .collect();
    Ok(FacetSolid { shells })
}
