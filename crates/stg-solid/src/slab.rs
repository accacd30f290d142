//! Hexahedral step slabs.

use stg_math::{Point3, Vector3};

use crate::solid::Shell;

/// Corners of a vertical rectangle used as one end of a slab.
///
/// `p` is the midpoint of the lower edge, `dir` the horizontal travel
/// direction the rectangle is perpendicular to. Half-widths may differ:
/// the inside of a curve carries a clipped width. Order: lower-left,
/// lower-right, upper-right, upper-left when looking along `dir`.
pub fn vertical_face(
    p: Point3,
    dir: Vector3,
    w_left: f64,
    w_right: f64,
    h: f64,
) -> [Point3; 4] {
    let up = Vector3::Z;
    let side = dir.cross(up);
    [
        p - side * w_left,
        p + side * w_right,
        p + up * h + side * w_right,
        p + up * h - side * w_left,
    ]
}

/// Build a hexahedral solid from its near and far end rectangles.
///
/// The two rectangles must list corners in the same order. Faces are
/// wound consistently so the shell passes the directed-edge pairing
/// check.
pub fn make_slab(near: [Point3; 4], far: [Point3; 4]) -> Shell {
    let mut vertices = Vec::with_capacity(8);
    vertices.extend_from_slice(&near);
    vertices.extend_from_slice(&far);

    let faces = vec![
        vec![0, 3, 2, 1],
        vec![4, 5, 6, 7],
        vec![0, 1, 5, 4],
        vec![1, 2, 6, 5],
        vec![2, 3, 7, 6],
        vec![3, 0, 4, 7],
    ];

    Shell::new(vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stg_core::traits::Validate;
    use stg_math::dvec3;

    #[test]
    fn test_vertical_face_symmetric() {
        let f = vertical_face(Point3::ZERO, Vector3::X, 1.0, 1.0, 2.0);
        // side = X x Z = -Y, so "left" is +Y
        assert!((f[0] - dvec3(0.0, 1.0, 0.0)).length() < 1e-12);
        assert!((f[1] - dvec3(0.0, -1.0, 0.0)).length() < 1e-12);
        assert!((f[2] - dvec3(0.0, -1.0, 2.0)).length() < 1e-12);
        assert!((f[3] - dvec3(0.0, 1.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn test_vertical_face_asymmetric_widths() {
        let f = vertical_face(Point3::ZERO, Vector3::X, 0.25, 1.0, 1.0);
        assert!((f[0].y - 0.25).abs() < 1e-12);
        assert!((f[1].y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_slab_is_closed() {
        let near = vertical_face(Point3::ZERO, Vector3::X, 1.0, 1.0, 2.0);
        let far = vertical_face(dvec3(3.0, 0.0, 0.0), Vector3::X, 1.0, 1.0, 2.0);
        let slab = make_slab(near, far);
        assert!(slab.validate().is_ok());
        let bb = slab.aabb().unwrap();
        assert!((bb.min - dvec3(0.0, -1.0, 0.0)).length() < 1e-12);
        assert!((bb.max - dvec3(3.0, 1.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn test_slab_negative_height_spans_downwards() {
        // Treads are built with h = -thickness from their top plane
        let near = vertical_face(dvec3(0.0, 0.0, 5.0), Vector3::X, 1.0, 1.0, -0.5);
        let far = vertical_face(dvec3(2.0, 0.0, 5.0), Vector3::X, 1.0, 1.0, -0.5);
        let slab = make_slab(near, far);
        let bb = slab.aabb().unwrap();
        assert!((bb.min.z - 4.5).abs() < 1e-12);
        assert!((bb.max.z - 5.0).abs() < 1e-12);
    }
}
