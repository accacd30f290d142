pub mod aabb;
pub mod plane;
pub mod transform;

pub use glam::{dvec2, dvec3, DMat3, DMat4, DQuat, DVec2, DVec3, DVec4};
pub use aabb::Aabb3;
pub use plane::Plane;
pub use transform::Transform;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;

/// Project a vector onto the XY plane (drop the z component).
pub fn flatten(v: Vector3) -> Vector3 {
    Vector3::new(v.x, v.y, 0.0)
}

/// Project onto the XY plane and normalize. Returns `None` for vectors
/// that are vertical or zero within `eps`.
pub fn flatten_normalize(v: Vector3, eps: f64) -> Option<Vector3> {
    let f = flatten(v);
    if f.length() < eps {
        None
    } else {
        Some(f.normalize())
    }
}
