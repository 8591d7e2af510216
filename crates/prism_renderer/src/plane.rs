//! Plane primitive.

use crate::geometry::{HIT_EPSILON, PARALLEL_EPSILON};
use prism_math::{Ray, Transform, Vec3};

/// An infinite plane, either given by a world-space normal and offset or as
/// the canonical XZ plane placed by a transform. The choice is fixed at
/// construction.
#[derive(Debug, Clone, Copy)]
pub enum Plane {
    /// World-space unit normal and signed offset from the origin along it.
    Direct { normal: Vec3, offset: f32 },
    /// Object-space XZ plane (normal (0,1,0), offset 0), placed by the
    /// transform.
    Placed { transform: Transform },
}

impl Plane {
    /// Create a world-space plane.
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self::Direct { normal, offset }
    }

    /// Create an XZ plane placed by a transform.
    pub fn placed(transform: Transform) -> Self {
        Self::Placed { transform }
    }

    /// Intersect a world-space ray. Returns the world-space hit distance.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Plane::Direct { normal, offset } => intersect_direct(*normal, *offset, ray),
            Plane::Placed { transform } => intersect_placed(transform, ray),
        }
    }

    /// Unit surface normal at a world-space point on the plane.
    pub fn normal_at(&self, _pos: Vec3) -> Vec3 {
        match self {
            Plane::Direct { normal, .. } => *normal,
            Plane::Placed { transform } => transform.normal(Vec3::Y),
        }
    }
}

fn intersect_direct(normal: Vec3, offset: f32, ray: &Ray) -> Option<f32> {
    let denom = normal.dot(ray.direction());

    // Parallel, or moving away from the facing side
    if denom.abs() < PARALLEL_EPSILON || denom > 0.0 {
        return None;
    }

    let dist = (normal.dot(ray.origin()) + offset) / -denom;
    if dist <= HIT_EPSILON {
        return None;
    }

    Some(dist)
}

fn intersect_placed(transform: &Transform, world_ray: &Ray) -> Option<f32> {
    let obj_origin = transform.inv_point(world_ray.origin());
    let obj_dir_unnorm = transform.inv_vector(world_ray.direction());
    let scale_factor = obj_dir_unnorm.length();
    let obj_dir = obj_dir_unnorm / scale_factor;

    // Parallel to the object-space XZ plane
    if obj_dir.y.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = -obj_origin.y / obj_dir.y;
    if t <= HIT_EPSILON {
        return None;
    }

    Some(t / scale_factor)
}
