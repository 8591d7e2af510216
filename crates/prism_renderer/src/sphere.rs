//! Sphere primitive.

use crate::geometry::HIT_EPSILON;
use prism_math::{Ray, Transform, Vec3};

/// A sphere, either given directly in world space or as the canonical unit
/// sphere placed by a transform. The choice is fixed at construction.
#[derive(Debug, Clone, Copy)]
pub enum Sphere {
    /// World-space center and radius.
    Direct { center: Vec3, radius: f32 },
    /// Unit sphere at the object-space origin, placed by the transform.
    Placed { transform: Transform },
}

impl Sphere {
    /// Create a world-space sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self::Direct { center, radius }
    }

    /// Create a unit sphere placed by a transform.
    pub fn placed(transform: Transform) -> Self {
        Self::Placed { transform }
    }

    /// Intersect a world-space ray. Returns the world-space hit distance.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Sphere::Direct { center, radius } => intersect_direct(*center, *radius, ray),
            Sphere::Placed { transform } => intersect_placed(transform, ray),
        }
    }

    /// Unit surface normal at a world-space point on the sphere.
    pub fn normal_at(&self, pos: Vec3) -> Vec3 {
        match self {
            Sphere::Direct { center, .. } => (pos - *center).normalize(),
            Sphere::Placed { transform } => {
                let obj_pos = transform.inv_point(pos);
                transform.normal(obj_pos.normalize())
            }
        }
    }
}

fn intersect_direct(center: Vec3, radius: f32, ray: &Ray) -> Option<f32> {
    let eo = center - ray.origin();
    let v = eo.dot(ray.direction());

    // Center behind the ray origin
    if v < 0.0 {
        return None;
    }

    let disc = radius * radius - (eo.dot(eo) - v * v);
    if disc < 0.0 {
        return None;
    }

    let dist = v - disc.sqrt();
    // Origin inside the sphere: only the entry point ahead is honored,
    // exit points are never reported.
    if dist < 0.0 {
        return None;
    }

    Some(dist)
}

fn intersect_placed(transform: &Transform, world_ray: &Ray) -> Option<f32> {
    // Map the ray into object space. The mapped direction is not unit
    // length in general; record its magnitude so the object-space root can
    // be converted back to a world-space distance.
    let obj_origin = transform.inv_point(world_ray.origin());
    let obj_dir_unnorm = transform.inv_vector(world_ray.direction());
    let scale_factor = obj_dir_unnorm.length();
    let obj_dir = obj_dir_unnorm / scale_factor;

    // Unit sphere at the origin: x^2 + y^2 + z^2 = 1
    let a = obj_dir.dot(obj_dir);
    let b = 2.0 * obj_origin.dot(obj_dir);
    let c = obj_origin.dot(obj_origin) - 1.0;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / (2.0 * a);
    let t2 = (-b + sqrt_d) / (2.0 * a);

    // Smallest root ahead of the origin
    let t = if t1 > HIT_EPSILON {
        t1
    } else if t2 > HIT_EPSILON {
        t2
    } else {
        return None;
    };

    Some(t / scale_factor)
}
