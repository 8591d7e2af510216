//! Scene geometry: a closed set of primitives paired with a surface.

use crate::plane::Plane;
use crate::sphere::Sphere;
use crate::surface::Surface;
use prism_math::{Ray, Transform, Vec3};

/// Minimum parametric distance for a valid hit. Hits at or behind the ray
/// origin are rejected across all primitives and modes.
pub const HIT_EPSILON: f32 = 1e-6;

/// Below this the ray is treated as parallel to a plane.
pub(crate) const PARALLEL_EPSILON: f32 = 1e-9;

/// The closed set of primitive shapes. Adding a primitive means extending
/// this enum, not implementing a trait.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

/// A primitive with its surface.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    shape: Shape,
    surface: Surface,
}

impl Geometry {
    /// World-space sphere.
    pub fn sphere(center: Vec3, radius: f32, surface: Surface) -> Self {
        Self {
            shape: Shape::Sphere(Sphere::new(center, radius)),
            surface,
        }
    }

    /// Unit sphere placed by a transform.
    pub fn placed_sphere(transform: Transform, surface: Surface) -> Self {
        Self {
            shape: Shape::Sphere(Sphere::placed(transform)),
            surface,
        }
    }

    /// World-space plane.
    pub fn plane(normal: Vec3, offset: f32, surface: Surface) -> Self {
        Self {
            shape: Shape::Plane(Plane::new(normal, offset)),
            surface,
        }
    }

    /// XZ plane placed by a transform.
    pub fn placed_plane(transform: Transform, surface: Surface) -> Self {
        Self {
            shape: Shape::Plane(Plane::placed(transform)),
            surface,
        }
    }

    /// Intersect a world-space ray. Returns the world-space hit distance,
    /// or None; intersection never fails.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match &self.shape {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
        }
    }

    /// Unit surface normal at a world-space point on the primitive.
    pub fn normal_at(&self, pos: Vec3) -> Vec3 {
        match &self.shape {
            Shape::Sphere(sphere) => sphere.normal_at(pos),
            Shape::Plane(plane) => plane.normal_at(pos),
        }
    }

    /// The surface shading strategy.
    pub fn surface(&self) -> Surface {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_dispatch() {
        let sphere = Geometry::sphere(Vec3::ZERO, 1.0, Surface::Shiny);
        let plane = Geometry::plane(Vec3::Y, 0.0, Surface::Checkerboard);

        let down = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!((sphere.intersect(&down).unwrap() - 4.0).abs() < 0.001);
        assert!((plane.intersect(&down).unwrap() - 5.0).abs() < 0.001);

        assert_eq!(sphere.surface(), Surface::Shiny);
        assert_eq!(plane.surface(), Surface::Checkerboard);
    }

    #[test]
    fn test_placed_geometry_dispatch() {
        let sphere = Geometry::placed_sphere(Transform::translation(0.0, 0.0, -4.0), Surface::Shiny);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!((sphere.intersect(&ray).unwrap() - 3.0).abs() < 0.001);
        assert!((sphere.normal_at(Vec3::new(0.0, 0.0, -3.0)) - Vec3::Z).length() < 0.001);
    }
}
