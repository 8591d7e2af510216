//! Scene model: geometry, lights and a camera.

use crate::camera::Camera;
use crate::geometry::Geometry;
use crate::light::Light;

/// An ordered collection of geometry and lights with one camera.
///
/// Built once, then read-only during rendering; iteration order is
/// insertion order.
pub struct Scene {
    geometry: Vec<Geometry>,
    lights: Vec<Light>,
    camera: Camera,
}

impl Scene {
    /// Create an empty scene with the given camera.
    pub fn new(camera: Camera) -> Self {
        Self {
            geometry: Vec::new(),
            lights: Vec::new(),
            camera,
        }
    }

    /// Add a primitive to the scene.
    pub fn add_geometry(&mut self, geometry: Geometry) {
        self.geometry.push(geometry);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn geometry(&self) -> &[Geometry] {
        &self.geometry
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}
