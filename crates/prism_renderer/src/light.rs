//! Point light source.

use crate::color::Color;
use prism_math::Vec3;

/// A point light with no attenuation model; intensity is encoded in the
/// color and falls off by the dot-product term at shading time.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}
