//! Surface shading strategies.
//!
//! Materials are data: a closed set of named strategies evaluated per
//! world-space point, not an open trait hierarchy.

use crate::color::{Color, BLACK, GREY, WHITE};
use prism_math::Vec3;

/// A surface shading strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Uniform glossy surface with a tight specular highlight.
    Shiny,
    /// Infinite checkerboard keyed by floor(x) + floor(z) parity.
    Checkerboard,
}

impl Surface {
    /// Diffuse color at a world-space point.
    pub fn diffuse(&self, pos: Vec3) -> Color {
        match self {
            Surface::Shiny => WHITE,
            Surface::Checkerboard => {
                if odd_square(pos) {
                    WHITE
                } else {
                    BLACK
                }
            }
        }
    }

    /// Specular color at a world-space point.
    pub fn specular(&self, _pos: Vec3) -> Color {
        match self {
            Surface::Shiny => GREY,
            Surface::Checkerboard => WHITE,
        }
    }

    /// Mirror reflectivity in [0, 1] at a world-space point.
    pub fn reflectivity(&self, pos: Vec3) -> f32 {
        match self {
            Surface::Shiny => 0.7,
            Surface::Checkerboard => {
                if odd_square(pos) {
                    0.1
                } else {
                    0.7
                }
            }
        }
    }

    /// Specular highlight exponent.
    pub fn roughness(&self) -> i32 {
        match self {
            Surface::Shiny => 100,
            Surface::Checkerboard => 1,
        }
    }
}

/// Checkerboard parity: true on squares where floor(x) + floor(z) is odd.
fn odd_square(pos: Vec3) -> bool {
    (pos.z.floor() as i64 + pos.x.floor() as i64) % 2 != 0
}
