//! Prism - Whitted-style recursive ray tracer.
//!
//! Renders scenes of spheres, planes and point lights with diffuse,
//! specular, hard-shadow and mirror-reflection shading. Intersection is a
//! linear scan over the scene; reflection recursion is bounded by a fixed
//! maximum depth.

mod camera;
mod color;
mod framebuffer;
mod geometry;
mod light;
mod plane;
mod scene;
mod sphere;
mod surface;
mod tile;
mod tracer;

pub use camera::{Camera, DEFAULT_FOV_SCALE};
pub use color::{Color, BACKGROUND, BLACK, GREY, WHITE};
pub use framebuffer::{color_to_rgba, ExportError, Framebuffer};
pub use geometry::{Geometry, Shape, HIT_EPSILON};
pub use light::Light;
pub use plane::Plane;
pub use scene::Scene;
pub use sphere::Sphere;
pub use surface::Surface;
pub use tile::{generate_tiles, render_parallel, render_tile, Tile, DEFAULT_TILE_SIZE};
pub use tracer::{
    camera_ray, closest_intersection, render, render_pixel, test_ray, trace_ray, Intersection,
    PixelSink, RenderConfig,
};

/// Re-export math types from prism_math
pub use prism_math::{Ray, Transform, Vec3};
