//! Core Whitted ray tracing engine.
//!
//! Each pixel is computed independently and statelessly: closest-hit search
//! is a linear scan over the scene, shading accumulates per-light diffuse
//! and specular terms with hard shadows, and mirror reflection recurses up
//! to a configured depth.

use crate::camera::Camera;
use crate::color::{Color, BACKGROUND, BLACK, GREY};
use crate::geometry::Geometry;
use crate::light::Light;
use crate::scene::Scene;
use prism_math::{Ray, Vec3};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Background color when a ray doesn't hit anything
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            background: BACKGROUND,
        }
    }
}

/// Record of the closest ray-geometry intersection.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// The geometry that was hit
    pub geometry: &'a Geometry,
    /// The ray that hit it
    pub ray: Ray,
    /// World-space hit distance along the ray
    pub dist: f32,
}

/// Destination for rendered pixels.
///
/// Colors arrive unclamped; the sink clamps each channel to a displayable
/// range and converts to its native pixel format.
pub trait PixelSink {
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Find the closest intersection of a ray with the scene.
///
/// Linear scan in scene order; on exactly equal distances the
/// first-encountered geometry wins.
pub fn closest_intersection<'a>(ray: &Ray, scene: &'a Scene) -> Option<Intersection<'a>> {
    let mut closest: Option<Intersection<'a>> = None;
    let mut closest_dist = f32::MAX;

    for geometry in scene.geometry() {
        if let Some(dist) = geometry.intersect(ray) {
            if dist < closest_dist {
                closest_dist = dist;
                closest = Some(Intersection {
                    geometry,
                    ray: *ray,
                    dist,
                });
            }
        }
    }

    closest
}

/// Distance to the closest obstruction along a ray, if any. Used for
/// shadow tests, which only need the distance.
pub fn test_ray(ray: &Ray, scene: &Scene) -> Option<f32> {
    closest_intersection(ray, scene).map(|isect| isect.dist)
}

/// Compute the color seen by a ray.
pub fn trace_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    match closest_intersection(ray, scene) {
        Some(isect) => shade(&isect, scene, depth, config),
        None => config.background,
    }
}

/// Shade an intersection: per-light natural color plus the mirror
/// reflection contribution.
fn shade(isect: &Intersection, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    let d = isect.ray.direction();
    let pos = isect.ray.at(isect.dist);
    let normal = isect.geometry.normal_at(pos);
    let reflect_dir = d - 2.0 * normal.dot(d) * normal;

    let natural = natural_color(isect.geometry, pos, normal, reflect_dir, scene);
    let reflected = if depth >= config.max_depth {
        // Past the bounce budget: substitute a fixed grey instead of
        // recursing further.
        GREY
    } else {
        reflection_color(isect.geometry, pos, reflect_dir, scene, depth, config)
    };

    natural + reflected
}

fn reflection_color(
    geometry: &Geometry,
    pos: Vec3,
    reflect_dir: Vec3,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
) -> Color {
    let reflectivity = geometry.surface().reflectivity(pos);
    reflectivity * trace_ray(&Ray::new(pos, reflect_dir), scene, depth + 1, config)
}

/// Sum diffuse and specular contributions over all lights in scene order.
fn natural_color(
    geometry: &Geometry,
    pos: Vec3,
    normal: Vec3,
    reflect_dir: Vec3,
    scene: &Scene,
) -> Color {
    let mut col = BLACK;
    for light in scene.lights() {
        col = add_light(geometry, pos, normal, reflect_dir, scene, col, light);
    }
    col
}

fn add_light(
    geometry: &Geometry,
    pos: Vec3,
    normal: Vec3,
    reflect_dir: Vec3,
    scene: &Scene,
    col: Color,
    light: &Light,
) -> Color {
    let ldis = light.position - pos;
    let livec = ldis.normalize();

    // Hard shadow: any obstruction strictly closer than the light kills
    // its contribution entirely.
    let near_isect = test_ray(&Ray::new(pos, livec), scene);
    let is_in_shadow = near_isect.is_some_and(|d| d < ldis.length());
    if is_in_shadow {
        return col;
    }

    let surface = geometry.surface();

    let illum = livec.dot(normal);
    let lcolor = if illum > 0.0 {
        illum * light.color
    } else {
        BLACK
    };

    let specular = livec.dot(reflect_dir.normalize());
    let scolor = if specular > 0.0 {
        specular.powi(surface.roughness()) * light.color
    } else {
        BLACK
    };

    col + surface.diffuse(pos) * lcolor + surface.specular(pos) * scolor
}

/// Build the camera ray for pixel (x, y) of a width x height image.
///
/// Pixel coordinates recenter onto the image plane; y is negated because
/// screen-space y grows downward while the up vector grows up.
pub fn camera_ray(camera: &Camera, width: u32, height: u32, x: u32, y: u32) -> Ray {
    let recenter_x = (x as f32 - width as f32 / 2.0) / 2.0 / width as f32;
    let recenter_y = -(y as f32 - height as f32 / 2.0) / 2.0 / height as f32;
    let direction =
        (camera.forward + recenter_x * camera.right + recenter_y * camera.up).normalize();
    Ray::new(camera.position, direction)
}

/// Render a single pixel.
pub fn render_pixel(
    scene: &Scene,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera_ray(scene.camera(), width, height, x, y);
    trace_ray(&ray, scene, 0, config)
}

/// Render the whole image sequentially in row-major order, writing each
/// cell to the sink exactly once.
pub fn render(
    scene: &Scene,
    sink: &mut dyn PixelSink,
    width: u32,
    height: u32,
    config: &RenderConfig,
) {
    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(scene, x, y, width, height, config);
            sink.set_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::WHITE;
    use crate::surface::Surface;
    use prism_math::Transform;

    fn down_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0))
    }

    fn empty_scene() -> Scene {
        Scene::new(Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO))
    }

    #[test]
    fn test_closest_intersection_picks_nearest() {
        let mut scene = empty_scene();
        scene.add_geometry(Geometry::sphere(Vec3::new(0.0, 2.0, 0.0), 1.0, Surface::Shiny));
        scene.add_geometry(Geometry::plane(Vec3::Y, 0.0, Surface::Checkerboard));

        let isect = closest_intersection(&down_ray(), &scene).unwrap();
        // Sphere top at y=3 is closer than the plane at y=0
        assert!((isect.dist - 2.0).abs() < 0.001);
        assert_eq!(isect.geometry.surface(), Surface::Shiny);
    }

    #[test]
    fn test_closest_intersection_tie_first_wins() {
        let mut scene = empty_scene();
        scene.add_geometry(Geometry::sphere(Vec3::ZERO, 1.0, Surface::Shiny));
        scene.add_geometry(Geometry::sphere(Vec3::ZERO, 1.0, Surface::Checkerboard));

        let isect = closest_intersection(&down_ray(), &scene).unwrap();
        assert_eq!(isect.geometry.surface(), Surface::Shiny);
    }

    #[test]
    fn test_trace_miss_returns_background() {
        let scene = empty_scene();
        let config = RenderConfig::default();
        let color = trace_ray(&down_ray(), &scene, 0, &config);
        assert_eq!(color, config.background);
    }

    #[test]
    fn test_depth_cutoff_substitutes_grey() {
        // One sphere, no lights: natural color is black, so the result is
        // exactly the reflection term.
        let mut scene = empty_scene();
        scene.add_geometry(Geometry::sphere(Vec3::ZERO, 1.0, Surface::Shiny));

        let cutoff = RenderConfig {
            max_depth: 0,
            ..RenderConfig::default()
        };
        assert_eq!(trace_ray(&down_ray(), &scene, 0, &cutoff), GREY);

        // With depth available, the reflection ray escapes to the black
        // background instead.
        let config = RenderConfig::default();
        assert_eq!(trace_ray(&down_ray(), &scene, 0, &config), BLACK);
    }

    #[test]
    fn test_shadow_blocks_light_completely() {
        let eye = Ray::new(
            Vec3::new(1.0, 0.5, 0.0),
            Vec3::new(-1.0, -0.5, 0.0).normalize(),
        );
        let config = RenderConfig::default();

        // Opaque sphere directly between the light and the shaded point
        let mut occluded = empty_scene();
        occluded.add_geometry(Geometry::plane(Vec3::Y, 0.0, Surface::Shiny));
        occluded.add_geometry(Geometry::sphere(Vec3::new(0.0, 5.0, 0.0), 1.0, Surface::Shiny));
        occluded.add_light(Light::new(Vec3::new(0.0, 10.0, 0.0), WHITE));

        assert_eq!(trace_ray(&eye, &occluded, 0, &config), BLACK);

        // Removing the occluder restores a strictly positive contribution
        let mut open = empty_scene();
        open.add_geometry(Geometry::plane(Vec3::Y, 0.0, Surface::Shiny));
        open.add_light(Light::new(Vec3::new(0.0, 10.0, 0.0), WHITE));

        let lit = trace_ray(&eye, &open, 0, &config);
        assert!(lit.x > 0.0 && lit.y > 0.0 && lit.z > 0.0);
    }

    #[test]
    fn test_mirror_box_recursion_terminates() {
        // Two facing reflective planes; the bounce budget bounds recursion.
        let mut scene = empty_scene();
        scene.add_geometry(Geometry::plane(Vec3::Y, 0.0, Surface::Shiny));
        scene.add_geometry(Geometry::plane(Vec3::new(0.0, -1.0, 0.0), 2.0, Surface::Shiny));
        scene.add_light(Light::new(Vec3::new(0.0, 1.0, 0.0), WHITE));

        let ray = Ray::new(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.1, 1.0, 0.0).normalize(),
        );
        let color = trace_ray(&ray, &scene, 0, &RenderConfig::default());
        assert!(color.is_finite());
    }

    #[test]
    fn test_camera_ray_center_is_forward() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let ray = camera_ray(&camera, 100, 100, 50, 50);

        assert_eq!(ray.origin(), camera.position);
        assert!((ray.direction() - camera.forward).length() < 0.001);
    }

    #[test]
    fn test_camera_ray_screen_y_is_flipped() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let top = camera_ray(&camera, 100, 100, 50, 0);
        let bottom = camera_ray(&camera, 100, 100, 50, 99);

        // Screen y grows downward, so the top row looks up
        assert!(top.direction().y > 0.0);
        assert!(bottom.direction().y < 0.0);
    }

    struct RecordingSink {
        writes: Vec<(u32, u32, Color)>,
    }

    impl PixelSink for RecordingSink {
        fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
            self.writes.push((x, y, color));
        }
    }

    #[test]
    fn test_render_writes_every_cell_once() {
        let mut scene = Scene::new(Camera::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, 1.0)));
        scene.add_geometry(Geometry::plane(Vec3::Y, 0.0, Surface::Checkerboard));
        scene.add_light(Light::new(Vec3::new(0.0, 5.0, 2.0), WHITE));

        let mut sink = RecordingSink { writes: Vec::new() };
        render(&scene, &mut sink, 2, 2, &RenderConfig::default());

        assert_eq!(sink.writes.len(), 4);
        for y in 0..2 {
            for x in 0..2 {
                let count = sink
                    .writes
                    .iter()
                    .filter(|(wx, wy, _)| *wx == x && *wy == y)
                    .count();
                assert_eq!(count, 1, "cell ({x}, {y}) written {count} times");
            }
        }
        for (_, _, color) in &sink.writes {
            assert!(color.is_finite());
        }
    }

    #[test]
    fn test_shading_exercises_placed_geometry() {
        let mut scene = Scene::new(Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));
        let placed = Transform::scaling(0.5, 0.5, 0.5).then(&Transform::translation(0.0, 0.0, 0.0));
        scene.add_geometry(Geometry::placed_sphere(placed, Surface::Shiny));
        scene.add_light(Light::new(Vec3::new(0.0, 5.0, 5.0), WHITE));

        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let color = trace_ray(&ray, &scene, 0, &RenderConfig::default());
        assert!(color.is_finite());
        assert!(color.length() > 0.0);
    }
}
