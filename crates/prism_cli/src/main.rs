//! prism CLI - renders the demo scene to a PNG file.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};
use prism_math::{Transform, Vec3};
use prism_renderer::{
    render, render_parallel, Camera, Color, Framebuffer, Geometry, Light, RenderConfig, Scene,
    Surface, DEFAULT_TILE_SIZE,
};

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Whitted-style ray tracer", long_about = None)]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Output PNG file
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Tile size for parallel rendering
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    tile_size: u32,

    /// Render sequentially instead of tile-parallel
    #[arg(long)]
    serial: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Demo scene: checkerboard ground, two glossy spheres, a transform-placed
/// sphere, and four colored point lights.
fn demo_scene() -> Scene {
    let camera = Camera::new(Vec3::new(3.0, 2.0, 4.0), Vec3::new(-1.0, 0.5, 0.0));
    let mut scene = Scene::new(camera);

    scene.add_geometry(Geometry::plane(Vec3::Y, 0.0, Surface::Checkerboard));
    scene.add_geometry(Geometry::sphere(Vec3::new(0.0, 1.0, -0.25), 1.0, Surface::Shiny));
    scene.add_geometry(Geometry::sphere(Vec3::new(-1.0, 0.5, 1.5), 0.5, Surface::Shiny));
    scene.add_geometry(Geometry::placed_sphere(
        Transform::scaling(0.3, 0.3, 0.3).then(&Transform::translation(1.0, 0.3, 0.5)),
        Surface::Shiny,
    ));

    scene.add_light(Light::new(
        Vec3::new(-2.0, 2.5, 0.0),
        Color::new(0.49, 0.07, 0.07),
    ));
    scene.add_light(Light::new(
        Vec3::new(1.5, 2.5, 1.5),
        Color::new(0.07, 0.07, 0.49),
    ));
    scene.add_light(Light::new(
        Vec3::new(1.5, 2.5, -1.5),
        Color::new(0.07, 0.49, 0.071),
    ));
    scene.add_light(Light::new(
        Vec3::new(0.0, 3.5, 0.0),
        Color::new(0.21, 0.21, 0.35),
    ));

    scene
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    info!("Rendering {}x{} image...", args.width, args.height);

    let scene = demo_scene();
    let mut framebuffer = Framebuffer::new(args.width, args.height);
    let config = RenderConfig::default();

    let start = Instant::now();
    if args.serial {
        render(&scene, &mut framebuffer, args.width, args.height, &config);
    } else {
        render_parallel(
            &scene,
            &mut framebuffer,
            args.width,
            args.height,
            args.tile_size,
            &config,
        );
    }
    info!("Rendering completed in {}ms", start.elapsed().as_millis());

    framebuffer.save_png(&args.output)?;
    info!("Wrote {}", args.output.display());

    Ok(())
}
