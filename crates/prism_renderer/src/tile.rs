//! Tile-based parallel rendering.
//!
//! Divides the image into square tiles that are rendered independently on
//! a rayon pool. Per-pixel shading is pure, so the parallel result is
//! bit-identical to the sequential renderer.

use crate::color::Color;
use crate::scene::Scene;
use crate::tracer::{render_pixel, PixelSink, RenderConfig};
use log::debug;
use rayon::prelude::*;

/// Default tile size in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 64;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    /// X coordinate of the tile's top-left corner
    pub x: u32,
    /// Y coordinate of the tile's top-left corner
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
}

impl Tile {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Total number of pixels in this tile.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Generate the tile grid for an image, row-major. Edge tiles are clipped
/// to the image bounds.
pub fn generate_tiles(width: u32, height: u32, tile_size: u32) -> Vec<Tile> {
    let tile_size = tile_size.max(1);
    let mut tiles = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let tw = tile_size.min(width - x);
            let th = tile_size.min(height - y);
            tiles.push(Tile::new(x, y, tw, th));
            x += tile_size;
        }
        y += tile_size;
    }

    tiles
}

/// Render one tile to a vector of colors in row-major order within the
/// tile.
pub fn render_tile(
    tile: &Tile,
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(tile.pixel_count() as usize);

    for local_y in 0..tile.height {
        for local_x in 0..tile.width {
            let global_x = tile.x + local_x;
            let global_y = tile.y + local_y;
            pixels.push(render_pixel(scene, global_x, global_y, width, height, config));
        }
    }

    pixels
}

/// Render the whole image tile-parallel, then blit each tile through the
/// sink. Every cell is written exactly once.
pub fn render_parallel(
    scene: &Scene,
    sink: &mut dyn PixelSink,
    width: u32,
    height: u32,
    tile_size: u32,
    config: &RenderConfig,
) {
    let tiles = generate_tiles(width, height, tile_size);
    debug!("rendering {} tiles of {}x{}", tiles.len(), tile_size, tile_size);

    let results: Vec<(Tile, Vec<Color>)> = tiles
        .par_iter()
        .map(|tile| (*tile, render_tile(tile, scene, width, height, config)))
        .collect();

    for (tile, pixels) in results {
        for local_y in 0..tile.height {
            for local_x in 0..tile.width {
                let color = pixels[(local_y * tile.width + local_x) as usize];
                sink.set_pixel(tile.x + local_x, tile.y + local_y, color);
            }
        }
    }
}
