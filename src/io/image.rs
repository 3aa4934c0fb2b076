//! PNG export of a grid as coloured tile blocks
//!
//! Each cell becomes a square block. Collapsed cells get a colour derived
//! from their tile index; uncollapsed cells stay transparent.

use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::Grid;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Deterministic, well-spread colour for a tile index
pub fn tile_color(tile: usize) -> [u8; 4] {
    // Golden-ratio hue stepping keeps consecutive indices visually distinct
    let hue = (tile as f64 * 0.618_033_988_75).fract() * 6.0;
    let sector = hue.floor();
    let rising = hue - sector;

    let (r, g, b) = match sector as u8 {
        0 => (1.0, rising, 0.0),
        1 => (1.0 - rising, 1.0, 0.0),
        2 => (0.0, 1.0, rising),
        3 => (0.0, 1.0 - rising, 1.0),
        4 => (rising, 0.0, 1.0),
        _ => (1.0, 0.0, 1.0 - rising),
    };

    let scale = |channel: f64| channel.mul_add(175.0, 40.0).round() as u8;
    [scale(r), scale(g), scale(b), 255]
}

/// Render the grid into an image with `cell_pixels` pixels per cell side
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_pixels` is zero or the image side
/// would not fit in `u32`, and `InvalidTileIndex` if a collapsed cell
/// refers to a tile outside the grid's tile count
pub fn render_grid(grid: &Grid, cell_pixels: u32) -> Result<RgbaImage> {
    if cell_pixels == 0 {
        return Err(invalid_parameter("cell_pixels", &0, &"must be positive"));
    }
    let width = scaled_side(grid.width(), cell_pixels)?;
    let height = scaled_side(grid.height(), cell_pixels)?;
    let mut img = ImageBuffer::new(width, height);

    for (index, cell) in grid.cells().iter().enumerate() {
        let Some(tile) = cell.collapsed_tile() else {
            continue;
        };

        if tile >= grid.tile_count() {
            return Err(AlgorithmError::InvalidTileIndex {
                index: tile,
                max_tiles: grid.tile_count(),
            });
        }

        let (line, column) = grid.coordinates(index);
        let color = Rgba(tile_color(tile));
        let x0 = column as u32 * cell_pixels;
        let y0 = line as u32 * cell_pixels;

        for dy in 0..cell_pixels {
            for dx in 0..cell_pixels {
                img.put_pixel(x0 + dx, y0 + dy, color);
            }
        }
    }

    Ok(img)
}

// Every pixel coordinate stays below the checked side length
fn scaled_side(cells: usize, cell_pixels: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|side| side.checked_mul(cell_pixels))
        .ok_or_else(|| {
            invalid_parameter(
                "cell_pixels",
                &cell_pixels,
                &format!("image side for {cells} cells overflows u32"),
            )
        })
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is zero or too large for the grid
/// - A collapsed cell holds an out-of-range tile index
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, cell_pixels: u32, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, cell_pixels)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
