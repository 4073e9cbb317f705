//! Rendering helpers for finished symbols.
//!
//! Everything here reads a symbol only through [`ModuleGrid`], so any grid
//! (an encoder, a bare [`crate::ModuleMatrix`]) can be exported.

use std::fmt::Write as _;
use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};

use crate::error::Result;
use crate::models::ModuleGrid;

/// Default pixels per module for raster output
pub const DEFAULT_CELL_SIZE: u32 = 2;
/// Default quiet zone, in modules, for SVG and text output
pub const DEFAULT_MARGIN_MODULES: usize = 4;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Quiet zone in pixels matching [`DEFAULT_MARGIN_MODULES`] at `cell_size`
pub fn default_margin(cell_size: u32) -> u32 {
    cell_size * DEFAULT_MARGIN_MODULES as u32
}

/// Rasterize a grid: `cell_size` pixels per module, `margin` pixels of light border
pub fn to_image<G: ModuleGrid + ?Sized>(grid: &G, cell_size: u32, margin: u32) -> GrayImage {
    let cell_size = cell_size.max(1);
    let n = grid.module_count() as u32;
    let dim = n * cell_size + margin * 2;

    GrayImage::from_fn(dim, dim, |x, y| {
        if x < margin || y < margin {
            return LIGHT;
        }
        let col = (x - margin) / cell_size;
        let row = (y - margin) / cell_size;
        if row < n && col < n && grid.is_dark(row as usize, col as usize) {
            DARK
        } else {
            LIGHT
        }
    })
}

/// Rasterize and write a PNG file
pub fn save_png<G: ModuleGrid + ?Sized>(
    grid: &G,
    path: impl AsRef<Path>,
    cell_size: u32,
    margin: u32,
) -> Result<()> {
    to_image(grid, cell_size, margin).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Standalone SVG document, one unit per module, dark modules as a single path
pub fn to_svg_string<G: ModuleGrid + ?Sized>(grid: &G, margin: usize) -> String {
    let n = grid.module_count();
    let dim = n + margin * 2;

    let mut path = String::new();
    for row in 0..n {
        for col in 0..n {
            if grid.is_dark(row, col) {
                let _ = write!(path, "M{},{}h1v1h-1z", col + margin, row + margin);
            }
        }
    }

    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" ",
            "viewBox=\"0 0 {dim} {dim}\" stroke=\"none\">\n",
            "<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n",
            "<path d=\"{path}\" fill=\"#000000\"/>\n",
            "</svg>\n"
        ),
        dim = dim,
        path = path
    )
}

/// Terminal rendering, two characters per module: `██` dark, spaces light
pub fn to_text<G: ModuleGrid + ?Sized>(grid: &G, margin: usize) -> String {
    let n = grid.module_count();
    let dim = n + margin * 2;
    let mut out = String::with_capacity(dim * (dim * 2 + 1));

    for y in 0..dim {
        for x in 0..dim {
            let inside = (margin..margin + n).contains(&y) && (margin..margin + n).contains(&x);
            let dark = inside && grid.is_dark(y - margin, x - margin);
            out.push_str(if dark { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}
