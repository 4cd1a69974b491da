//! Grid geometry inference from a bare pixel buffer.
//!
//! Nothing marks the grid inside the image, the top-left pixel may be
//! padding rather than a data cell, and a row can legitimately start with
//! background-colored "space" cells. The detector therefore scans for an
//! anchor (first non-background pixel), measures the solid color run to the
//! right and downward to get the tile size, and validates the candidate
//! against its neighbors before accepting it. Measuring only the top-left
//! block would fail on leading-blank rows/columns and on decorative frames;
//! the anchor search is a strict superset of that approach.

use image::{Rgba, RgbaImage};

use crate::color_map::{self, BACKGROUND_COLOR};
use crate::layout::MIN_BLOCK_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("no data matrix found: the image contains no detectable cell grid (is it uncropped and losslessly saved?)")]
    GeometryNotFound,
}

/// Inferred grid placement: pixel offset of the first data cell plus the
/// tile dimensions. Computed once per decode, then immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub origin_x: u32,
    pub origin_y: u32,
    pub block_width: u32,
    pub block_height: u32,
}

/// Scans the raster row-major for the first acceptable anchor and returns
/// the geometry it fixes. Exhausting the scan is a terminal decode failure.
pub fn detect_geometry(image: &RgbaImage) -> Result<Geometry, DecodeError> {
    let (width, height) = image.dimensions();

    for ay in 0..height {
        for ax in 0..width {
            let anchor = *image.get_pixel(ax, ay);
            if color_map::is_background(anchor) {
                continue;
            }

            let width_run = run_right(image, ax, ay, anchor);
            let height_run = run_down(image, ax, ay, anchor);

            // No color boundary on either axis means the anchor's color
            // fills the rest of the image (a uniformly colored raster, or
            // a photo of nothing): degenerate, keep scanning. A boundary
            // on one axis is fine; a single-line matrix is exactly one
            // block tall, so its columns run clean to the bottom edge.
            if width_run.hit_edge && height_run.hit_edge {
                continue;
            }
            let block_width = width_run.length;
            let block_height = height_run.length;

            // Noise guard: anti-aliasing fringes and recompression specks
            // measure a few pixels at most.
            if block_width < MIN_BLOCK_SIZE || block_height < MIN_BLOCK_SIZE {
                continue;
            }

            if anchor_confirmed(image, ax, ay, block_width, block_height, anchor) {
                return Ok(Geometry {
                    origin_x: ax,
                    origin_y: ay,
                    block_width,
                    block_height,
                });
            }
        }
    }

    Err(DecodeError::GeometryNotFound)
}

struct Run {
    length: u32,
    /// True when the run reached the image edge without a color change, in
    /// which case `length` is clamped to the remaining extent.
    hit_edge: bool,
}

/// Solid `anchor`-colored run rightward along row `ay`.
fn run_right(image: &RgbaImage, ax: u32, ay: u32, anchor: Rgba<u8>) -> Run {
    for x in ax + 1..image.width() {
        if !color_map::same_rgb(*image.get_pixel(x, ay), anchor) {
            return Run { length: x - ax, hit_edge: false };
        }
    }
    Run { length: image.width() - ax, hit_edge: true }
}

/// Downward counterpart of [`run_right`] along column `ax`.
fn run_down(image: &RgbaImage, ax: u32, ay: u32, anchor: Rgba<u8>) -> Run {
    for y in ay + 1..image.height() {
        if !color_map::same_rgb(*image.get_pixel(ax, y), anchor) {
            return Run { length: y - ay, hit_edge: false };
        }
    }
    Run { length: image.height() - ay, hit_edge: true }
}

/// Accepts the anchor when the pixel right of the measured block or the
/// pixel below it is either background (isolated cell bordered by padding)
/// or a different non-background color (a second adjacent data cell).
/// When both read back the anchor color exactly, the candidate is more
/// likely a border/frame artifact and the scan continues.
fn anchor_confirmed(
    image: &RgbaImage,
    ax: u32,
    ay: u32,
    block_width: u32,
    block_height: u32,
    anchor: Rgba<u8>,
) -> bool {
    let right = pixel_or_background(image, ax + block_width, ay);
    let below = pixel_or_background(image, ax, ay + block_height);
    neighbor_fixes_tile(right, anchor) || neighbor_fixes_tile(below, anchor)
}

fn neighbor_fixes_tile(neighbor: Rgba<u8>, anchor: Rgba<u8>) -> bool {
    color_map::is_background(neighbor) || !color_map::same_rgb(neighbor, anchor)
}

/// Out-of-bounds reads count as padding, same as the reference pixel probe.
fn pixel_or_background(image: &RgbaImage, x: u32, y: u32) -> Rgba<u8> {
    if x >= image.width() || y >= image.height() {
        return BACKGROUND_COLOR;
    }
    *image.get_pixel(x, y)
}
