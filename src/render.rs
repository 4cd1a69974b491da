//! Paints a [`Layout`] onto an RGBA raster: background fill first, then one
//! solid rectangle per cell. Purely presentational.

use image::{Rgba, RgbaImage};

use crate::color_map::BACKGROUND_COLOR;
use crate::layout::Layout;

pub fn render(layout: &Layout) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        layout.canvas_width,
        layout.canvas_height,
        BACKGROUND_COLOR,
    );

    // Cells never overlap, so paint order does not matter.
    for cell in &layout.cells {
        fill_rect(&mut canvas, cell.x, cell.y, cell.width, cell.height, cell.color);
    }

    canvas
}

fn fill_rect(canvas: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x1 = (x0 + w).min(canvas.width());
    let y1 = (y0 + h).min(canvas.height());
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, color);
        }
    }
}
