//! Text to cell placement.
//!
//! Walks the input one code point at a time with a pixel-space cursor:
//! literal `\n` starts a new row, and a row that would grow past
//! [`MAX_CANVAS_WIDTH`] wraps automatically. Each remaining character
//! becomes one solid-color cell.

use image::Rgba;

use crate::color_map;

/// Cells below this many pixels on either axis are a configuration error;
/// the detector also uses it to reject anti-aliasing artifacts.
pub const MIN_BLOCK_SIZE: u32 = 5;

/// Hard row width cap. Rows that would exceed it wrap to the next line,
/// which keeps the canvas within safe raster dimensions.
pub const MAX_CANVAS_WIDTH: u32 = 16384;

/// Canvas width used when the input produced no cells at all.
pub const EMPTY_CANVAS_WIDTH: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("block size {width}x{height} is below the minimum of {MIN_BLOCK_SIZE}x{MIN_BLOCK_SIZE} pixels")]
    BlockTooSmall { width: u32, height: u32 },

    #[error("block size {width}x{height} exceeds the {MAX_CANVAS_WIDTH} pixel canvas cap")]
    BlockTooLarge { width: u32, height: u32 },
}

/// One placed character: pixel-space top-left corner, dimensions, and the
/// color its code point maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub ch: char,
    pub code_point: u32,
    pub color: Rgba<u8>,
}

/// The full cell sequence of one encode pass plus the canvas it needs.
/// Replaced wholesale on every regeneration; nothing here is shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub cells: Vec<Cell>,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub block_width: u32,
    pub block_height: u32,
}

impl Layout {
    /// Hit test for pointer-style consumers: linear scan, first containing
    /// cell wins. Cells never overlap, so this is unambiguous.
    pub fn cell_at(&self, x: u32, y: u32) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|c| x >= c.x && x < c.x + c.width && y >= c.y && y < c.y + c.height)
    }
}

/// Places every character of `text` on the grid.
///
/// `chars()` iterates scalar values, so a supplementary-plane character is
/// one cell, never two surrogate halves.
pub fn layout_text(text: &str, block_width: u32, block_height: u32) -> Result<Layout, LayoutError> {
    if block_width < MIN_BLOCK_SIZE || block_height < MIN_BLOCK_SIZE {
        return Err(LayoutError::BlockTooSmall {
            width: block_width,
            height: block_height,
        });
    }
    // A single cell can never exceed the canvas cap. This also keeps the
    // cursor arithmetic below well inside u32 range.
    if block_width > MAX_CANVAS_WIDTH || block_height > MAX_CANVAS_WIDTH {
        return Err(LayoutError::BlockTooLarge {
            width: block_width,
            height: block_height,
        });
    }

    let mut cells = Vec::new();
    let mut x = 0u32;
    let mut y = 0u32;
    let mut max_x = 0u32;

    for ch in text.chars() {
        if ch == '\n' {
            max_x = max_x.max(x);
            x = 0;
            y += block_height;
            continue;
        }

        // Automatic wrap. This inserts a visual line break that was not in
        // the source text; the decoder cannot tell it apart from `\n`.
        if x + block_width > MAX_CANVAS_WIDTH {
            max_x = max_x.max(x);
            x = 0;
            y += block_height;
        }

        let code_point = ch as u32;
        cells.push(Cell {
            x,
            y,
            width: block_width,
            height: block_height,
            ch,
            code_point,
            color: color_map::color_for_code_point(code_point),
        });
        x += block_width;
    }
    max_x = max_x.max(x);

    let canvas_width = if max_x > 0 { max_x } else { EMPTY_CANVAS_WIDTH };
    let canvas_height = if cells.is_empty() { block_height } else { y + block_height };

    Ok(Layout {
        cells,
        canvas_width,
        canvas_height,
        block_width,
        block_height,
    })
}
