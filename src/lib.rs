//! Lossless text <-> image codec over a grid of solid-color blocks.
//!
//! Each Unicode code point maps to one 24-bit RGB color (`#RRGGBB` is the
//! code point in hex), and the encoder tiles those colors onto a raster.
//! The decoder recovers the text purely from pixel data: no embedded
//! metadata, no markers. Grid geometry (tile size and origin) is inferred
//! by scanning the raster itself.
//!
//! Encode: text -> [`layout::layout_text`] -> [`render::render`] -> raster.
//! Decode: raster -> [`detect::detect_geometry`] -> [`sample::sample_text`].

pub mod cell_map;
pub mod color_map;
pub mod detect;
pub mod layout;
pub mod probe;
pub mod render;
pub mod sample;

pub use detect::{DecodeError, Geometry, detect_geometry};
pub use layout::{Cell, Layout, LayoutError, layout_text};
pub use probe::{ProbeReport, probe};
pub use render::render;
pub use sample::sample_text;

/// Text straight to raster with the given block size.
pub fn encode_text(
    text: &str,
    block_width: u32,
    block_height: u32,
) -> Result<image::RgbaImage, LayoutError> {
    Ok(render(&layout_text(text, block_width, block_height)?))
}

/// Raster straight to text: infer the geometry, then sample every cell.
pub fn decode_image(image: &image::RgbaImage) -> Result<String, DecodeError> {
    let geometry = detect_geometry(image)?;
    Ok(sample_text(image, &geometry))
}
