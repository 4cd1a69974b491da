//! Single-pixel reader: sample one coordinate and report what it decodes
//! to. This is the library half of the interactive "point at a block"
//! feature; hover/webcam wiring lives with the caller.

use std::fmt;

use image::RgbaImage;

use crate::color_map::{self, BACKGROUND_COLOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// The background sentinel; no character lives here.
    Background,
    Character { code_point: u32, ch: char },
    /// The color parses to an integer no valid character maps to.
    InvalidCodePoint { code_point: u32 },
}

/// Everything the reader shows for one sampled pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub x: u32,
    pub y: u32,
    pub rgb: [u8; 3],
    pub hex: String,
    pub decoded: Decoded,
}

/// Samples `(x, y)` and decodes it. Out-of-bounds coordinates read as
/// background, matching the canvas probe in the reference tool.
pub fn probe(image: &RgbaImage, x: u32, y: u32) -> ProbeReport {
    let pixel = if x < image.width() && y < image.height() {
        *image.get_pixel(x, y)
    } else {
        BACKGROUND_COLOR
    };

    let decoded = if color_map::is_background(pixel) {
        Decoded::Background
    } else {
        let code_point = color_map::code_point_for_color(pixel);
        match char::from_u32(code_point) {
            Some(ch) => Decoded::Character { code_point, ch },
            None => Decoded::InvalidCodePoint { code_point },
        }
    };

    ProbeReport {
        x,
        y,
        rgb: [pixel.0[0], pixel.0[1], pixel.0[2]],
        hex: color_map::hex_string(pixel),
        decoded,
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        writeln!(f, "pixel ({}, {}): {} / rgb({r}, {g}, {b})", self.x, self.y, self.hex)?;
        match &self.decoded {
            Decoded::Background => write!(f, "background color, no character"),
            Decoded::Character { code_point, ch } => write!(
                f,
                "character: {ch} ({}, {code_point} decimal)",
                color_map::unicode_label(*code_point)
            ),
            Decoded::InvalidCodePoint { code_point } => write!(
                f,
                "invalid code point {} ({code_point} decimal), no character",
                color_map::unicode_label(*code_point)
            ),
        }
    }
}
