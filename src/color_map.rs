//! Code point <-> color mapping.
//!
//! A code point's 6-hex-digit zero-padded representation is read directly as
//! `#RRGGBB`, so the mapping is injective on `[0, 0xFFFFFF]` and every Rust
//! `char` (at most `0x10FFFF`) is encodable. The inverse parses the channels
//! back into the same integer.

use image::Rgba;

/// Canvas padding color, doubling as the "no character here" sentinel during
/// decode. Must be identical on the encode and decode sides.
pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Samples with alpha below this count as background, so PNG transparency
/// does not decode into garbage characters.
pub const MIN_OPAQUE_ALPHA: u8 = 16;

/// Maps a raw code point to its cell color. Values above `0xFFFFFF` do not
/// fit in 24 bits and alias lower values; `char` callers can never hit that.
pub fn color_for_code_point(code_point: u32) -> Rgba<u8> {
    Rgba([
        (code_point >> 16) as u8,
        (code_point >> 8) as u8,
        code_point as u8,
        255,
    ])
}

pub fn color_for_char(ch: char) -> Rgba<u8> {
    color_for_code_point(ch as u32)
}

/// Exact algebraic inverse of [`color_for_code_point`].
pub fn code_point_for_color(color: Rgba<u8>) -> u32 {
    let Rgba([r, g, b, _]) = color;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Decodes a sampled color back to a character, or `None` when the integer
/// is not a valid scalar value (surrogate range, for instance).
pub fn char_for_color(color: Rgba<u8>) -> Option<char> {
    char::from_u32(code_point_for_color(color))
}

/// True for the pixels the decoder must treat as "no character": the exact
/// background sentinel, or anything too transparent to trust.
pub fn is_background(color: Rgba<u8>) -> bool {
    if color.0[3] < MIN_OPAQUE_ALPHA {
        return true;
    }
    same_rgb(color, BACKGROUND_COLOR)
}

/// Channel-wise RGB equality, ignoring alpha.
pub fn same_rgb(a: Rgba<u8>, b: Rgba<u8>) -> bool {
    a.0[..3] == b.0[..3]
}

/// Canonical `#RRGGBB` form, uppercase, as shown in probe output and the
/// cell map.
pub fn hex_string(color: Rgba<u8>) -> String {
    let Rgba([r, g, b, _]) = color;
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// `U+0041` style label, padded to at least four digits.
pub fn unicode_label(code_point: u32) -> String {
    format!("U+{code_point:04X}")
}
