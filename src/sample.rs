//! Cell sampling and text reassembly.
//!
//! Walks the inferred grid, samples one pixel at each cell center, and
//! rebuilds the lines. Classification (what did this cell hold?) and line
//! assembly (where do spaces and breaks go?) are kept separate so each can
//! be tested alone.
//!
//! Two reconstructions are deliberately lossy: an automatic wrap from the
//! layout pass reads back as a line break, and a row with no data cells is
//! dropped rather than preserved as a blank line.

use image::RgbaImage;

use crate::color_map;
use crate::detect::Geometry;

/// Substituted when a sampled color decodes to an integer with no valid
/// character, so one bad cell cannot abort the whole decode.
pub const PLACEHOLDER_CHAR: char = '?';

/// What a single cell-center sample decoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sample {
    Background,
    Glyph(char),
}

/// Reconstructs the text under `geometry`. Infallible past this point:
/// every cell is either background, a character, or the placeholder.
pub fn sample_text(image: &RgbaImage, geometry: &Geometry) -> String {
    let (image_width, image_height) = image.dimensions();

    // The detector never produces zero-sized blocks or an origin outside
    // the image, but the descriptor is plain data and callers can hand one
    // in. Nothing to sample in either case.
    if geometry.block_width == 0
        || geometry.block_height == 0
        || geometry.origin_x >= image_width
        || geometry.origin_y >= image_height
    {
        return String::new();
    }

    let total_rows = (image_height - geometry.origin_y) / geometry.block_height;
    let total_cols = (image_width - geometry.origin_x) / geometry.block_width;

    let mut lines: Vec<String> = Vec::new();

    for row in 0..total_rows {
        let mut line = String::new();
        // Background runs are held back until a glyph follows, which both
        // preserves interior spacing and strips trailing padding.
        let mut pending_spaces = 0usize;

        for col in 0..total_cols {
            let x = geometry.origin_x + col * geometry.block_width + geometry.block_width / 2;
            let y = geometry.origin_y + row * geometry.block_height + geometry.block_height / 2;

            let Some(sample) = classify(image, x, y) else {
                continue; // geometry overran the image edge
            };

            match sample {
                Sample::Background => {
                    if !line.is_empty() {
                        pending_spaces += 1;
                    }
                }
                Sample::Glyph(ch) => {
                    for _ in 0..pending_spaces {
                        line.push(' ');
                    }
                    pending_spaces = 0;
                    line.push(ch);
                }
            }
        }

        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines.join("\n")
}

fn classify(image: &RgbaImage, x: u32, y: u32) -> Option<Sample> {
    if x >= image.width() || y >= image.height() {
        return None;
    }
    let pixel = *image.get_pixel(x, y);
    if color_map::is_background(pixel) {
        return Some(Sample::Background);
    }
    Some(Sample::Glyph(
        color_map::char_for_color(pixel).unwrap_or(PLACEHOLDER_CHAR),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_map::{color_for_code_point, BACKGROUND_COLOR};
    use crate::layout::layout_text;
    use crate::render::render;

    fn detect_and_sample(image: &RgbaImage) -> String {
        let geometry = crate::detect::detect_geometry(image).expect("geometry");
        sample_text(image, &geometry)
    }

    #[test]
    fn interior_spaces_survive_trailing_padding_does_not() {
        let layout = layout_text("a   b", 10, 10).expect("layout");
        let canvas = render(&layout);
        assert_eq!(detect_and_sample(&canvas), "a   b");
    }

    #[test]
    fn mid_line_background_padding_reads_as_one_space_per_cell() {
        // Hand-built raster: 'a', one background cell, 'b', then two more
        // background cells of pure padding on the same row.
        let mut image = RgbaImage::from_pixel(50, 10, BACKGROUND_COLOR);
        for y in 0..10 {
            for x in 0..10 {
                image.put_pixel(x, y, crate::color_map::color_for_char('a'));
                image.put_pixel(x + 20, y, crate::color_map::color_for_char('b'));
            }
        }
        let geometry = Geometry { origin_x: 0, origin_y: 0, block_width: 10, block_height: 10 };
        assert_eq!(sample_text(&image, &geometry), "a b");
    }

    #[test]
    fn degenerate_descriptor_samples_nothing() {
        let layout = layout_text("ab", 10, 10).expect("layout");
        let canvas = render(&layout);

        let zero_block = Geometry { origin_x: 0, origin_y: 0, block_width: 0, block_height: 10 };
        assert_eq!(sample_text(&canvas, &zero_block), "");

        let zero_height = Geometry { origin_x: 0, origin_y: 0, block_width: 10, block_height: 0 };
        assert_eq!(sample_text(&canvas, &zero_height), "");

        let origin_past_edge = Geometry { origin_x: 0, origin_y: 99, block_width: 10, block_height: 10 };
        assert_eq!(sample_text(&canvas, &origin_past_edge), "");
    }

    #[test]
    fn rows_without_data_are_dropped() {
        let layout = layout_text("ab\n\ncd", 10, 10).expect("layout");
        let canvas = render(&layout);
        // The blank middle row cannot be told apart from "no data"; it goes.
        assert_eq!(detect_and_sample(&canvas), "ab\ncd");
    }

    #[test]
    fn invalid_code_point_becomes_placeholder() {
        let mut image = RgbaImage::from_pixel(30, 10, BACKGROUND_COLOR);
        // A surrogate value: a color no valid character maps to.
        let bad = color_for_code_point(0xD800);
        for y in 0..10 {
            for x in 0..10 {
                image.put_pixel(x, y, crate::color_map::color_for_char('a'));
                image.put_pixel(x + 10, y, bad);
            }
        }
        assert_eq!(detect_and_sample(&image), "a?");
    }

    #[test]
    fn explicit_geometry_skips_partial_trailing_column() {
        // 25px wide with 10px blocks leaves a 5px remainder that holds no
        // full cell; floor division must not sample into it.
        let mut image = RgbaImage::from_pixel(25, 10, BACKGROUND_COLOR);
        for y in 0..10 {
            for x in 0..10 {
                image.put_pixel(x, y, crate::color_map::color_for_char('a'));
                image.put_pixel(x + 10, y, crate::color_map::color_for_char('b'));
            }
        }
        let geometry = Geometry { origin_x: 0, origin_y: 0, block_width: 10, block_height: 10 };
        assert_eq!(sample_text(&image, &geometry), "ab");
    }
}
