use color_code_matrix::color_map::color_for_char;
use color_code_matrix::{decode_image, encode_text, layout_text, render, DecodeError};

#[test]
fn ab_newline_c_scenario() {
    let layout = layout_text("AB\nC", 10, 10).expect("layout");
    let cells: Vec<(u32, u32, char)> = layout.cells.iter().map(|c| (c.x, c.y, c.ch)).collect();
    assert_eq!(cells, vec![(0, 0, 'A'), (10, 0, 'B'), (0, 10, 'C')]);
    assert_eq!((layout.canvas_width, layout.canvas_height), (20, 20));

    let canvas = render(&layout);
    assert_eq!(*canvas.get_pixel(5, 5), color_for_char('A'));
    assert_eq!(decode_image(&canvas).expect("decode"), "AB\nC");
}

#[test]
fn multiline_text_roundtrips() {
    let text = "hello\nworld 123\nthe quick brown fox";
    let canvas = encode_text(text, 10, 10).expect("encode");
    assert_eq!(decode_image(&canvas).expect("decode"), text);
}

#[test]
fn emoji_roundtrips() {
    let text = "😀🚀\n日本語";
    let canvas = encode_text(text, 8, 8).expect("encode");
    assert_eq!(decode_image(&canvas).expect("decode"), text);
}

#[test]
fn three_interior_spaces_are_preserved() {
    let canvas = encode_text("ab   cd", 10, 10).expect("encode");
    assert_eq!(decode_image(&canvas).expect("decode"), "ab   cd");
}

#[test]
fn non_square_blocks_roundtrip() {
    let text = "wide\nand\ntall";
    let canvas = encode_text(text, 14, 6).expect("encode");
    assert_eq!(decode_image(&canvas).expect("decode"), text);
}

#[test]
fn blank_lines_are_lost_but_spaces_are_not() {
    // Space characters carry their own color, so they survive; an empty
    // row is indistinguishable from "no data" and gets dropped.
    let canvas = encode_text(" ab\n\ncd ", 10, 10).expect("encode");
    assert_eq!(decode_image(&canvas).expect("decode"), " ab\ncd ");
}

#[test]
fn automatic_wrap_decodes_as_a_line_break() {
    // Three 8192px cells: the third exceeds the 16384px row cap and wraps.
    // The wrap is information-losing; it reads back as a literal newline.
    let canvas = encode_text("abc", 8192, 10).expect("encode");
    assert_eq!(canvas.dimensions(), (16384, 20));
    assert_eq!(decode_image(&canvas).expect("decode"), "ab\nc");
}

#[test]
fn background_only_image_reports_no_matrix() {
    let canvas = encode_text("", 10, 10).expect("encode");
    let err = decode_image(&canvas).expect_err("must fail");
    assert_eq!(err, DecodeError::GeometryNotFound);
    assert!(err.to_string().contains("no data matrix found"));
}
