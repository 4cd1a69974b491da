//! Per-cell metadata export: the same fields the generator keeps for each
//! block (character, color, code point, placement), serialized as JSON for
//! tooling and inspection.

use serde::Serialize;

use crate::color_map;
use crate::layout::Layout;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellRecord {
    #[serde(rename = "char")]
    pub ch: String,
    pub color: String,
    pub code_point: u32,
    pub unicode: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

pub fn cell_records(layout: &Layout) -> Vec<CellRecord> {
    layout
        .cells
        .iter()
        .map(|cell| CellRecord {
            ch: cell.ch.to_string(),
            color: color_map::hex_string(cell.color),
            code_point: cell.code_point,
            unicode: color_map::unicode_label(cell.code_point),
            x: cell.x,
            y: cell.y,
            width: cell.width,
            height: cell.height,
        })
        .collect()
}

pub fn cell_map_json(layout: &Layout) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&cell_records(layout))
}
