//! One-line block summaries for canvas captions and the preview panel
//!
//! The renderer is total: absent or null fields become empty text, values of
//! a surprising kind are stringified, and tags outside the closed type set
//! get a generic fallback. It must never fail — the editor intentionally
//! lets config fields hold anything mid-edit.

use crate::core::block::{Block, BlockType};

/// Fallback caption for blocks whose type tag is outside the closed set.
pub const NO_SUMMARY: &str = "No summary available.";

/// Render the one-line description of a block's configuration.
pub fn summarize(block: &Block) -> String {
    let field = |key: &str| -> String {
        block
            .config
            .get(key)
            .map(|v| v.display_text())
            .unwrap_or_default()
    };

    match block.block_type() {
        Some(BlockType::Kpi) => {
            format!("{}{} ({})", field("unit"), field("value"), field("trend"))
        }
        Some(BlockType::ChartBar) | Some(BlockType::ChartLine) => format!(
            "X: {}, Y: {}. {}",
            field("xField"),
            field("yField"),
            field("description")
        ),
        Some(BlockType::FilterDropdown) => {
            format!("Field: {}, Options: {}", field("field"), field("options"))
        }
        Some(BlockType::FilterDate) => format!("Default range: {}", field("defaultRange")),
        Some(BlockType::LayoutTwoColumn) => format!("Columns: {}", field("columns")),
        None => NO_SUMMARY.to_string(),
    }
}
