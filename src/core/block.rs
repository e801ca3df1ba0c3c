//! Block model
//!
//! This module defines the closed set of block types, their palette
//! metadata, and the `Block` instance type that lives on the canvas.

use serde::{Deserialize, Serialize};

use super::config::{ConfigMap, ConfigValue};
use super::BlockId;

/// The closed set of block types known to the builder.
///
/// The wire tag (`kpi`, `chart_bar`, ...) is what the persisted document and
/// the frontend use. Every piece of type-conditional behavior — labels,
/// default titles, default configs, field schemas, summaries — is an
/// exhaustive `match` on this enum, so adding a type is a compile-time
/// checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Kpi,
    ChartBar,
    ChartLine,
    FilterDropdown,
    FilterDate,
    LayoutTwoColumn,
}

impl BlockType {
    /// All types in declaration order (palette order, grouped by category).
    pub const ALL: [BlockType; 6] = [
        BlockType::Kpi,
        BlockType::ChartBar,
        BlockType::ChartLine,
        BlockType::FilterDropdown,
        BlockType::FilterDate,
        BlockType::LayoutTwoColumn,
    ];

    /// The wire tag used in persisted documents and frontend messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Kpi => "kpi",
            BlockType::ChartBar => "chart_bar",
            BlockType::ChartLine => "chart_line",
            BlockType::FilterDropdown => "filter_dropdown",
            BlockType::FilterDate => "filter_date",
            BlockType::LayoutTwoColumn => "layout_two_column",
        }
    }

    /// Parse a wire tag. Returns `None` for tags outside the closed set —
    /// the registry turns that into `UnknownType`, while the codec and the
    /// summary renderer tolerate it.
    pub fn parse(tag: &str) -> Option<BlockType> {
        BlockType::ALL.iter().copied().find(|t| t.as_str() == tag)
    }

    /// Human-readable palette name.
    pub fn label(&self) -> &'static str {
        match self {
            BlockType::Kpi => "KPI Metric",
            BlockType::ChartBar => "Bar Chart",
            BlockType::ChartLine => "Line Chart",
            BlockType::FilterDropdown => "Dropdown Filter",
            BlockType::FilterDate => "Date Range Filter",
            BlockType::LayoutTwoColumn => "Two Column Layout",
        }
    }

    /// Palette category this type belongs to.
    pub fn category(&self) -> BlockCategory {
        match self {
            BlockType::Kpi => BlockCategory::Metrics,
            BlockType::ChartBar | BlockType::ChartLine => BlockCategory::Visualizations,
            BlockType::FilterDropdown | BlockType::FilterDate => BlockCategory::Filters,
            BlockType::LayoutTwoColumn => BlockCategory::Layouts,
        }
    }

    /// Title given to a freshly created block of this type.
    pub fn default_title(&self) -> &'static str {
        match self {
            BlockType::Kpi => "Revenue KPI",
            BlockType::ChartBar => "Sales by Category",
            BlockType::ChartLine => "Trend Over Time",
            BlockType::FilterDropdown => "Region Filter",
            BlockType::FilterDate => "Date Range Filter",
            BlockType::LayoutTwoColumn => "Two Column Layout",
        }
    }

    /// Configuration a freshly created block of this type starts with.
    pub fn default_config(&self) -> ConfigMap {
        let mut config = ConfigMap::new();
        match self {
            BlockType::Kpi => {
                config.insert("value".into(), ConfigValue::Integer(12345));
                config.insert("unit".into(), ConfigValue::from("₹"));
                config.insert("trend".into(), ConfigValue::from("+12% vs last month"));
            }
            BlockType::ChartBar | BlockType::ChartLine => {
                config.insert("xField".into(), ConfigValue::from("date"));
                config.insert("yField".into(), ConfigValue::from("revenue"));
                config.insert(
                    "description".into(),
                    ConfigValue::from("Sample chart configuration."),
                );
            }
            BlockType::FilterDropdown => {
                config.insert("field".into(), ConfigValue::from("region"));
                config.insert(
                    "options".into(),
                    ConfigValue::from("North, South, East, West"),
                );
            }
            BlockType::FilterDate => {
                config.insert("defaultRange".into(), ConfigValue::from("last_30_days"));
            }
            BlockType::LayoutTwoColumn => {
                config.insert("columns".into(), ConfigValue::from("1:1"));
            }
        }
        config
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Palette category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockCategory {
    /// KPI tiles and other single-number metrics
    Metrics,
    /// Charts
    Visualizations,
    /// Report-level filters
    Filters,
    /// Layout scaffolding
    Layouts,
}

impl BlockCategory {
    /// All categories in palette display order.
    pub const ALL: [BlockCategory; 4] = [
        BlockCategory::Metrics,
        BlockCategory::Visualizations,
        BlockCategory::Filters,
        BlockCategory::Layouts,
    ];

    /// Get a human-readable name for the category
    pub fn display_name(&self) -> &str {
        match self {
            BlockCategory::Metrics => "Metrics",
            BlockCategory::Visualizations => "Visualizations",
            BlockCategory::Filters => "Filters",
            BlockCategory::Layouts => "Layouts",
        }
    }
}

impl std::fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Registry entry describing one block type for the palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockTypeDescriptor {
    /// The block type this entry describes
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Human-readable palette name
    pub label: String,
    /// Palette category
    pub category: BlockCategory,
    /// Title given to new instances
    #[serde(rename = "defaultTitle")]
    pub default_title: String,
    /// Configuration given to new instances (deep-copied per instance)
    #[serde(rename = "defaultConfig")]
    pub default_config: ConfigMap,
}

/// One configured block instance on the canvas.
///
/// The type tag is fixed at creation — there is no retyping a block — so the
/// field is private and only readable. It is kept as the raw string rather
/// than the parsed [`BlockType`] because loaded documents may carry tags
/// outside the closed set, and those blocks are retained rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique, stable identity
    pub id: BlockId,
    #[serde(rename = "type")]
    type_tag: String,
    /// Free-text label, user-editable
    pub title: String,
    /// Type-specific settings; unknown keys are preserved
    pub config: ConfigMap,
}

impl Block {
    /// Assemble a block from parts. Callers normally go through
    /// [`BlockTypeRegistry::instantiate`](super::registry::BlockTypeRegistry::instantiate)
    /// or the codec instead.
    pub fn new(
        id: BlockId,
        type_tag: impl Into<String>,
        title: impl Into<String>,
        config: ConfigMap,
    ) -> Self {
        Self {
            id,
            type_tag: type_tag.into(),
            title: title.into(),
            config,
        }
    }

    /// The raw type tag, which may be outside the closed set for blocks
    /// loaded from newer documents.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// The parsed block type, when the tag is in the closed set.
    pub fn block_type(&self) -> Option<BlockType> {
        BlockType::parse(&self.type_tag)
    }

    /// Display label for the canvas header: the palette label when the type
    /// is known, the raw tag otherwise.
    pub fn type_label(&self) -> &str {
        match self.block_type() {
            Some(t) => t.label(),
            None => &self.type_tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_tags_round_trip() {
        for t in BlockType::ALL {
            assert_eq!(BlockType::parse(t.as_str()), Some(t));
        }
        assert_eq!(BlockType::parse("unknown_type"), None);
    }

    #[test]
    fn serde_tag_matches_as_str() {
        for t in BlockType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn declaration_order_groups_by_category() {
        // The palette renders ALL in order under category headers; a type
        // sorted out of its category group would split a palette section.
        let mut seen = Vec::new();
        for t in BlockType::ALL {
            if seen.last() != Some(&t.category()) {
                seen.push(t.category());
            }
        }
        let mut deduped = seen.clone();
        deduped.dedup();
        assert_eq!(seen, deduped, "categories must be contiguous");
    }

    #[test]
    fn unknown_tag_keeps_raw_label() {
        let block = Block::new(BlockId::from("b1"), "unknown_type", "Mystery", ConfigMap::new());
        assert_eq!(block.block_type(), None);
        assert_eq!(block.type_label(), "unknown_type");
    }
}
