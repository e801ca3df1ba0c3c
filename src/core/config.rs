//! Configuration value system for block settings
//!
//! This module defines the values stored in a block's config map, plus the
//! per-type field schemas the settings panel renders from. Values
//! round-trip arbitrary JSON so fields written by newer frontends survive a
//! load/save cycle untouched.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::block::BlockType;

/// A block's configuration: field name → value.
pub type ConfigMap = HashMap<String, ConfigValue>;

/// Configuration value
///
/// `Integer` is tried before `Number` during deserialization so whole
/// numbers stay integral and render without a trailing `.0` in captions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// String value
    String(String),
    /// Integer number
    Integer(i64),
    /// Floating point number
    Number(f64),
    /// Boolean value
    Boolean(bool),
    /// Array of values
    Array(Vec<ConfigValue>),
    /// Object with key-value pairs
    Object(HashMap<String, ConfigValue>),
    /// Null value
    Null,
}

impl ConfigValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Try to view as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(n) => Some(*n),
            ConfigValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Render the value as plain text for captions and form fields.
    ///
    /// Absent semantics live in the caller: a missing field is rendered as
    /// the empty string, and so is `Null`. Containers fall back to compact
    /// JSON so nothing ever panics on an unexpected shape.
    pub fn display_text(&self) -> String {
        match self {
            ConfigValue::String(s) => s.clone(),
            ConfigValue::Integer(i) => i.to_string(),
            ConfigValue::Number(n) => n.to_string(),
            ConfigValue::Boolean(b) => b.to_string(),
            ConfigValue::Null => String::new(),
            other => serde_json::to_string(other).unwrap_or_default(),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<f64> for ConfigValue {
    fn from(n: f64) -> Self {
        ConfigValue::Number(n)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Boolean(b)
    }
}

/// Field kinds a schema field can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text
    Text,
    /// Numeric (may transiently hold text mid-edit; see the editor contract)
    Number,
    /// One of a fixed set of string values
    Choice,
}

/// Widget hint for the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    /// Single-line text input
    Input,
    /// Numeric input
    NumberInput,
    /// Select dropdown
    Select,
    /// Multi-line text area
    Textarea,
}

/// One field of a block type's configuration schema.
///
/// Serialize-only: the frontend reads schemas, nothing writes them back.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    /// Config map key
    pub key: &'static str,
    /// Form label
    pub label: &'static str,
    /// Value kind
    pub kind: FieldKind,
    /// Widget hint
    pub widget: Widget,
    /// Allowed values for `Choice` fields
    pub choices: &'static [&'static str],
}

const NO_CHOICES: &[&str] = &[];

/// Allowed values for the date filter's default range.
pub const DATE_RANGE_CHOICES: &[&str] = &["last_7_days", "last_30_days", "this_month", "custom"];

/// Allowed column ratios for the two-column layout block.
pub const COLUMN_RATIO_CHOICES: &[&str] = &["1:1", "2:1", "1:2"];

/// Configuration schema for a block type, in form display order.
pub fn field_specs(block_type: BlockType) -> &'static [FieldSpec] {
    match block_type {
        BlockType::Kpi => &[
            FieldSpec {
                key: "value",
                label: "Metric Value",
                kind: FieldKind::Number,
                widget: Widget::NumberInput,
                choices: NO_CHOICES,
            },
            FieldSpec {
                key: "unit",
                label: "Unit (e.g. ₹, %, users)",
                kind: FieldKind::Text,
                widget: Widget::Input,
                choices: NO_CHOICES,
            },
            FieldSpec {
                key: "trend",
                label: "Trend",
                kind: FieldKind::Text,
                widget: Widget::Input,
                choices: NO_CHOICES,
            },
        ],
        BlockType::ChartBar | BlockType::ChartLine => &[
            FieldSpec {
                key: "xField",
                label: "X-Axis Field",
                kind: FieldKind::Text,
                widget: Widget::Input,
                choices: NO_CHOICES,
            },
            FieldSpec {
                key: "yField",
                label: "Y-Axis Field",
                kind: FieldKind::Text,
                widget: Widget::Input,
                choices: NO_CHOICES,
            },
            FieldSpec {
                key: "description",
                label: "Description / Notes",
                kind: FieldKind::Text,
                widget: Widget::Textarea,
                choices: NO_CHOICES,
            },
        ],
        BlockType::FilterDropdown => &[
            FieldSpec {
                key: "field",
                label: "Field Name",
                kind: FieldKind::Text,
                widget: Widget::Input,
                choices: NO_CHOICES,
            },
            FieldSpec {
                key: "options",
                label: "Options (comma separated)",
                kind: FieldKind::Text,
                widget: Widget::Input,
                choices: NO_CHOICES,
            },
        ],
        BlockType::FilterDate => &[FieldSpec {
            key: "defaultRange",
            label: "Default Range",
            kind: FieldKind::Choice,
            widget: Widget::Select,
            choices: DATE_RANGE_CHOICES,
        }],
        BlockType::LayoutTwoColumn => &[FieldSpec {
            key: "columns",
            label: "Column Ratio",
            kind: FieldKind::Choice,
            widget: Widget::Select,
            choices: COLUMN_RATIO_CHOICES,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_stay_integral_through_serde() {
        let v: ConfigValue = serde_json::from_str("12345").unwrap();
        assert_eq!(v, ConfigValue::Integer(12345));
        assert_eq!(v.display_text(), "12345");
    }

    #[test]
    fn floats_display_naturally() {
        let v: ConfigValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(v.display_text(), "2.5");
    }

    #[test]
    fn null_displays_empty() {
        assert_eq!(ConfigValue::Null.display_text(), "");
    }

    #[test]
    fn arbitrary_json_round_trips() {
        let raw = r#"{"nested":{"a":[1,"two",null]},"flag":true}"#;
        let v: ConfigValue = serde_json::from_str(raw).unwrap();
        let back = serde_json::to_value(&v).unwrap();
        let original: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn schema_defaults_cover_every_field() {
        // Every schema field has a default value of the declared kind.
        for t in BlockType::ALL {
            let defaults = t.default_config();
            for spec in field_specs(t) {
                let value = defaults
                    .get(spec.key)
                    .unwrap_or_else(|| panic!("{} missing default for {}", t, spec.key));
                match spec.kind {
                    FieldKind::Number => assert!(value.as_number().is_some()),
                    FieldKind::Text => assert!(value.as_str().is_some()),
                    FieldKind::Choice => {
                        let s = value.as_str().expect("choice default must be a string");
                        assert!(spec.choices.contains(&s), "{s} not in choices");
                    }
                }
            }
        }
    }
}
