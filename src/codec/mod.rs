//! Serialization codec for the persisted layout document
//!
//! The persisted representation is a JSON array of `{id, type, title,
//! config}` records in report order. Array order is significant and is
//! preserved exactly; field order within a record is not. The same document
//! backs the save/restore slot (compact) and the export download
//! (pretty-printed with 2-space indentation).
//!
//! Loading validates structure only: the top level must be an array of
//! records each carrying all four fields, and ids must be unique. Unknown
//! `type` tags and schema-malformed configs pass through untouched — a block
//! with an unrecognized type is retained and later rendered with the generic
//! fallbacks, not rejected.

pub mod summary;

use std::collections::HashSet;

use crate::core::block::Block;
use crate::report::store::ReportStore;

pub use summary::summarize;

/// Encode the report as the compact persisted document.
pub fn to_persisted(store: &ReportStore) -> Result<String, ParseError> {
    Ok(serde_json::to_string(store.blocks())?)
}

/// Encode the report as the export artifact: the same document,
/// pretty-printed with 2-space indentation.
pub fn to_export(store: &ReportStore) -> Result<String, ParseError> {
    Ok(serde_json::to_string_pretty(store.blocks())?)
}

/// Decode a persisted document into its block sequence, in document order.
pub fn from_persisted(document: &str) -> Result<Vec<Block>, ParseError> {
    let blocks: Vec<Block> = serde_json::from_str(document)?;

    let mut seen = HashSet::new();
    for block in &blocks {
        if !seen.insert(block.id.as_str()) {
            return Err(ParseError::DuplicateId(block.id.to_string()));
        }
    }
    Ok(blocks)
}

/// Persisted-document error types
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Document is not an ordered array of `{id, type, title, config}` records
    #[error("Malformed layout document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two records share an id
    #[error("Duplicate block id in document: {0}")]
    DuplicateId(String),
}
