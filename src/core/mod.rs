//! Core block abstractions and types
//!
//! This module defines the block identity, the closed set of block types,
//! the configuration value system, and the type registry that backs the
//! component palette.

pub mod block;
pub mod config;
pub mod log;
pub mod registry;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a block instance.
///
/// Ids are opaque strings: freshly created blocks get a UUID v4, but loaded
/// documents keep whatever id they carried (older frontends used millisecond
/// timestamps). An id is assigned at creation and never reused or changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Generate a new random block ID
    pub fn generate() -> Self {
        BlockId(Uuid::new_v4().to_string())
    }

    /// View the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for BlockId {
    fn from(s: String) -> Self {
        BlockId(s)
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        BlockId(s.to_string())
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
