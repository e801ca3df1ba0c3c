//! Block Type Registry - static catalog of the block types in the palette
//!
//! The registry is a pure lookup table built once at startup. It supports:
//! - Listing descriptors in palette order (declaration order, grouped by category)
//! - Filtering descriptors by category for palette sections
//! - Describing a type by wire tag
//! - Instantiating a fresh block from a type's defaults

use super::block::{Block, BlockCategory, BlockType, BlockTypeDescriptor};
use super::BlockId;

/// Static catalog of block types.
///
/// Holds no mutable state; the only side effect of any operation is the id
/// generation inside [`instantiate`](Self::instantiate). Descriptor order is
/// declaration order and is what the palette renders.
#[derive(Debug, Clone)]
pub struct BlockTypeRegistry {
    descriptors: Vec<BlockTypeDescriptor>,
}

impl BlockTypeRegistry {
    /// Build the catalog from the closed type set.
    pub fn new() -> Self {
        let descriptors = BlockType::ALL
            .iter()
            .map(|&block_type| BlockTypeDescriptor {
                block_type,
                label: block_type.label().to_string(),
                category: block_type.category(),
                default_title: block_type.default_title().to_string(),
                default_config: block_type.default_config(),
            })
            .collect();
        Self { descriptors }
    }

    /// All descriptors in palette order.
    pub fn descriptors(&self) -> &[BlockTypeDescriptor] {
        &self.descriptors
    }

    /// Descriptors belonging to one palette category, in palette order.
    pub fn descriptors_in_category(&self, category: BlockCategory) -> Vec<&BlockTypeDescriptor> {
        self.descriptors
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    /// Look up the descriptor for a wire tag.
    ///
    /// # Returns
    /// * `Ok(&BlockTypeDescriptor)` when the tag is in the closed set
    /// * `Err(RegistryError::UnknownType)` otherwise
    pub fn describe(&self, tag: &str) -> Result<&BlockTypeDescriptor, RegistryError> {
        self.descriptors
            .iter()
            .find(|d| d.block_type.as_str() == tag)
            .ok_or_else(|| RegistryError::UnknownType(tag.to_string()))
    }

    /// Create a fresh block of the given type.
    ///
    /// The new block gets a newly generated unique id, the descriptor's
    /// default title, and a deep copy of the default config — mutating one
    /// instance's config never affects the registry defaults or any other
    /// instance.
    pub fn instantiate(&self, tag: &str) -> Result<Block, RegistryError> {
        let descriptor = self.describe(tag)?;
        Ok(Block::new(
            BlockId::generate(),
            descriptor.block_type.as_str(),
            descriptor.default_title.clone(),
            descriptor.default_config.clone(),
        ))
    }
}

impl Default for BlockTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    /// Wire tag outside the closed type set
    #[error("Unknown block type: {0}")]
    UnknownType(String),
}
