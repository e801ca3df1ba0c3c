//! Layout Engine - Core implementation for the Visual Report Builder
//!
//! This crate provides the block layout engine behind the report builder
//! canvas: the block data model, the type registry that backs the palette,
//! the ordered report store, the configuration editor, and the codec used
//! for save/load and export.

pub mod codec;
pub mod core;
pub mod report;
pub mod storage;
mod tests;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

// Re-export commonly used types
pub use crate::core::block::{Block, BlockCategory, BlockType, BlockTypeDescriptor};
pub use crate::core::registry::BlockTypeRegistry;
pub use crate::core::BlockId;
pub use crate::report::store::ReportStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
