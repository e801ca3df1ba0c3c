//! Report store - the ordered sequence of blocks on the canvas
//!
//! A single linear sequence keyed by opaque block id. Addressing blocks by
//! id rather than array index keeps `move_before` and `remove` stable when
//! several UI interactions dispatch in the same tick, and avoids index-shift
//! bugs when a deletion lands mid-drag.
//!
//! Order is meaningful — it is the render and export order — and it is the
//! only ordering: the store never re-sorts by type, title, or anything else.

use crate::core::block::Block;
use crate::core::config::ConfigValue;
use crate::core::BlockId;
use crate::report::editor;

/// Ordered sequence of block instances for the current report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportStore {
    blocks: Vec<Block>,
}

impl ReportStore {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an already-loaded sequence (whole-report load;
    /// there is no partial or streaming load).
    ///
    /// # Returns
    /// * `Err(StoreError::DuplicateId)` if two blocks share an id — the
    ///   codec rejects such documents before they get here, this guards
    ///   hand-built sequences.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for block in blocks {
            store.append(block)?;
        }
        Ok(store)
    }

    /// The sequence, in render order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks in the report
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the report is empty
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether a block with the given id is present
    pub fn contains(&self, id: &BlockId) -> bool {
        self.index_of(id).is_some()
    }

    /// Insert a block at the end of the sequence.
    ///
    /// Returns the stored block so the caller can select it (selection is a
    /// UI concern; the store only reports the identity). Fails with
    /// `DuplicateId` if the id is already present — unreachable when blocks
    /// come from the registry, which generates fresh ids.
    pub fn append(&mut self, block: Block) -> Result<&Block, StoreError> {
        if self.contains(&block.id) {
            return Err(StoreError::DuplicateId(block.id.clone()));
        }
        let idx = self.blocks.len();
        self.blocks.push(block);
        Ok(&self.blocks[idx])
    }

    /// Move the block with `moved_id` immediately before the block with
    /// `target_id`, preserving the relative order of all other blocks.
    ///
    /// This is the drag-reorder primitive: the user drops one canvas block
    /// onto another, and the dragged block takes the target's slot.
    ///
    /// # Returns
    /// `true` if a move happened; `false` for the no-op cases (ids equal,
    /// either id absent), which leave the sequence untouched.
    pub fn move_before(&mut self, moved_id: &BlockId, target_id: &BlockId) -> bool {
        if moved_id == target_id {
            return false;
        }
        let (moved_idx, target_idx) = match (self.index_of(moved_id), self.index_of(target_id)) {
            (Some(m), Some(t)) => (m, t),
            _ => return false,
        };

        let moved = self.blocks.remove(moved_idx);
        // Removing the dragged block shifts the target left when the drag
        // came from an earlier slot.
        let insert_at = if moved_idx < target_idx {
            target_idx - 1
        } else {
            target_idx
        };
        self.blocks.insert(insert_at, moved);
        true
    }

    /// Delete the block with the given id, returning it.
    ///
    /// Callers that held the block selected must clear their selection; the
    /// store holds no selection state, but after removal every lookup of the
    /// id fails with `NotFound`, so a stale selection is detectable.
    pub fn remove(&mut self, id: &BlockId) -> Result<Block, StoreError> {
        match self.index_of(id) {
            Some(idx) => Ok(self.blocks.remove(idx)),
            None => Err(StoreError::NotFound(id.clone())),
        }
    }

    /// Look up a block by id
    pub fn find(&self, id: &BlockId) -> Result<&Block, StoreError> {
        self.index_of(id)
            .map(|idx| &self.blocks[idx])
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Replace a block's title
    pub fn set_title(
        &mut self,
        id: &BlockId,
        title: impl Into<String>,
    ) -> Result<&Block, StoreError> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        self.blocks[idx].title = title.into();
        Ok(&self.blocks[idx])
    }

    /// Set one configuration field on a block, by id.
    ///
    /// Id-keyed convenience over [`editor::set_field`] for UI callers; the
    /// edit itself never fails, only the lookup can.
    pub fn set_config_field(
        &mut self,
        id: &BlockId,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Result<&Block, StoreError> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        editor::set_field(&mut self.blocks[idx], key, value);
        Ok(&self.blocks[idx])
    }

    /// Swap in a loaded sequence, discarding the current one.
    pub fn replace(&mut self, blocks: Vec<Block>) -> Result<(), StoreError> {
        *self = Self::from_blocks(blocks)?;
        Ok(())
    }

    fn index_of(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }
}

/// Store error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// No block with the given id in the sequence
    #[error("Block not found: {0}")]
    NotFound(BlockId),

    /// Attempted to append a block whose id is already present
    #[error("Duplicate block id: {0}")]
    DuplicateId(BlockId),
}
