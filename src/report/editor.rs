//! Configuration editor
//!
//! Applies field-level edits from the settings panel. The editor is
//! deliberately permissive: it stores whatever the input surface provides,
//! verbatim, and never fails. Numeric fields may transiently hold
//! non-numeric text mid-edit, and keys outside the block's schema are stored
//! anyway so fields written by newer frontends are not lost. Keeping this a
//! total function means the UI needs no error-recovery path for
//! keystroke-level edits; the summary renderer tolerates whatever ends up
//! here.

use crate::core::block::Block;
use crate::core::config::{field_specs, ConfigValue, FieldSpec};

/// Store `value` under `key` in the block's config, merging into the
/// existing map. Total: any key, any value, always succeeds.
pub fn set_field(block: &mut Block, key: impl Into<String>, value: impl Into<ConfigValue>) {
    block.config.insert(key.into(), value.into());
}

/// The configuration form schema for a block, in display order.
///
/// `None` when the block's type tag is outside the closed set — the settings
/// panel shows its generic "no configuration available" text for those.
pub fn form_fields(block: &Block) -> Option<&'static [FieldSpec]> {
    block.block_type().map(field_specs)
}
