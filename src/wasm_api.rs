//! WASM API — `#[wasm_bindgen]` exports matching the frontend's engine interface.
//!
//! This module is only compiled when targeting `wasm32`. It provides:
//! - `init_engine` / `destroy_engine` — lifecycle
//! - `get_block_types` — palette catalog
//! - `add_block` / `move_block` / `remove_block` — canvas mutations
//! - `set_block_title` / `set_config_field` / `get_form_fields` — settings
//!   panel edits and the form schema that drives them
//! - `get_block` / `list_blocks` — canvas and preview state
//! - `save_layout` / `load_layout` / `export_layout` — persistence
//! - `drain_logs` — engine event log for the debug console
//!
//! Everything crosses the boundary as JSON strings; errors come back as
//! `{"error": "..."}` objects, never as panics.

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::codec;
use crate::core::block::Block;
use crate::core::config::{ConfigValue, FieldSpec};
use crate::core::log::{LogEntry, Logger};
use crate::core::registry::BlockTypeRegistry;
use crate::core::BlockId;
use crate::report::editor;
use crate::report::store::ReportStore;
use crate::storage::{self, MemoryStorage};

// ── Global state ────────────────────────────────────────────────────────────

struct EngineState {
    registry: BlockTypeRegistry,
    store: ReportStore,
    storage: MemoryStorage,
    logger: Logger,
}

thread_local! {
    static ENGINE: RefCell<Option<EngineState>> = RefCell::new(None);
}

fn with_engine<R>(f: impl FnOnce(&mut EngineState) -> R) -> Result<R, String> {
    ENGINE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(state) => Ok(f(state)),
            None => Err("Engine not initialized. Call init_engine() first.".into()),
        }
    })
}

// ── Response types ──────────────────────────────────────────────────────────

#[derive(Serialize)]
struct OkResponse {
    id: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct MovedResponse {
    moved: bool,
}

#[derive(Serialize)]
struct BlockResponse<'a> {
    #[serde(flatten)]
    block: &'a Block,
    #[serde(rename = "typeLabel")]
    type_label: &'a str,
    summary: String,
}

#[derive(Serialize)]
struct FormFieldsResponse {
    /// `null` when the block's type has no form (unknown type tag); the
    /// settings panel shows its "no configuration available" text.
    fields: Option<&'static [FieldSpec]>,
}

#[derive(Serialize)]
struct LoadResponse {
    restored: bool,
    #[serde(rename = "blockCount")]
    block_count: usize,
}

fn json_ok(id: &str) -> String {
    serde_json::to_string(&OkResponse { id: id.into() }).unwrap_or_default()
}

fn json_err(msg: impl Into<String>) -> String {
    serde_json::to_string(&ErrorResponse { error: msg.into() }).unwrap_or_default()
}

fn block_response(block: &Block) -> BlockResponse<'_> {
    BlockResponse {
        block,
        type_label: block.type_label(),
        summary: codec::summarize(block),
    }
}

// ── Exported functions ──────────────────────────────────────────────────────

#[wasm_bindgen]
pub fn init_engine() {
    console_error_panic_hook::set_once();

    ENGINE.with(|cell| {
        *cell.borrow_mut() = Some(EngineState {
            registry: BlockTypeRegistry::new(),
            store: ReportStore::new(),
            storage: MemoryStorage::new(),
            logger: Logger::new(),
        });
    });
}

#[wasm_bindgen]
pub fn destroy_engine() {
    ENGINE.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Palette catalog: descriptors in palette order, grouped by category.
#[wasm_bindgen]
pub fn get_block_types() -> String {
    match with_engine(|state| serde_json::to_string(state.registry.descriptors())) {
        Ok(Ok(json)) => json,
        Ok(Err(e)) => json_err(format!("{e}")),
        Err(e) => json_err(e),
    }
}

/// Instantiate a block from a palette type tag and append it to the canvas.
/// Responds with the new block's id so the frontend can select it.
#[wasm_bindgen]
pub fn add_block(type_tag: &str) -> String {
    match with_engine(|state| {
        let block = state
            .registry
            .instantiate(type_tag)
            .map_err(|e| e.to_string())?;
        let stored = state.store.append(block).map_err(|e| e.to_string())?;
        let id = stored.id.to_string();
        state.logger.info(format!("Created {type_tag} block {id}"));
        Ok::<String, String>(id)
    }) {
        Ok(Ok(id)) => json_ok(&id),
        Ok(Err(e)) => json_err(e),
        Err(e) => json_err(e),
    }
}

/// Reorder: move `moved_id` immediately before `target_id`. Degenerate
/// drops (same id, absent ids) report `moved: false` and change nothing.
#[wasm_bindgen]
pub fn move_block(moved_id: &str, target_id: &str) -> String {
    match with_engine(|state| {
        let moved = state
            .store
            .move_before(&BlockId::from(moved_id), &BlockId::from(target_id));
        if moved {
            state
                .logger
                .debug(format!("Moved block {moved_id} before {target_id}"));
        }
        moved
    }) {
        Ok(moved) => serde_json::to_string(&MovedResponse { moved }).unwrap_or_default(),
        Err(e) => json_err(e),
    }
}

#[wasm_bindgen]
pub fn remove_block(id: &str) -> String {
    match with_engine(|state| {
        state
            .store
            .remove(&BlockId::from(id))
            .map(|removed| {
                state
                    .logger
                    .info(format!("Removed {} block {id}", removed.type_tag()));
                removed
            })
            .map_err(|e| e.to_string())
    }) {
        Ok(Ok(_)) => json_ok(id),
        Ok(Err(e)) => json_err(e),
        Err(e) => json_err(e),
    }
}

#[wasm_bindgen]
pub fn set_block_title(id: &str, title: &str) -> String {
    match with_engine(|state| {
        state
            .store
            .set_title(&BlockId::from(id), title)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }) {
        Ok(Ok(())) => json_ok(id),
        Ok(Err(e)) => json_err(e),
        Err(e) => json_err(e),
    }
}

/// Settings panel edit: store one config field verbatim. The value arrives
/// as JSON so numbers stay numbers; a bare string that fails to parse as
/// JSON is stored as text (keystroke edits send raw input values).
#[wasm_bindgen]
pub fn set_config_field(id: &str, key: &str, value_json: &str) -> String {
    let value: ConfigValue = serde_json::from_str(value_json)
        .unwrap_or_else(|_| ConfigValue::String(value_json.to_string()));

    match with_engine(|state| {
        state
            .store
            .set_config_field(&BlockId::from(id), key, value)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }) {
        Ok(Ok(())) => json_ok(id),
        Ok(Err(e)) => json_err(e),
        Err(e) => json_err(e),
    }
}

/// The form schema for a block's settings panel: field keys, labels, kinds,
/// widget hints, and choice lists, in display order. `fields` is `null` for
/// blocks whose type tag is outside the known set.
#[wasm_bindgen]
pub fn get_form_fields(id: &str) -> String {
    match with_engine(|state| {
        state
            .store
            .find(&BlockId::from(id))
            .map(|block| {
                serde_json::to_string(&FormFieldsResponse {
                    fields: editor::form_fields(block),
                })
                .unwrap_or_default()
            })
            .map_err(|e| e.to_string())
    }) {
        Ok(Ok(json)) => json,
        Ok(Err(e)) => json_err(e),
        Err(e) => json_err(e),
    }
}

/// One block with its rendered type label and summary caption.
#[wasm_bindgen]
pub fn get_block(id: &str) -> String {
    match with_engine(|state| {
        state
            .store
            .find(&BlockId::from(id))
            .map(|block| serde_json::to_string(&block_response(block)).unwrap_or_default())
            .map_err(|e| e.to_string())
    }) {
        Ok(Ok(json)) => json,
        Ok(Err(e)) => json_err(e),
        Err(e) => json_err(e),
    }
}

/// The whole canvas in render order, with summaries, for the canvas and the
/// preview modal.
#[wasm_bindgen]
pub fn list_blocks() -> String {
    match with_engine(|state| {
        let rendered: Vec<_> = state.store.blocks().iter().map(block_response).collect();
        serde_json::to_string(&rendered).unwrap_or_default()
    }) {
        Ok(json) => json,
        Err(e) => json_err(e),
    }
}

#[wasm_bindgen]
pub fn save_layout() -> String {
    match with_engine(|state| {
        storage::save_layout(&state.storage, &state.store).map_err(|e| e.to_string())
    }) {
        Ok(Ok(())) => json_ok(storage::LAYOUT_STORAGE_KEY),
        Ok(Err(e)) => json_err(e),
        Err(e) => json_err(e),
    }
}

/// Restore the saved layout into the store. A corrupt or absent payload
/// leaves an empty canvas; corruption is reported through the event log,
/// not as a failure.
#[wasm_bindgen]
pub fn load_layout() -> String {
    match with_engine(|state| {
        let restored = match storage::load_layout(&state.storage) {
            Ok(Some(store)) => {
                state.store = store;
                true
            }
            Ok(None) => false,
            Err(e) => {
                state
                    .logger
                    .warn(format!("Failed to parse saved layout: {e}"));
                state.store = ReportStore::new();
                false
            }
        };
        serde_json::to_string(&LoadResponse {
            restored,
            block_count: state.store.len(),
        })
        .unwrap_or_default()
    }) {
        Ok(json) => json,
        Err(e) => json_err(e),
    }
}

/// The export artifact: the layout document pretty-printed with 2-space
/// indentation, for download as `report-layout.json`.
#[wasm_bindgen]
pub fn export_layout() -> String {
    match with_engine(|state| codec::to_export(&state.store).map_err(|e| e.to_string())) {
        Ok(Ok(json)) => json,
        Ok(Err(e)) => json_err(e),
        Err(e) => json_err(e),
    }
}

/// Drain buffered engine events for the debug console.
#[wasm_bindgen]
pub fn drain_logs() -> String {
    match with_engine(|state| {
        let entries: Vec<LogEntry> = state.logger.drain();
        serde_json::to_string(&entries).unwrap_or_default()
    }) {
        Ok(json) => json,
        Err(e) => json_err(e),
    }
}
