//! Storage port and the save/load/export collaborator
//!
//! The engine never touches a concrete storage mechanism. Persistence goes
//! through the [`StoragePort`] trait — a durable key-value slot — and the
//! host decides what backs it: the wasm runtime uses [`MemoryStorage`] with
//! the JS side mirroring slots into `localStorage`, native hosts can use
//! [`FileStorage`], tests use either.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::codec;
use crate::core::log::Logger;
use crate::report::store::ReportStore;

/// Logical slot the report layout is saved under.
pub const LAYOUT_STORAGE_KEY: &str = "reportBuilderLayout";

/// File name offered for the export download.
pub const EXPORT_FILE_NAME: &str = "report-layout.json";

/// A durable key-value slot store.
pub trait StoragePort {
    /// Read a slot; `Ok(None)` when the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a slot, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot; deleting an absent slot is a no-op.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory slot store.
///
/// Clones share the same map, so the engine and the host can hold handles to
/// one store. This is the backing used by the wasm runtime.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.slots.write().remove(key);
        Ok(())
    }
}

/// File-backed slot store: one file per slot under a root directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    /// Create a store rooted at the given directory, creating it if needed.
    pub fn new(root: impl Into<std::path::PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn slot_path(&self, key: &str) -> std::path::PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StoragePort for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(std::fs::write(self.slot_path(key), value)?)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Save the report to the layout slot (compact document).
pub fn save_layout(port: &dyn StoragePort, store: &ReportStore) -> Result<(), LoadError> {
    let document = codec::to_persisted(store)?;
    port.write(LAYOUT_STORAGE_KEY, &document)?;
    Ok(())
}

/// Load the saved report from the layout slot.
///
/// # Returns
/// * `Ok(None)` when nothing has been saved yet
/// * `Ok(Some(store))` with the restored sequence
/// * `Err(LoadError)` for storage failures or a malformed document
pub fn load_layout(port: &dyn StoragePort) -> Result<Option<ReportStore>, LoadError> {
    let Some(document) = port.read(LAYOUT_STORAGE_KEY)? else {
        return Ok(None);
    };
    let blocks = codec::from_persisted(&document)?;
    let store = ReportStore::from_blocks(blocks).map_err(|e| {
        // A duplicate id slipping past the codec check would mean the two
        // validations disagree; treat it as a malformed document either way.
        LoadError::Parse(codec::ParseError::DuplicateId(e.to_string()))
    })?;
    Ok(Some(store))
}

/// Load the saved report, falling back to an empty one.
///
/// A corrupt payload is discarded with a warning in the engine log — the
/// user starts from an empty canvas instead of an error dialog.
pub fn load_layout_or_empty(port: &dyn StoragePort, logger: &Logger) -> ReportStore {
    match load_layout(port) {
        Ok(Some(store)) => store,
        Ok(None) => ReportStore::new(),
        Err(LoadError::Storage(e)) => {
            logger.warn(format!("Failed to read saved layout: {e}"));
            ReportStore::new()
        }
        Err(e @ LoadError::Parse(_)) => {
            logger.warn(format!("Failed to parse saved layout: {e}"));
            ReportStore::new()
        }
    }
}

/// Render the export artifact (pretty-printed document) for download as
/// [`EXPORT_FILE_NAME`].
pub fn export_layout(store: &ReportStore) -> Result<String, codec::ParseError> {
    codec::to_export(store)
}

/// Storage error types
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying slot store failed
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// Save/load error types
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The slot store failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The saved document is malformed
    #[error(transparent)]
    Parse(#[from] codec::ParseError),
}
