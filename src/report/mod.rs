//! Report state: the ordered block sequence and its edit operations
//!
//! The store owns the canvas sequence; the editor applies per-field
//! configuration changes. Both are synchronous and atomic — a failed
//! operation is a pure no-op on the sequence.

pub mod editor;
pub mod store;

pub use editor::set_field;
pub use store::{ReportStore, StoreError};
