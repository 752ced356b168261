//! Application core for the Conformance Board.
//!
//! Sits between the loaded tables and the external renderer: maintains the
//! current selections and filters, computes the picker lists and compliance
//! table as plain data, and keeps the minimal navigation state in
//! session-scoped storage so a reload within the same session restores the
//! previous view.
//!
//! - [`Board`]: the explicit application-state object; every user action is
//!   a method on it
//! - [`filter`]: pure picker/table computations
//! - [`view`]: serializable view models handed to the renderer
//! - [`session`]: the [`SessionStore`] seam and the state tracker
//!
//! The crate never touches a DOM or widget API; it emits data only.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use dataset::Dataset;
//! use inspector::{Board, MemorySessionStore};
//!
//! let store = Arc::new(MemorySessionStore::new());
//! let mut board = Board::new(Dataset::fixture(), store);
//!
//! board.set_field_query("barcode");
//! let picker = board.field_picker();
//! assert_eq!(picker.len(), 1);
//!
//! board.select_field("Item Barcode");
//! let detail = board.field_detail().expect("a field is selected");
//! assert_eq!(detail.field_name, "Item Barcode");
//! ```

pub mod board;
pub mod filter;
pub mod session;
pub mod view;

// Re-export main types
pub use board::Board;
pub use filter::{FieldOption, StandardOption, TableFilters};
pub use session::{
    MemorySessionStore, SessionState, SessionStore, SessionTracker, StoreError, ViewId,
};
pub use view::{ComplianceRow, ComplianceTableView, FieldDetailView};
