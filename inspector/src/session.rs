//! Session-scoped navigation state.
//!
//! The minimal state needed to restore the previous view on a reload within
//! the same session: active view, selections, and the field-inspector
//! filters. Selections are stored by name, not table index, and the state
//! carries the dataset content hash; a restore against different data
//! degrades to no-selection instead of pointing at the wrong row.
//!
//! Storage is behind the [`SessionStore`] trait. The host environment owns
//! the real session storage and its lifetime; [`MemorySessionStore`] covers
//! tests and headless use. Writes are fire-and-forget: a failing store is
//! logged and never fails the user action it accompanies.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Fixed storage key for the serialized state.
pub const STATE_KEY: &str = "conformance-board-state";

/// The two inspector views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    /// One field against the whole catalog
    FieldInspector,
    /// One standard across all fields
    StandardInspector,
}

impl Default for ViewId {
    fn default() -> Self {
        Self::FieldInspector
    }
}

/// Snapshot of the navigation state, captured after every mutating action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Which inspector was active
    pub active_view: ViewId,
    /// Selected field, by name
    pub field_selection: Option<String>,
    /// Selected standard, by name
    pub standard_selection: Option<String>,
    /// Field-inspector module dropdown value
    pub module_filter: String,
    /// Field-inspector name search text
    pub field_query: String,
    /// Content hash of the dataset the selections refer to
    pub dataset_hash: String,
    /// When this snapshot was taken
    #[cfg_attr(feature = "typescript", ts(type = "string"))]
    pub saved_at: DateTime<Utc>,
}

/// Error types for session storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store rejected the operation
    #[error("Session storage failed: {0}")]
    Storage(String),
}

/// Trait over session-scoped key-value storage.
///
/// One string key, one JSON-serializable value, scoped to the session or
/// tab lifetime; clearing at session end is the host's concern.
pub trait SessionStore: Send + Sync {
    /// Store a value, overwriting any prior one.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read a value back; absent keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
}

/// In-memory store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }
}

/// Persists and restores [`SessionState`] under the fixed key.
pub struct SessionTracker {
    store: Arc<dyn SessionStore>,
}

impl SessionTracker {
    /// Create a tracker over the given store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Serialize and store the state. Fire-and-forget: failures are logged
    /// and swallowed so the user action that triggered the save never
    /// fails.
    pub fn persist(&self, state: &SessionState) {
        let serialized = match serde_json::to_string(state) {
            Ok(serialized) => serialized,
            Err(error) => {
                warn!(%error, "Could not serialize session state");
                return;
            }
        };

        if let Err(error) = self.store.put(STATE_KEY, &serialized) {
            warn!(%error, "Could not persist session state");
        }
    }

    /// Read the stored state back. Absent, unreadable, and malformed all
    /// yield `None`; this never fails.
    pub fn restore(&self) -> Option<SessionState> {
        let serialized = match self.store.get(STATE_KEY) {
            Ok(Some(serialized)) => serialized,
            Ok(None) => {
                debug!("No stored session state");
                return None;
            }
            Err(error) => {
                warn!(%error, "Could not read session state");
                return None;
            }
        };

        match serde_json::from_str(&serialized) {
            Ok(state) => Some(state),
            Err(error) => {
                warn!(%error, "Stored session state is malformed, ignoring");
                None
            }
        }
    }
}
