//! Persisted table state
//!
//! The settings payload maps document path -> table id -> saved state. The
//! core only reads and writes through this narrow contract; reading and
//! writing the actual settings file (or plugin data store) is the caller's
//! job, as is retrying failed I/O.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::model::AppData;
use crate::utils::error::{Error, Result};

/// Current settings schema version. Version 1 was a flat id -> data map
/// with no view mode; see [`crate::features::migrate`].
pub const CURRENT_FORMAT_VERSION: u32 = 2;

/// How the host editor is currently presenting a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    LivePreview,
    Reading,
}

/// One table's persisted entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTableState {
    pub data: AppData,
    pub view_mode: ViewMode,
    /// Dirty flag: a structural edit happened and the host still owes the
    /// document a markup rewrite
    pub should_update: bool,
}

fn legacy_version() -> u32 {
    1
}

/// The data carried by the host's settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Payloads written before versioning existed deserialize as v1
    #[serde(default = "legacy_version")]
    pub format_version: u32,
    /// Legacy v1 store, emptied by migration
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub app_data: IndexMap<String, IndexMap<String, AppData>>,
    /// path -> table id -> saved state
    #[serde(default)]
    pub state: IndexMap<String, IndexMap<String, SavedTableState>>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            format_version: CURRENT_FORMAT_VERSION,
            app_data: IndexMap::new(),
            state: IndexMap::new(),
        }
    }
}

impl Settings {
    /// Look up the persisted entry for one table
    pub fn load_state(&self, path: &str, table_id: &str) -> Option<&SavedTableState> {
        self.state.get(path).and_then(|bucket| bucket.get(table_id))
    }

    /// Store a table's state, replacing any previous entry wholesale
    pub fn save_state(
        &mut self,
        path: &str,
        table_id: &str,
        data: AppData,
        view_mode: ViewMode,
        should_update: bool,
    ) {
        self.state.entry(path.to_string()).or_default().insert(
            table_id.to_string(),
            SavedTableState {
                data,
                view_mode,
                should_update,
            },
        );
    }

    /// Relocate a document's whole bucket when the file is renamed.
    ///
    /// Entries are moved, not recreated; a subsequent load under the old
    /// path finds nothing. Returns whether anything moved.
    pub fn on_path_renamed(&mut self, old_path: &str, new_path: &str) -> bool {
        match self.state.shift_remove(old_path) {
            Some(bucket) => {
                self.state.insert(new_path.to_string(), bucket);
                true
            }
            None => false,
        }
    }

    /// Parse a settings payload from JSON
    pub fn from_json(json: &str) -> Result<Settings> {
        serde_json::from_str(json).map_err(|err| Error::io(format!("settings payload: {}", err)))
    }

    /// Serialize the settings payload to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| Error::io(format!("settings payload: {}", err)))
    }
}
