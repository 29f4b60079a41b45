//! WASM bindings for gridmark
//!
//! This module provides JavaScript-accessible entry points for editor-plugin
//! hosts: load a table (reconciling against the serialized settings
//! payload), run structural edits, and emit markup. Settings travel as JSON
//! strings; results come back as structured objects.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{
    add_column_to_focused, add_row_to_focused, app_data_to_markdown, insert_empty_table,
    load_table, migrate_settings, AppData, FocusedTable, Settings, ViewMode,
};

/// Result of a load or edit call, with the updated settings payload
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct TableResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Error message if the operation failed
    pub error: Option<String>,
    /// Id of the table operated on
    pub table_id: Option<String>,
    /// The resulting table model
    pub data: Option<AppData>,
    /// Updated settings payload (JSON), to be written back by the host
    pub settings: Option<String>,
    /// Regenerated markup after a structural edit
    pub markdown: Option<String>,
}

#[cfg(feature = "wasm")]
impl TableResult {
    fn failure(error: String) -> Self {
        TableResult {
            success: false,
            error: Some(error),
            table_id: None,
            data: None,
            settings: None,
            markdown: None,
        }
    }

    fn into_js(self) -> JsValue {
        serde_wasm_bindgen::to_value(&self).unwrap_or(JsValue::NULL)
    }
}

#[cfg(feature = "wasm")]
fn parse_view_mode(view_mode: &str) -> ViewMode {
    match view_mode {
        "reading" => ViewMode::Reading,
        _ => ViewMode::LivePreview,
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Markup for a brand-new empty table (fresh table and column ids)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "newTableMarkup")]
pub fn new_table_markup() -> String {
    insert_empty_table()
}

/// Upgrade a settings payload to the current schema
///
/// Returns the upgraded JSON, or the input unchanged when already current.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "migrateSettings")]
pub fn migrate_settings_wasm(settings_json: &str) -> JsValue {
    let mut settings = match Settings::from_json(settings_json) {
        Ok(s) => s,
        Err(err) => return TableResult::failure(err.to_string()).into_js(),
    };
    migrate_settings(&mut settings);
    TableResult {
        success: true,
        error: None,
        table_id: None,
        data: None,
        settings: settings.to_json().ok(),
        markdown: None,
    }
    .into_js()
}

/// Load one table from markup, reconciling against the settings payload
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "loadTable")]
pub fn load_table_wasm(
    settings_json: &str,
    markup: &str,
    source_path: &str,
    view_mode: &str,
) -> JsValue {
    let mut settings = match Settings::from_json(settings_json) {
        Ok(s) => s,
        Err(err) => return TableResult::failure(err.to_string()).into_js(),
    };

    match load_table(&mut settings, markup, source_path, parse_view_mode(view_mode)) {
        Ok(loaded) => TableResult {
            success: true,
            error: None,
            table_id: Some(loaded.table_id),
            data: Some(loaded.data),
            settings: settings.to_json().ok(),
            markdown: None,
        }
        .into_js(),
        Err(err) => TableResult::failure(err.to_string()).into_js(),
    }
}

#[cfg(feature = "wasm")]
fn edit_table_wasm(
    settings_json: &str,
    table_id: &str,
    source_path: &str,
    view_mode: &str,
    add_column: bool,
) -> JsValue {
    let mut settings = match Settings::from_json(settings_json) {
        Ok(s) => s,
        Err(err) => return TableResult::failure(err.to_string()).into_js(),
    };

    let focus = FocusedTable {
        table_id: table_id.to_string(),
        source_path: source_path.to_string(),
        view_mode: parse_view_mode(view_mode),
    };
    let result = if add_column {
        add_column_to_focused(&mut settings, Some(&focus))
    } else {
        add_row_to_focused(&mut settings, Some(&focus))
    };

    match result {
        Ok(data) => TableResult {
            success: true,
            error: None,
            table_id: Some(table_id.to_string()),
            markdown: Some(app_data_to_markdown(table_id, &data)),
            data: Some(data),
            settings: settings.to_json().ok(),
        }
        .into_js(),
        Err(err) => TableResult::failure(err.to_string()).into_js(),
    }
}

/// Add a row to a loaded table and regenerate its markup
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "addRowToTable")]
pub fn add_row_to_table(
    settings_json: &str,
    table_id: &str,
    source_path: &str,
    view_mode: &str,
) -> JsValue {
    edit_table_wasm(settings_json, table_id, source_path, view_mode, false)
}

/// Add a column to a loaded table and regenerate its markup
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "addColumnToTable")]
pub fn add_column_to_table(
    settings_json: &str,
    table_id: &str,
    source_path: &str,
    view_mode: &str,
) -> JsValue {
    edit_table_wasm(settings_json, table_id, source_path, view_mode, true)
}

/// Relocate a document's persisted entries after a rename
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "onPathRenamed")]
pub fn on_path_renamed_wasm(settings_json: &str, old_path: &str, new_path: &str) -> JsValue {
    let mut settings = match Settings::from_json(settings_json) {
        Ok(s) => s,
        Err(err) => return TableResult::failure(err.to_string()).into_js(),
    };
    settings.on_path_renamed(old_path, new_path);
    TableResult {
        success: true,
        error: None,
        table_id: None,
        data: None,
        settings: settings.to_json().ok(),
        markdown: None,
    }
    .into_js()
}
