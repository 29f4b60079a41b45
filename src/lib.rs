//! # gridmark
//!
//! Markdown tables with a persistent structured-metadata side channel.
//!
//! A gridmark table is an ordinary pipe table that any editor can rewrite,
//! carrying invisible id markers for the table, each column, and each row.
//! Structured per-table metadata (column types, sort state, widths) lives
//! in a path-keyed settings payload and is reconciled against the markup on
//! every load: the markup governs content, shape, and order; the persisted
//! state contributes everything markup cannot express.
//!
//! ## Features
//!
//! - **Explicit marker grammar**: ids round-trip through plain text as
//!   `<!--gm:kind:id-->` comments, invisible when rendered
//! - **Safe degradation**: a table that fails validation is skipped on its
//!   own, without touching persisted state or its sibling tables
//! - **Idempotent reconciliation**: merging is order-preserving and free of
//!   drift, so external edits (reordering, deleting, retyping) are honored
//! - **Pure structural edits**: add-row / add-column produce new values and
//!   never mutate their input
//! - **WASM support**: compiles to WebAssembly for editor-plugin hosts
//!
//! ## Usage Example
//!
//! ```rust
//! use gridmark::{insert_empty_table, load_table, Settings, ViewMode};
//!
//! let mut settings = Settings::default();
//! let markup = insert_empty_table();
//!
//! let loaded = load_table(&mut settings, &markup, "notes.md", ViewMode::LivePreview).unwrap();
//! assert_eq!(loaded.data.columns.len(), 1);
//!
//! // The focus token captured at load drives structural-edit commands
//! let grown = gridmark::add_row_to_focused(&mut settings, Some(&loaded.focus)).unwrap();
//! assert_eq!(grown.rows.len(), 1);
//! ```

/// Core table modules
pub mod core;

/// Data layer - static vocabulary and grammar constants
pub mod data;

/// Feature modules - state, migration, emission, commands
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

use tracing::{debug, enabled, info, trace, Level};

// Re-export core types and functions (`crate::` keeps the module from
// colliding with the built-in `core` crate in use paths)
pub use crate::core::{
    add_column, add_row, find_app_data, find_table_blocks, parse_markdown_table,
    update_from_saved_state, AppData, Cell, Column, ColumnType, ParsedTable, Row, SortOrder,
    TableBlock, ValidationCheck,
};
pub use crate::core::validate::validate;

// Re-export feature modules
pub use features::{
    add_column_to_focused, add_row_to_focused, app_data_to_markdown, create_empty_markdown_table,
    insert_empty_table, migrate_settings, FocusedTable, SavedTableState, Settings, ViewMode,
};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{Error, Result};
pub use utils::random::{random_column_id, random_row_id, random_table_id};

/// The result of loading one table: the reconciled model plus the focus
/// token that later structural-edit commands require
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable {
    pub table_id: String,
    pub data: AppData,
    pub focus: FocusedTable,
}

/// Load one table from markup, reconciling against persisted state.
///
/// Parses and validates the markup, builds the canonical model, merges it
/// with any prior entry for the same (path, table id), persists the result
/// as the new prior state, and returns it together with a focus token.
///
/// A validation failure comes back as [`Error::Malformed`] and leaves the
/// persisted state untouched; callers skip that table and keep rendering
/// the rest of the document.
pub fn load_table(
    settings: &mut Settings,
    markup: &str,
    source_path: &str,
    view_mode: ViewMode,
) -> Result<LoadedTable> {
    let parsed = parse_markdown_table(markup);

    if let Err(check) = validate(&parsed) {
        info!(path = source_path, %check, "skipping table");
        return Err(Error::malformed(check, parsed.table_id.as_deref()));
    }
    let table_id = parsed.table_id.clone().unwrap_or_default();

    let data = find_app_data(&parsed);
    let data = match settings.load_state(source_path, &table_id) {
        Some(prior) => {
            debug!(path = source_path, %table_id, "loading from cache");
            update_from_saved_state(&prior.data, &data)?
        }
        None => {
            debug!(path = source_path, %table_id, "loading new");
            data
        }
    };

    if enabled!(Level::TRACE) {
        trace!("{}", diagnostics::app_data_ids_to_markdown(&table_id, &data));
        trace!("{}", diagnostics::app_data_types_to_markdown(&table_id, &data));
    }

    // Persisting the reconciled value here is what lets structural-edit
    // commands use the stored entry as their base
    settings.save_state(source_path, &table_id, data.clone(), view_mode, false);

    let focus = FocusedTable {
        table_id: table_id.clone(),
        source_path: source_path.to_string(),
        view_mode,
    };
    Ok(LoadedTable {
        table_id,
        data,
        focus,
    })
}

/// Load every table block in a document, one result per block.
///
/// Malformed blocks surface as errors in their slot without affecting the
/// others.
pub fn load_document(
    settings: &mut Settings,
    document: &str,
    source_path: &str,
    view_mode: ViewMode,
) -> Vec<(TableBlock, Result<LoadedTable>)> {
    find_table_blocks(document)
        .into_iter()
        .map(|block| {
            let result = load_table(settings, &block.source, source_path, view_mode);
            (block, result)
        })
        .collect()
}
