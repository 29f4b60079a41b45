//! Settings schema migration
//!
//! Version 1 persisted a flat path -> table id -> AppData map with no view
//! mode or dirty flag. Version 2 wraps each entry in [`SavedTableState`].
//! The upgrade runs once when the caller loads its settings payload, never
//! inside the per-table load path, and is idempotent.

use tracing::info;

use crate::features::state::{SavedTableState, Settings, ViewMode, CURRENT_FORMAT_VERSION};

/// Upgrade a settings value to the current schema in place.
///
/// Returns whether anything changed, so the caller knows to rewrite its
/// settings file. Already-current settings are untouched.
pub fn migrate_settings(settings: &mut Settings) -> bool {
    if settings.format_version >= CURRENT_FORMAT_VERSION {
        return false;
    }

    let legacy = std::mem::take(&mut settings.app_data);
    let mut moved = 0usize;
    for (path, tables) in legacy {
        let bucket = settings.state.entry(path).or_default();
        for (table_id, data) in tables {
            // A v2 entry that already exists wins over its legacy shadow
            bucket.entry(table_id).or_insert_with(|| SavedTableState {
                data,
                view_mode: ViewMode::LivePreview,
                should_update: false,
            });
            moved += 1;
        }
    }

    settings.format_version = CURRENT_FORMAT_VERSION;
    info!(moved, "migrated legacy table state to the path-keyed schema");
    true
}
