//! Reconciler
//!
//! Merges previously persisted state with a freshly parsed table for the
//! same table id. The markup is the source of truth for content, shape, and
//! order; the persisted state is the source of truth for metadata the
//! markup cannot express (sort state, widths, layout flags). Persisted
//! state augments what is on screen, never supersedes it: a row or column
//! the markup dropped is dropped here too, with no tombstoning.
//!
//! The merge is idempotent and order-preserving; both are covered by tests.

use fxhash::FxHashMap;
use tracing::debug;

use crate::core::model::{AppData, Column};
use crate::utils::error::{Error, Result};

/// Merge persisted `old` state into freshly parsed `new` data.
///
/// Every row and column of `new` survives, in `new`'s order. For column ids
/// present on both sides, the metadata fields not derivable from markup are
/// carried forward; `name` and `column_type` stay as parsed (a changed type
/// token in markup wins over the stored type). Ids only in `old` vanish.
///
/// An incomplete grid on either side is an upstream defect and fails loudly
/// instead of producing a corrupted merge.
pub fn update_from_saved_state(old: &AppData, new: &AppData) -> Result<AppData> {
    old.verify_grid()
        .map_err(|msg| Error::invariant(format!("saved state: {}", msg)))?;
    new.verify_grid()
        .map_err(|msg| Error::invariant(format!("parsed table: {}", msg)))?;

    let old_columns: FxHashMap<&str, &Column> =
        old.columns.iter().map(|c| (c.id.as_str(), c)).collect();

    let mut merged = new.clone();
    let mut carried = 0usize;
    for column in &mut merged.columns {
        if let Some(prev) = old_columns.get(column.id.as_str()) {
            column.width = prev.width;
            column.sort_order = prev.sort_order;
            column.sort_index = prev.sort_index;
            column.use_auto_width = prev.use_auto_width;
            column.should_wrap_overflow = prev.should_wrap_overflow;
            carried += 1;
        }
    }

    debug!(
        carried,
        fresh = merged.columns.len() - carried,
        dropped = old.columns.len() - carried,
        "merged saved column metadata"
    );

    Ok(merged)
}
