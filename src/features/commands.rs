//! Structural-edit command surface
//!
//! Hosts expose three commands: insert a brand-new empty table, add a row
//! to the focused table, add a column to the focused table. Focus is not
//! ambient state: the [`FocusedTable`] token is captured by the caller at
//! the most recent successful load and passed into the command explicitly.
//! A command without a token aborts with a user-reportable error and
//! mutates nothing.

use tracing::debug;

use crate::core::edit::{add_column, add_row};
use crate::core::model::AppData;
use crate::features::markdown::create_empty_markdown_table;
use crate::features::state::{Settings, ViewMode};
use crate::utils::error::{Error, Result};
use crate::utils::random::{random_column_id, random_table_id};

/// The table a structural-edit command operates on, captured at the most
/// recent successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusedTable {
    pub table_id: String,
    pub source_path: String,
    pub view_mode: ViewMode,
}

/// Markup for the "insert empty table" command: fresh table id, one fresh
/// column id
pub fn insert_empty_table() -> String {
    create_empty_markdown_table(&random_table_id(), &random_column_id())
}

fn edit_focused(
    settings: &mut Settings,
    focus: Option<&FocusedTable>,
    edit: fn(&AppData) -> Result<AppData>,
) -> Result<AppData> {
    let focus = focus.ok_or(Error::MissingFocus)?;

    // A focus token only exists after a successful load, which persisted
    // the reconciled state; a missing entry means the caller broke that
    // ordering contract
    let entry = settings
        .load_state(&focus.source_path, &focus.table_id)
        .ok_or_else(|| {
            Error::invariant(format!(
                "focused table {} in {} has no persisted state",
                focus.table_id, focus.source_path
            ))
        })?;

    let new_data = edit(&entry.data)?;
    settings.save_state(
        &focus.source_path,
        &focus.table_id,
        new_data.clone(),
        focus.view_mode,
        true,
    );
    debug!(table_id = %focus.table_id, path = %focus.source_path, "applied structural edit");
    Ok(new_data)
}

/// Add a row to the focused table and persist the result with the dirty
/// flag raised
pub fn add_row_to_focused(
    settings: &mut Settings,
    focus: Option<&FocusedTable>,
) -> Result<AppData> {
    edit_focused(settings, focus, add_row)
}

/// Add a column to the focused table and persist the result with the dirty
/// flag raised
pub fn add_column_to_focused(
    settings: &mut Settings,
    focus: Option<&FocusedTable>,
) -> Result<AppData> {
    edit_focused(settings, focus, add_column)
}
