//! Structural editors
//!
//! Pure functions that take an [`AppData`] and produce a new value with one
//! row or one column appended. The input is never mutated; callers rely on
//! referential independence for change detection, and persistence is the
//! caller's responsibility.

use tracing::warn;

use crate::core::model::{AppData, Cell, Column, ColumnType, Row};
use crate::utils::error::{Error, Result};
use crate::utils::random::{random_column_id, random_row_id};

fn checked_input(data: &AppData, operation: &str) -> Result<AppData> {
    if let Err(msg) = data.verify_grid() {
        warn!(operation, %msg, "refusing structural edit on a corrupt grid");
        return Err(Error::invariant(format!("{}: {}", operation, msg)));
    }
    Ok(data.clone())
}

/// Append one empty row.
///
/// The new row gets a fresh id, `order` equal to the current row count, and
/// one empty cell per existing column.
pub fn add_row(data: &AppData) -> Result<AppData> {
    let mut next = checked_input(data, "add row")?;

    let row_id = random_row_id();
    for column in &next.columns {
        next.cells.push(Cell::new(row_id.as_str(), column.id.as_str(), ""));
    }
    let order = next.rows.len();
    next.rows.push(Row::new(row_id, order));

    Ok(next)
}

/// Append one empty column.
///
/// The new column gets a fresh id, a positional default name, type `text`,
/// default metadata, and one empty cell per existing row.
pub fn add_column(data: &AppData) -> Result<AppData> {
    let mut next = checked_input(data, "add column")?;

    let column_id = random_column_id();
    let name = format!("Column {}", next.columns.len() + 1);
    for row in &next.rows {
        next.cells.push(Cell::new(row.id.as_str(), column_id.as_str(), ""));
    }
    next.columns
        .push(Column::new(column_id, name, ColumnType::Text));

    Ok(next)
}
