//! Canonical model builder
//!
//! Converts a validated [`ParsedTable`] into an [`AppData`]. Used on first
//! sight of a table, when no persisted state exists yet: identity comes
//! entirely from the ids the markup already carries, and no new ids are
//! assigned here.

use crate::core::model::{AppData, Cell, Column, ColumnType, Row};
use crate::core::parse::ParsedTable;
use crate::data::types::parse_type_token;

/// Build the canonical model from a validated parse.
///
/// Total over any `ParsedTable`: positions the validator vouched for are
/// read directly, and anything short is padded with defaults so the result
/// is always a complete grid (a ragged body row loads with blank cells
/// rather than corrupting the grid).
pub fn find_app_data(parsed: &ParsedTable) -> AppData {
    let mut data = AppData::default();

    for (index, name) in parsed.header_cells.iter().enumerate() {
        let id = parsed
            .column_ids
            .get(index)
            .and_then(|ids| ids.first())
            .cloned()
            .unwrap_or_default();
        let column_type = parsed
            .type_cells
            .get(index)
            .and_then(|t| parse_type_token(t))
            .unwrap_or(ColumnType::Text);
        data.columns.push(Column::new(id, name.clone(), column_type));
    }

    for (order, ids) in parsed.row_ids.iter().enumerate() {
        let row_id = ids.first().cloned().unwrap_or_default();
        for (index, column) in data.columns.iter().enumerate() {
            let content = parsed
                .body_cells
                .get(order)
                .and_then(|cells| cells.get(index))
                .cloned()
                .unwrap_or_default();
            data.cells
                .push(Cell::new(row_id.clone(), column.id.clone(), content));
        }
        data.rows.push(Row::new(row_id, order));
    }

    data
}
