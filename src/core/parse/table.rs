//! Positional table parser

use super::token::{scan_cell, split_row, MarkerKind};
use crate::data::constants::SEPARATOR_CELL_RE;

/// The positional grid recovered from one markup table.
///
/// Ephemeral: produced fresh on every render, never persisted. `column_ids`
/// and `row_ids` keep one entry per id-row cell / body row so the validator
/// can check "exactly one id" positionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    /// First table-id marker found in the header row, if any
    pub table_id: Option<String>,
    /// Every table-id marker found in the header row
    pub table_markers: Vec<String>,
    /// Header cell text, markers stripped
    pub header_cells: Vec<String>,
    /// Column/row markers found in the header row, where none belong
    pub header_stray_markers: usize,
    /// Type-definition row cell text
    pub type_cells: Vec<String>,
    /// Column-id markers, one list per id-row cell
    pub column_ids: Vec<Vec<String>>,
    /// Row-id markers, one list per body row
    pub row_ids: Vec<Vec<String>>,
    /// Body cell text, markers stripped
    pub body_cells: Vec<Vec<String>>,
}

fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty() && cells.iter().all(|c| SEPARATOR_CELL_RE.is_match(c))
}

/// Parse markdown pipe-table source into a positional grid.
///
/// Total over arbitrary input: anything that does not look like a gridmark
/// table comes back with `table_id: None` and whatever partial grid was
/// recoverable, for the validator to reject.
pub fn parse_markdown_table(source: &str) -> ParsedTable {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match split_row(line) {
            Some(cells) => {
                if !is_separator_row(&cells) {
                    rows.push(cells);
                }
            }
            // A non-pipe line ends the table block
            None => break,
        }
    }

    let mut parsed = ParsedTable::default();
    let mut rows = rows.into_iter();

    // Header row: column names plus the table-id marker
    let Some(header) = rows.next() else {
        return parsed;
    };
    for raw in &header {
        let cell = scan_cell(raw);
        for marker in &cell.markers {
            match marker.kind {
                MarkerKind::Table => parsed.table_markers.push(marker.id.clone()),
                _ => parsed.header_stray_markers += 1,
            }
        }
        parsed.header_cells.push(cell.text);
    }
    parsed.table_id = parsed.table_markers.first().cloned();

    // Type-definition row
    let Some(type_row) = rows.next() else {
        return parsed;
    };
    parsed.type_cells = type_row.iter().map(|raw| scan_cell(raw).text).collect();

    // Column-id row
    let Some(id_row) = rows.next() else {
        return parsed;
    };
    parsed.column_ids = id_row
        .iter()
        .map(|raw| scan_cell(raw).ids_of(MarkerKind::Column))
        .collect();

    // Body rows
    for body_row in rows {
        let mut ids = Vec::new();
        let mut texts = Vec::new();
        for raw in &body_row {
            let cell = scan_cell(raw);
            ids.extend(cell.ids_of(MarkerKind::Row));
            texts.push(cell.text);
        }
        parsed.row_ids.push(ids);
        parsed.body_cells.push(texts);
    }

    parsed
}
