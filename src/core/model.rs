//! Canonical table model
//!
//! `AppData` is the structured in-memory form of one table: columns, rows,
//! and a complete cell grid. It is what the persistence layer stores and
//! what the reconciler and structural editors transform. Field names
//! serialize as camelCase; the settings payload is shared with JS hosts.

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Column content type, declared in the type-definition row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Text,
    Number,
    Tag,
    Date,
    Checkbox,
}

/// Per-column sort state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    None,
    Ascending,
    Descending,
}

fn default_true() -> bool {
    true
}

/// One table column.
///
/// `id` is immutable once assigned and unique within the table. `name` and
/// `column_type` mirror the markup; the remaining fields are metadata the
/// markup cannot express and exist only in the persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub name: String,
    pub column_type: ColumnType,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub sort_index: Option<u32>,
    #[serde(default)]
    pub use_auto_width: bool,
    #[serde(default = "default_true")]
    pub should_wrap_overflow: bool,
}

impl Column {
    /// Create a column with default metadata
    pub fn new(id: impl Into<String>, name: impl Into<String>, column_type: ColumnType) -> Self {
        Column {
            id: id.into(),
            name: name.into(),
            column_type,
            width: None,
            sort_order: SortOrder::None,
            sort_index: None,
            use_auto_width: false,
            should_wrap_overflow: true,
        }
    }
}

/// One table row. `order` is a dense zero-based display rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: String,
    pub order: usize,
}

impl Row {
    pub fn new(id: impl Into<String>, order: usize) -> Self {
        Row {
            id: id.into(),
            order,
        }
    }
}

/// One cell of the grid. Content is raw markup text, pipe-unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub row_id: String,
    pub column_id: String,
    pub content: String,
}

impl Cell {
    pub fn new(
        row_id: impl Into<String>,
        column_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Cell {
            row_id: row_id.into(),
            column_id: column_id.into(),
            content: content.into(),
        }
    }
}

/// Canonical model of one table instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub cells: Vec<Cell>,
}

impl AppData {
    /// Look up a column by id
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Look up a row by id
    pub fn row(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Look up a cell by row and column id
    pub fn cell(&self, row_id: &str, column_id: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|c| c.row_id == row_id && c.column_id == column_id)
    }

    /// Check the standing grid invariant: every row x column pair has
    /// exactly one cell and every cell's ids resolve.
    ///
    /// Returns a description of the first violation found.
    pub fn verify_grid(&self) -> std::result::Result<(), String> {
        let expected = self.columns.len() * self.rows.len();
        if self.cells.len() != expected {
            return Err(format!(
                "cell count {} != {} columns x {} rows",
                self.cells.len(),
                self.columns.len(),
                self.rows.len()
            ));
        }

        let column_ids: FxHashSet<&str> = self.columns.iter().map(|c| c.id.as_str()).collect();
        let row_ids: FxHashSet<&str> = self.rows.iter().map(|r| r.id.as_str()).collect();
        if column_ids.len() != self.columns.len() {
            return Err("duplicate column id".to_string());
        }
        if row_ids.len() != self.rows.len() {
            return Err("duplicate row id".to_string());
        }

        let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
        for cell in &self.cells {
            if !row_ids.contains(cell.row_id.as_str()) {
                return Err(format!("cell references unknown row id {}", cell.row_id));
            }
            if !column_ids.contains(cell.column_id.as_str()) {
                return Err(format!(
                    "cell references unknown column id {}",
                    cell.column_id
                ));
            }
            if !seen.insert((cell.row_id.as_str(), cell.column_id.as_str())) {
                return Err(format!(
                    "duplicate cell ({}, {})",
                    cell.row_id, cell.column_id
                ));
            }
        }

        let mut orders: Vec<usize> = self.rows.iter().map(|r| r.order).collect();
        orders.sort_unstable();
        if orders.iter().enumerate().any(|(i, &o)| i != o) {
            return Err("row orders are not a dense permutation".to_string());
        }

        Ok(())
    }

    /// Convenience form of [`AppData::verify_grid`]
    pub fn is_complete_grid(&self) -> bool {
        self.verify_grid().is_ok()
    }
}
