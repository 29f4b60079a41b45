//! Table validator
//!
//! Five independent structural checks over a [`ParsedTable`], run in a fixed
//! order with short-circuiting. Each failure is reported distinctly so a
//! caller can tell the user exactly what is wrong with a table. A failing
//! table is not parseable: the caller must skip it without reconciling or
//! persisting anything, and without failing the enclosing document.

use std::fmt;

use fxhash::FxHashSet;

use crate::core::parse::ParsedTable;
use crate::data::constants::TABLE_ID_RE;
use crate::data::types::parse_type_token;

/// Which structural check a table failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCheck {
    TableId,
    HeaderRow,
    TypeDefinitionRow,
    ColumnIds,
    RowIds,
}

impl fmt::Display for ValidationCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationCheck::TableId => write!(f, "invalid table id"),
            ValidationCheck::HeaderRow => write!(f, "invalid header row"),
            ValidationCheck::TypeDefinitionRow => write!(f, "invalid type definition row"),
            ValidationCheck::ColumnIds => write!(f, "invalid column ids"),
            ValidationCheck::RowIds => write!(f, "invalid row ids"),
        }
    }
}

/// A table id was found and matches the generated-id format
pub fn has_valid_table_id(parsed: &ParsedTable) -> bool {
    matches!(&parsed.table_id, Some(id) if TABLE_ID_RE.is_match(id))
}

/// Header length equals the declared column count, with exactly one table
/// marker and no stray column/row markers hiding in the header
pub fn has_valid_header_row(parsed: &ParsedTable) -> bool {
    !parsed.header_cells.is_empty()
        && parsed.header_cells.len() == parsed.type_cells.len()
        && parsed.table_markers.len() <= 1
        && parsed.header_stray_markers == 0
}

/// Every type-row cell parses to a recognized type token
pub fn has_valid_type_definition_row(parsed: &ParsedTable) -> bool {
    !parsed.type_cells.is_empty()
        && parsed
            .type_cells
            .iter()
            .all(|t| parse_type_token(t).is_some())
}

/// The column-id row has exactly one id per column, all non-empty and unique
pub fn has_valid_column_ids(parsed: &ParsedTable) -> bool {
    if parsed.column_ids.len() != parsed.header_cells.len() || parsed.column_ids.is_empty() {
        return false;
    }
    let mut seen = FxHashSet::default();
    for ids in &parsed.column_ids {
        let [id] = ids.as_slice() else {
            return false;
        };
        if id.is_empty() || !seen.insert(id.as_str()) {
            return false;
        }
    }
    true
}

/// Every body row carries exactly one row id, all non-empty and unique
pub fn has_valid_row_ids(parsed: &ParsedTable) -> bool {
    let mut seen = FxHashSet::default();
    for ids in &parsed.row_ids {
        let [id] = ids.as_slice() else {
            return false;
        };
        if id.is_empty() || !seen.insert(id.as_str()) {
            return false;
        }
    }
    true
}

/// Run all checks in order, reporting the first failure
pub fn validate(parsed: &ParsedTable) -> Result<(), ValidationCheck> {
    if !has_valid_table_id(parsed) {
        return Err(ValidationCheck::TableId);
    }
    if !has_valid_header_row(parsed) {
        return Err(ValidationCheck::HeaderRow);
    }
    if !has_valid_type_definition_row(parsed) {
        return Err(ValidationCheck::TypeDefinitionRow);
    }
    if !has_valid_column_ids(parsed) {
        return Err(ValidationCheck::ColumnIds);
    }
    if !has_valid_row_ids(parsed) {
        return Err(ValidationCheck::RowIds);
    }
    Ok(())
}
