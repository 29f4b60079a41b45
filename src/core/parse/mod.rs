//! Markup table parser
//!
//! Converts markdown pipe-table source into a positional grid of cell
//! strings, recovering the embedded id markers through a small explicit
//! token grammar:
//!
//! ```text
//! pipe row   ->  | cell | cell | ... |
//! cell       ->  (marker | text)*
//! marker     ->  <!--gm:(tbl|col|row):ID-->
//! ```
//!
//! Reserved rows, top to bottom: header (column names, table-id marker in
//! the first cell), markdown separator, type-definition row, column-id row,
//! then body rows each carrying one row-id marker. Row and column order is
//! taken verbatim from document order, which is what lets edits made
//! directly in markup (reordering, deleting) reach the reconciler.
//!
//! The parser is total: unrecognizable input produces a `ParsedTable` with
//! `table_id: None` and empty grids, never a panic.

mod document;
mod table;
mod token;

#[cfg(test)]
mod tests;

// Re-export public API
pub use document::{find_table_blocks, replace_table_block, TableBlock};
pub use table::{parse_markdown_table, ParsedTable};
pub use token::{scan_cell, split_row, Marker, MarkerKind, ScannedCell};
