//! Core table modules
//!
//! This module contains the load/merge pipeline and the structural editors:
//! - `parse`: markup table parser (marker token grammar)
//! - `validate`: structural well-formedness checks
//! - `build`: canonical model builder
//! - `merge`: reconciler against persisted state
//! - `edit`: pure add-row / add-column editors

pub mod build;
pub mod edit;
pub mod merge;
pub mod model;
pub mod parse;
pub mod validate;

// Re-export main types and functions
pub use build::find_app_data;
pub use edit::{add_column, add_row};
pub use merge::update_from_saved_state;
pub use model::{AppData, Cell, Column, ColumnType, Row, SortOrder};
pub use parse::{find_table_blocks, parse_markdown_table, ParsedTable, TableBlock};
pub use validate::{validate, ValidationCheck};
