//! Marker grammar constants and id patterns
//!
//! Ids are round-tripped through plain text, so the marker format is
//! bit-exact: table, column, and row ids are embedded in cells as HTML
//! comments, invisible in rendered markdown.
//!
//! ```text
//! | <!--gm:tbl:9f2c11ab-->Name | Age    |
//! | ---                        | ---    |
//! | text                       | number |
//! | <!--gm:col:0ab4c9d2-->     | <!--gm:col:77ee01b3--> |
//! | <!--gm:row:41d2f0aa-->Jane | 32     |
//! ```

use lazy_static::lazy_static;
use regex::Regex;

/// Marker kind for a table id
pub const MARKER_KIND_TABLE: &str = "tbl";
/// Marker kind for a column id
pub const MARKER_KIND_COLUMN: &str = "col";
/// Marker kind for a row id
pub const MARKER_KIND_ROW: &str = "row";

lazy_static! {
    /// Scanner for id markers embedded in cell text.
    ///
    /// The id group is deliberately loose: a marker with a malformed id must
    /// still scan as a marker so the Validator can reject its id, rather
    /// than the marker silently surviving as visible cell text.
    pub static ref MARKER_RE: Regex =
        Regex::new(r"<!--gm:(tbl|col|row):([0-9A-Za-z_-]*)-->").unwrap();

    /// Expected format of a generated table id (first v4 UUID segment)
    pub static ref TABLE_ID_RE: Regex = Regex::new(r"^[0-9a-f]{8}$").unwrap();

    /// A markdown separator cell: dashes with optional alignment colons
    pub static ref SEPARATOR_CELL_RE: Regex = Regex::new(r"^:?-{3,}:?$").unwrap();
}

/// Render an id marker for embedding in a cell
pub fn marker(kind: &str, id: &str) -> String {
    format!("<!--gm:{}:{}-->", kind, id)
}

/// Column name used by `create_empty_markdown_table`
pub const NEW_COLUMN_NAME: &str = "New Column";
