//! Identifier generation
//!
//! Every table, column, and row carries a short stable id that survives in
//! the markup as a marker. Ids are the first segment of a v4 UUID: short
//! enough to live in markup comments, random enough that collisions within
//! one table are not a practical concern.

use uuid::Uuid;

/// Length of a generated id (first UUID segment)
pub const ID_LEN: usize = 8;

fn random_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..ID_LEN].to_string()
}

/// Generate a fresh table id
pub fn random_table_id() -> String {
    random_id()
}

/// Generate a fresh column id
pub fn random_column_id() -> String {
    random_id()
}

/// Generate a fresh row id
pub fn random_row_id() -> String {
    random_id()
}
