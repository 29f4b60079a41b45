//! Type-definition row vocabulary
//!
//! The row below the header declares one short type token per column. The
//! vocabulary maps one-to-one onto [`ColumnType`]; unrecognized tokens are a
//! validation failure, never a silent default.

use phf::phf_map;

use crate::core::model::ColumnType;

/// Type token to column type mapping
pub static TYPE_TOKENS: phf::Map<&'static str, ColumnType> = phf_map! {
    "text" => ColumnType::Text,
    "number" => ColumnType::Number,
    "tag" => ColumnType::Tag,
    "date" => ColumnType::Date,
    "checkbox" => ColumnType::Checkbox,
};

/// Parse a type-row cell into a column type
pub fn parse_type_token(token: &str) -> Option<ColumnType> {
    TYPE_TOKENS.get(token.trim()).copied()
}

/// The token emitted for a column type
pub fn type_token(column_type: ColumnType) -> &'static str {
    match column_type {
        ColumnType::Text => "text",
        ColumnType::Number => "number",
        ColumnType::Tag => "tag",
        ColumnType::Date => "date",
        ColumnType::Checkbox => "checkbox",
    }
}
