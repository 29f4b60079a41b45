//! Data layer - static vocabulary and grammar constants
//!
//! This module contains all static data for the markup format:
//! - Marker grammar constants and id patterns
//! - The type-definition row token vocabulary

pub mod constants;
pub mod types;

// Re-export commonly used items
pub use constants::{marker, MARKER_RE, NEW_COLUMN_NAME, TABLE_ID_RE};
pub use types::{parse_type_token, type_token, TYPE_TOKENS};
