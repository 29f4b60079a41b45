//! Error handling for gridmark
//!
//! This module provides a unified error type and result type for all
//! table loading and editing operations.

use std::fmt;

use crate::core::validate::ValidationCheck;

/// Table operation error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A table failed structural validation and must be skipped
    Malformed {
        check: ValidationCheck,
        table_id: Option<String>,
    },
    /// A structural-edit command was issued with no focused table
    MissingFocus,
    /// The grid-completeness invariant was violated (should be unreachable)
    Invariant { message: String },
    /// IO error (for file operations)
    Io { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Malformed { check, table_id } => {
                if let Some(id) = table_id {
                    write!(f, "Malformed table {}: {}", id, check)
                } else {
                    write!(f, "Malformed table: {}", check)
                }
            }
            Error::MissingFocus => {
                write!(
                    f,
                    "No table focused. Click a table to perform this operation."
                )
            }
            Error::Invariant { message } => {
                write!(f, "Invariant violation: {}", message)
            }
            Error::Io { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, Error>;

// Convenience constructors
impl Error {
    pub fn malformed(check: ValidationCheck, table_id: Option<&str>) -> Self {
        Error::Malformed {
            check,
            table_id: table_id.map(str::to_string),
        }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Error::Invariant {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Error::Io {
            message: message.into(),
        }
    }

    /// True when the error is a per-table validation failure, which callers
    /// handle by skipping just that table
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Malformed { .. })
    }
}
