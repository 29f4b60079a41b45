//! Feature modules
//!
//! Capabilities layered over the core pipeline:
//! - `state`: persisted path-keyed table state (the settings payload)
//! - `migrate`: versioned settings-schema upgrade
//! - `markdown`: markup emitter, round-trips with the parser
//! - `commands`: insert-table / add-row / add-column command surface

pub mod commands;
pub mod markdown;
pub mod migrate;
pub mod state;

// Re-export commonly used types
pub use commands::{add_column_to_focused, add_row_to_focused, insert_empty_table, FocusedTable};
pub use markdown::{app_data_to_markdown, create_empty_markdown_table};
pub use migrate::migrate_settings;
pub use state::{SavedTableState, Settings, ViewMode, CURRENT_FORMAT_VERSION};
