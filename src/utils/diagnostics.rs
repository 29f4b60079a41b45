//! Debug renderings of table state
//!
//! Small helpers that render an [`AppData`]'s identity and type assignments
//! as markdown, for `tracing` debug output when chasing reconciliation
//! problems. Purely informational; nothing parses these back.

use crate::core::model::AppData;

fn join_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Render the id assignments of a table as markdown
pub fn app_data_ids_to_markdown(table_id: &str, data: &AppData) -> String {
    let mut lines = vec![format!("table: {}", table_id)];
    lines.push(join_row(
        &data.columns.iter().map(|c| c.id.clone()).collect::<Vec<_>>(),
    ));
    for row in &data.rows {
        let cells: Vec<String> = data
            .columns
            .iter()
            .map(|c| format!("{}:{}", row.id, c.id))
            .collect();
        lines.push(join_row(&cells));
    }
    lines.join("\n")
}

/// Render the column type assignments of a table as markdown
pub fn app_data_types_to_markdown(table_id: &str, data: &AppData) -> String {
    let mut lines = vec![format!("table: {}", table_id)];
    lines.push(join_row(
        &data
            .columns
            .iter()
            .map(|c| c.name.clone())
            .collect::<Vec<_>>(),
    ));
    lines.push(join_row(
        &data
            .columns
            .iter()
            .map(|c| format!("{:?}", c.column_type).to_lowercase())
            .collect::<Vec<_>>(),
    ));
    lines.join("\n")
}
