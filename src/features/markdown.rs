//! Markdown emitter
//!
//! Serializes an [`AppData`] back into the marker-bearing pipe-table format
//! the parser consumes. The format is bit-exact with the parser's grammar:
//! emitted markup reparses and validates to an equal model. Hosts call this
//! to rewrite a document after a structural edit; `insert table` commands
//! use [`create_empty_markdown_table`].

use crate::core::model::AppData;
use crate::data::constants::{
    marker, MARKER_KIND_COLUMN, MARKER_KIND_ROW, MARKER_KIND_TABLE, NEW_COLUMN_NAME,
};
use crate::data::types::type_token;

/// Escape literal pipes so cell content survives the row grammar
fn escape_cell(content: &str) -> String {
    content.replace('|', "\\|")
}

/// Render logical rows as a column-aligned pipe table
fn render_rows(rows: &[Vec<String>]) -> String {
    let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; column_count];
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let mut output = String::new();
    for row in rows {
        output.push('|');
        for (index, width) in widths.iter().enumerate() {
            let cell = row.get(index).map(String::as_str).unwrap_or("");
            let pad = width - cell.chars().count();
            output.push(' ');
            output.push_str(cell);
            for _ in 0..pad {
                output.push(' ');
            }
            output.push_str(" |");
        }
        output.push('\n');
    }
    output
}

/// Serialize a table to markup, ids included
pub fn app_data_to_markdown(table_id: &str, data: &AppData) -> String {
    let mut logical: Vec<Vec<String>> = Vec::new();

    let header: Vec<String> = data
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let name = escape_cell(&column.name);
            if index == 0 {
                format!("{}{}", marker(MARKER_KIND_TABLE, table_id), name)
            } else {
                name
            }
        })
        .collect();
    logical.push(header);

    logical.push(vec!["---".to_string(); data.columns.len()]);

    logical.push(
        data.columns
            .iter()
            .map(|c| type_token(c.column_type).to_string())
            .collect(),
    );

    logical.push(
        data.columns
            .iter()
            .map(|c| marker(MARKER_KIND_COLUMN, &c.id))
            .collect(),
    );

    let mut rows: Vec<_> = data.rows.iter().collect();
    rows.sort_by_key(|r| r.order);
    for row in rows {
        let cells: Vec<String> = data
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let content = data
                    .cell(&row.id, &column.id)
                    .map(|c| escape_cell(&c.content))
                    .unwrap_or_default();
                if index == 0 {
                    format!("{}{}", marker(MARKER_KIND_ROW, &row.id), content)
                } else {
                    content
                }
            })
            .collect();
        logical.push(cells);
    }

    render_rows(&logical)
}

/// Markup for a brand-new one-column table
pub fn create_empty_markdown_table(table_id: &str, column_id: &str) -> String {
    let logical = vec![
        vec![format!(
            "{}{}",
            marker(MARKER_KIND_TABLE, table_id),
            NEW_COLUMN_NAME
        )],
        vec!["---".to_string()],
        vec!["text".to_string()],
        vec![marker(MARKER_KIND_COLUMN, column_id)],
    ];
    render_rows(&logical)
}
