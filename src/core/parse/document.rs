//! Document-level table block scanner
//!
//! A document may hold any number of tables; each block is parsed and
//! validated on its own so one malformed table never breaks its siblings.

/// One candidate pipe-table block inside a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    /// 1-based first line of the block
    pub start_line: usize,
    /// 1-based last line of the block, inclusive
    pub end_line: usize,
    /// The block's source text
    pub source: String,
}

/// Locate every run of consecutive pipe rows in a document
pub fn find_table_blocks(document: &str) -> Vec<TableBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<(usize, Vec<&str>)> = None;

    for (idx, line) in document.lines().enumerate() {
        if line.trim_start().starts_with('|') {
            match current.as_mut() {
                Some((_, lines)) => lines.push(line),
                None => current = Some((idx + 1, vec![line])),
            }
        } else if let Some((start, lines)) = current.take() {
            blocks.push(TableBlock {
                start_line: start,
                end_line: start + lines.len() - 1,
                source: lines.join("\n"),
            });
        }
    }
    if let Some((start, lines)) = current {
        blocks.push(TableBlock {
            start_line: start,
            end_line: start + lines.len() - 1,
            source: lines.join("\n"),
        });
    }

    blocks
}

/// Replace one table block with new markup, leaving the rest of the
/// document byte-identical
pub fn replace_table_block(document: &str, block: &TableBlock, markup: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for (idx, line) in document.lines().enumerate() {
        let line_no = idx + 1;
        if line_no < block.start_line || line_no > block.end_line {
            out.push(line);
        } else if line_no == block.start_line {
            out.push(markup.trim_end());
        }
    }
    let mut result = out.join("\n");
    if document.ends_with('\n') {
        result.push('\n');
    }
    result
}
