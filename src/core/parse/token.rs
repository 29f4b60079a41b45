//! Marker token scanner and pipe-row splitting

use crate::data::constants::{MARKER_KIND_COLUMN, MARKER_KIND_ROW, MARKER_KIND_TABLE, MARKER_RE};

/// The role an id marker plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Table,
    Column,
    Row,
}

impl MarkerKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            t if t == MARKER_KIND_TABLE => Some(MarkerKind::Table),
            t if t == MARKER_KIND_COLUMN => Some(MarkerKind::Column),
            t if t == MARKER_KIND_ROW => Some(MarkerKind::Row),
            _ => None,
        }
    }
}

/// One id marker recovered from cell text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub id: String,
}

/// A cell split into its markers and its visible text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedCell {
    pub markers: Vec<Marker>,
    pub text: String,
}

impl ScannedCell {
    /// Ids of markers of one kind, in document order
    pub fn ids_of(&self, kind: MarkerKind) -> Vec<String> {
        self.markers
            .iter()
            .filter(|m| m.kind == kind)
            .map(|m| m.id.clone())
            .collect()
    }
}

/// Scan a raw cell, stripping markers out of the text
pub fn scan_cell(raw: &str) -> ScannedCell {
    let mut markers = Vec::new();
    for caps in MARKER_RE.captures_iter(raw) {
        if let Some(kind) = MarkerKind::from_tag(&caps[1]) {
            markers.push(Marker {
                kind,
                id: caps[2].to_string(),
            });
        }
    }
    let text = MARKER_RE.replace_all(raw, "").trim().to_string();
    ScannedCell { markers, text }
}

/// Split a pipe-table line into raw cells.
///
/// Returns `None` when the line is not a pipe row. `\|` escapes a literal
/// pipe inside cell content and is unescaped here; the emitter re-escapes.
pub fn split_row(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if !trimmed.starts_with('|') {
        return None;
    }

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = trimmed[1..].chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'|') => {
                chars.next();
                current.push('|');
            }
            '|' => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    // Text after the final pipe is a malformed trailing cell; keep it so the
    // grid width mismatch is visible to the validator
    if !current.trim().is_empty() {
        cells.push(current.trim().to_string());
    }

    Some(cells)
}
