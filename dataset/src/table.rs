//! Header-row table parsing and row→entity conversion.
//!
//! The three sources are row-oriented tables with named columns: first row
//! is the header, empty lines are skipped, cells are comma-separated with
//! double-quote quoting. Missing optional columns are tolerated and read as
//! absent.

use std::collections::HashMap;

use compliance::{AttributeValue, Field, Standard, StandardComponent};

/// Error types for table parsing.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The source had no header row
    #[error("Table has no header row")]
    MissingHeader,
}

/// One parsed data row, keyed by header column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    /// The raw cell under a column, if the column exists.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// The cell as an owned string; missing columns read as empty.
    pub fn text(&self, column: &str) -> String {
        self.get(column).unwrap_or_default().to_string()
    }

    /// The cell as an optional link; missing columns and empty cells are
    /// both absent.
    pub fn link(&self, column: &str) -> Option<String> {
        match self.get(column) {
            Some("") | None => None,
            Some(value) => Some(value.to_string()),
        }
    }

    /// Iterate over all (column, cell) pairs.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse a whole table: header row first, empty lines skipped.
///
/// Rows longer than the header have their extra cells dropped; shorter rows
/// leave the trailing columns absent.
pub fn parse_table(text: &str) -> Result<Vec<Row>, TableError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header_line = lines.next().ok_or(TableError::MissingHeader)?;
    let header = split_record(header_line);

    let mut rows = Vec::new();
    for line in lines {
        let cells = split_record(line);
        let mut row = Row::default();
        for (column, cell) in header.iter().zip(cells) {
            if !column.is_empty() {
                row.cells.insert(column.clone(), cell);
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Split one record into cells, honoring double-quote quoting.
///
/// `""` inside a quoted cell is an escaped quote.
fn split_record(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    cells.push(current);

    cells
}

/// Columns of the fields table that are not attribute values.
const FIELD_COLUMNS: [&str; 4] = ["fieldName", "module", "snapshotLink", "screenshot"];

/// Convert a fields-table row: known columns lift into struct fields, every
/// other column becomes a raw attribute value keyed by component name.
pub fn field_from_row(row: &Row) -> Field {
    let mut field = Field {
        field_name: row.text("fieldName"),
        module: row.text("module"),
        snapshot_link: row.link("snapshotLink"),
        screenshot: row.link("screenshot"),
        ..Default::default()
    };

    for (column, cell) in row.columns() {
        if FIELD_COLUMNS.contains(&column) {
            continue;
        }
        field
            .attributes
            .insert(column.to_string(), AttributeValue::Text(cell.to_string()));
    }

    field
}

/// Convert a standards-table row.
pub fn standard_from_row(row: &Row) -> Standard {
    Standard {
        standard_name: row.text("standardName"),
        standard_definition: row.text("standardDefinition"),
        wiki_link: row.link("wikiLink"),
        issue_link: row.link("jiraLink"),
    }
}

/// Convert a components-table row.
pub fn component_from_row(row: &Row) -> StandardComponent {
    StandardComponent {
        standard_component: row.text("standardComponent"),
        standard_name: row.text("standardName"),
        definition: row.text("definition"),
    }
}
