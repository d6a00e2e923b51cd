//! Minimal decoder for the comma-delimited reference table.
//!
//! The reference data is a header row plus unquoted value rows; quoting and
//! escaping are not supported.

/// Error while decoding a delimited table.
#[derive(Debug, PartialEq, Eq)]
pub enum TableError {
    MissingHeader,
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::MissingHeader => write!(f, "table has no header row"),
        }
    }
}

impl std::error::Error for TableError {}

/// In-memory decoded comma-delimited table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parses CSV text into a header row and value rows.
    ///
    /// Blank lines are skipped; fields are trimmed.
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let header_line = lines.next().ok_or(TableError::MissingHeader)?;
        let headers = split_row(header_line);
        let rows = lines.map(split_row).collect();
        Ok(Self { headers, rows })
    }

    /// Returns the position of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Returns the values of a named column in row order.
    ///
    /// Rows too short to reach the column contribute nothing.
    pub fn column(&self, name: &str) -> Option<Vec<String>> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.get(index).cloned())
                .collect(),
        )
    }

    /// Number of value rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',')
        .map(|field| field.trim().to_string())
        .collect()
}
