//! Table types.

use serde::{Deserialize, Serialize};

/// A pipe table collected from Markdown.
///
/// Header and rows are kept exactly as parsed; column counts are not
/// validated here. Use [`Table::grid`] to get a rectangular view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header cells (first row of the rendered table)
    pub header: Vec<String>,

    /// Body rows
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given header and no rows.
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a body row.
    pub fn add_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Builder variant of [`Table::add_row`].
    pub fn with_row<S: Into<String>>(mut self, row: impl IntoIterator<Item = S>) -> Self {
        self.add_row(row);
        self
    }

    /// Number of columns, defined by the header.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// A table without header cells is not rendered.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    /// Check whether every body row has as many cells as the header.
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|r| r.len() == self.header.len())
    }

    /// Header followed by body rows, each fitted to the header width.
    ///
    /// Short rows are padded with empty cells, long rows are truncated.
    pub fn grid(&self) -> Vec<Vec<&str>> {
        let width = self.column_count();
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .map(|row| {
                (0..width)
                    .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                    .collect()
            })
            .collect()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new(["A", "B"]);
        assert!(!table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_empty_header() {
        let table = Table::new(Vec::<String>::new());
        assert!(table.is_empty());
    }

    #[test]
    fn test_grid_pads_and_truncates() {
        let table = Table::new(["Name", "Age"])
            .with_row(["Alice"])
            .with_row(["Bob", "25", "extra"]);

        assert!(!table.is_rectangular());
        assert_eq!(
            table.grid(),
            vec![
                vec!["Name", "Age"],
                vec!["Alice", ""],
                vec!["Bob", "25"],
            ]
        );
    }

    #[test]
    fn test_plain_text() {
        let table = Table::new(["A", "B"]).with_row(["1", "2"]);
        assert_eq!(table.plain_text(), "A\tB\n1\t2");
    }
}
