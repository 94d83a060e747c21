//! In-memory tabular data.
//!
//! Every cell is kept as the string captured from the source file; no type
//! inference takes place, so `"05"` and `"5"` stay distinct values.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ReconcileError, Result};
use crate::roles::InputRole;

/// Value at `column` of a raw row, empty when the row is too short.
pub fn field(row: &[String], column: usize) -> &str {
    row.get(column).map_or("", String::as_str)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append rows, builder style.
    #[must_use]
    pub fn with_rows<R, S>(mut self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self.push_row(row.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Append a row, padding short rows with empty cells.
    ///
    /// Cells beyond the header width are dropped; callers reading external
    /// data reject such rows before they get here.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Position of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Like [`Table::column_index`], but a missing column is a schema error.
    pub fn require_column(&self, role: InputRole, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ReconcileError::MissingColumn {
                role,
                column: name.to_string(),
            })
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Iterate over one column, top to bottom.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |row| field(row, column))
    }

    /// Distinct values of one column.
    pub fn value_set(&self, column: usize) -> HashSet<&str> {
        self.column_values(column).collect()
    }

    /// Keep the rows for which `keep` returns true, in their original order.
    pub fn filter_rows<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&[String]) -> bool,
    {
        let mut filtered = Table::new(self.headers.clone());
        for row in &self.rows {
            if keep(row.as_slice()) {
                filtered.rows.push(row.clone());
            }
        }
        filtered
    }

    /// Project onto the given column positions, in the given order.
    pub fn select(&self, columns: &[usize]) -> Table {
        let headers = columns
            .iter()
            .map(|&idx| self.headers.get(idx).cloned().unwrap_or_default());
        let mut projected = Table::new(headers);
        for row in &self.rows {
            projected.rows.push(
                columns
                    .iter()
                    .map(|&idx| row.get(idx).cloned().unwrap_or_default())
                    .collect(),
            );
        }
        projected
    }

    /// Drop repeated rows (all cells equal), keeping the first occurrence.
    pub fn dedup_rows(&self) -> Table {
        let mut seen: HashSet<&Vec<String>> = HashSet::with_capacity(self.rows.len());
        let mut unique = Table::new(self.headers.clone());
        for row in &self.rows {
            if seen.insert(row) {
                unique.rows.push(row.clone());
            }
        }
        unique
    }

    /// Stack `other` below `self`, aligning columns by name.
    ///
    /// The result has `self`'s columns followed by any columns only `other`
    /// carries; cells a side does not have are left empty.
    pub fn concat_union(&self, other: &Table) -> Table {
        let mut headers = self.headers.clone();
        for header in &other.headers {
            if !headers.contains(header) {
                headers.push(header.clone());
            }
        }
        let mut combined = Table::new(headers);
        for row in &self.rows {
            combined.push_row(row.clone());
        }
        let positions: Vec<(usize, usize)> = other
            .headers
            .iter()
            .enumerate()
            .filter_map(|(source, header)| {
                combined.column_index(header).map(|target| (source, target))
            })
            .collect();
        let width = combined.width();
        for row in &other.rows {
            let mut aligned = vec![String::new(); width];
            for &(source, target) in &positions {
                if let Some(value) = row.get(source) {
                    aligned[target].clone_from(value);
                }
            }
            combined.rows.push(aligned);
        }
        combined
    }
}
