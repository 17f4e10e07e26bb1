//! Columnar table for Tabula.
//!
//! A `Table` is an ordered mapping from column name to a sequence of cell
//! values. Column order is insertion order and is preserved when a column is
//! overwritten.

use crate::error::{Error, Result};
use crate::value::Value;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;

/// Name of the boolean column produced by a WHERE condition.
pub const CLASSIFIER_COLUMN: &str = "classifier";
/// Name of the row-index column produced by an ORDER BY direction.
pub const ORDER_COLUMN: &str = "order";
/// Name of the column produced by a literal group.
pub const LITERALS_COLUMN: &str = "literals";

/// A named column of cell values.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    /// Creates a new column.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns the column name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column values.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the column, returning its name and values.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.name, self.values)
    }
}

/// An ordered, columnar table.
#[derive(Clone, Debug, Default)]
pub struct Table {
    columns: Vec<Column>,
    /// Column name -> position in `columns`.
    index: HashMap<String, usize>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from columns in order.
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Self {
        let mut table = Self::new();
        for column in columns {
            let (name, values) = column.into_parts();
            table.add_column(name, values);
        }
        table
    }

    /// Builder form of `add_column`.
    pub fn with_column<V: Into<Value>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.add_column(name, values.into_iter().map(Into::into).collect());
        self
    }

    /// Inserts a column, or overwrites the values of an existing column in place.
    pub fn add_column(&mut self, name: impl Into<String>, values: Vec<Value>) -> &mut Self {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => self.columns[pos].values = values,
            None => {
                self.index.insert(name.clone(), self.columns.len());
                self.columns.push(Column::new(name, values));
            }
        }
        self
    }

    /// Removes a column if present.
    pub fn remove_column(&mut self, name: &str) -> &mut Self {
        if let Some(pos) = self.index.remove(name) {
            self.columns.remove(pos);
            for slot in self.index.values_mut() {
                if *slot > pos {
                    *slot -= 1;
                }
            }
        }
        self
    }

    /// Keeps only the columns for which `keep` returns true.
    pub fn retain_columns<F>(&mut self, mut keep: F) -> &mut Self
    where
        F: FnMut(&str) -> bool,
    {
        self.columns.retain(|c| keep(c.name()));
        self.reindex();
        self
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, column) in self.columns.iter().enumerate() {
            self.index.insert(column.name.clone(), pos);
        }
    }

    /// Returns the values of a column.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.index
            .get(name)
            .map(|&pos| self.columns[pos].values.as_slice())
    }

    /// Returns true if the table has a column with this name.
    #[inline]
    pub fn contains_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the column names in order.
    pub fn colnames(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Returns the columns in order.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the row count, taken from the first column.
    pub fn nrows(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    /// Returns the number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns one row as a tuple of cells in column order.
    ///
    /// Cells missing from a shorter column read as `Null`.
    pub fn row(&self, index: usize) -> Option<Vec<Value>> {
        if index >= self.nrows() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.values.get(index).cloned().unwrap_or(Value::Null))
                .collect(),
        )
    }

    /// Returns all rows in order.
    pub fn rows(&self) -> Vec<Vec<Value>> {
        (0..self.nrows()).filter_map(|i| self.row(i)).collect()
    }

    /// Checks that every column has the same length.
    pub fn validate(&self) -> Result<()> {
        let expected = self.nrows();
        match self.columns.iter().find(|c| c.len() != expected) {
            Some(column) => Err(Error::invalid_operation(alloc::format!(
                "column {} has {} rows, expected {}",
                column.name,
                column.len(),
                expected
            ))),
            None => Ok(()),
        }
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl IntoIterator for Table {
    type Item = Column;
    type IntoIter = alloc::vec::IntoIter<Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

/// Renders the table as an aligned text grid.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| c.values.iter().map(|v| v.to_string()).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(cells.iter())
            .map(|(c, col)| {
                col.iter()
                    .map(|s| s.chars().count())
                    .chain(core::iter::once(c.name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(widths.iter())
            .map(|(c, &w)| alloc::format!("{:<w$}", c.name, w = w))
            .collect();
        writeln!(f, "{}", header.join(" | ").trim_end())?;

        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;

        let nrows = cells.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..nrows {
            let line: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(col, &w)| {
                    let cell = col.get(row).map(String::as_str).unwrap_or("");
                    alloc::format!("{:<w$}", cell, w = w)
                })
                .collect();
            writeln!(f, "{}", line.join(" | ").trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> Table {
        Table::new()
            .with_column("day", [1, 2, 3])
            .with_column("revenue", [770, 450, 1030])
    }

    #[test]
    fn test_add_and_colnames() {
        let table = sample();
        assert_eq!(table.colnames(), vec!["day", "revenue"]);
        assert_eq!(table.nrows(), 3);
        assert_eq!(table.ncols(), 2);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut table = sample();
        table.add_column("day", vec![Value::Int64(9)]);
        assert_eq!(table.colnames(), vec!["day", "revenue"]);
        assert_eq!(table.column("day"), Some(&[Value::Int64(9)][..]));
    }

    #[test]
    fn test_remove_column() {
        let mut table = sample().with_column("customers", [75, 40, 84]);
        table.remove_column("revenue").remove_column("missing");
        assert_eq!(table.colnames(), vec!["day", "customers"]);
        assert!(table.column("revenue").is_none());
        assert_eq!(table.column("customers").map(|c| c.len()), Some(3));
    }

    #[test]
    fn test_retain_columns() {
        let mut table = sample().with_column("customers", [75, 40, 84]);
        table.retain_columns(|name| name != "day");
        assert_eq!(table.colnames(), vec!["revenue", "customers"]);
        assert!(table.contains_column("customers"));
        assert!(!table.contains_column("day"));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new();
        assert_eq!(table.nrows(), 0);
        assert!(table.is_empty());
        assert!(table.row(0).is_none());
    }

    #[test]
    fn test_rows() {
        let table = sample();
        assert_eq!(
            table.row(1),
            Some(vec![Value::Int64(2), Value::Int64(450)])
        );
        assert_eq!(table.rows().len(), 3);
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let ragged = sample().with_column("short", [1]);
        assert!(matches!(
            ragged.validate(),
            Err(Error::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_equality_respects_order() {
        let a = sample();
        let b = Table::new()
            .with_column("revenue", [770, 450, 1030])
            .with_column("day", [1, 2, 3]);
        assert_ne!(a, b);
        assert_eq!(a, sample());
    }

    #[test]
    fn test_display_grid() {
        let table = Table::new()
            .with_column("day", [3, 10])
            .with_column("name", ["a", "long"]);
        let rendered = alloc::format!("{}", table);
        let expected = "day | name\n----+-----\n3   | a\n10  | long\n";
        assert_eq!(rendered, expected);
    }
}
