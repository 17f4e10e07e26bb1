//! ORDER BY clause and its sort direction.

use alloc::string::String;
use core::fmt;

/// Sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest key first.
    #[default]
    Asc,
    /// Largest key first.
    Desc,
}

impl SortOrder {
    /// Returns the SQL keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// `<column> ASC` or `<column> DESC`.
///
/// Descending order is the ascending row order reversed, so rows with equal
/// keys appear in reverse source order rather than source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Direction {
    column: String,
    order: SortOrder,
}

impl Direction {
    /// Creates a direction sorting by `column` in `order`.
    pub fn new(column: impl Into<String>, order: SortOrder) -> Self {
        Self {
            column: column.into(),
            order,
        }
    }

    /// `column ASC`.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self::new(column, SortOrder::Asc)
    }

    /// `column DESC`.
    pub fn descending(column: impl Into<String>) -> Self {
        Self::new(column, SortOrder::Desc)
    }

    /// Returns the name of the sort key column.
    #[inline]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the sort order.
    #[inline]
    pub fn order(&self) -> SortOrder {
        self.order
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.order.keyword())
    }
}

/// `ORDER BY <direction>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderBy {
    direction: Direction,
}

impl OrderBy {
    /// Wraps a single direction.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Returns the direction.
    #[inline]
    pub fn direction(&self) -> &Direction {
        &self.direction
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ORDER BY {}", self.direction)
    }
}
