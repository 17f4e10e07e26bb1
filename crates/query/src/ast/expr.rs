//! Leaf clauses: projection lists and table references.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// The projection wildcard.
pub const WILDCARD: &str = "*";

/// A list of column names, or the wildcard `*`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralGroup {
    literals: Vec<String>,
}

impl LiteralGroup {
    /// Creates a literal group from names.
    pub fn new<I, S>(literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            literals: literals.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates the `*` literal group.
    pub fn wildcard() -> Self {
        Self::new([WILDCARD])
    }

    /// Returns the names in order.
    #[inline]
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Returns true if the group contains `*`.
    pub fn is_wildcard(&self) -> bool {
        self.literals.iter().any(|l| l == WILDCARD)
    }

    /// Returns true if `name` is listed.
    pub fn contains(&self, name: &str) -> bool {
        self.literals.iter().any(|l| l == name)
    }
}

impl fmt::Display for LiteralGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literals.join(", "))
    }
}

/// `FROM <table>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct From {
    table: String,
}

impl From {
    /// Creates a table reference.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// Returns the referenced table name.
    #[inline]
    pub fn table(&self) -> &str {
        &self.table
    }
}

impl fmt::Display for From {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FROM {}", self.table)
    }
}
