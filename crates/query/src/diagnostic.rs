//! Non-fatal evaluation diagnostics.
//!
//! A lookup that misses (unknown table, unknown column) never aborts a query.
//! The evaluator substitutes a fallback and records a `Diagnostic` next to the
//! table it produced, so callers can tell advisory conditions apart from real
//! failures and opt into strict behaviour through `QueryConfig`.

use crate::context::{MissingPolicy, QueryConfig};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use tabula_core::{Error, Result, Table};

/// A recoverable condition met during evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A table name was not registered; an empty table was substituted.
    MissingTable { name: String },
    /// A WHERE or ORDER BY column was absent; an empty classifier or the
    /// identity order was substituted.
    MissingColumn { table: String, column: String },
    /// A projected column does not exist. Only reported under
    /// `ProjectionPolicy::Strict`.
    UnknownProjection { table: String, column: String },
}

impl Diagnostic {
    /// Converts the diagnostic into the matching error.
    pub fn into_error(self) -> Error {
        match self {
            Diagnostic::MissingTable { name } => Error::table_not_found(name),
            Diagnostic::MissingColumn { table, column }
            | Diagnostic::UnknownProjection { table, column } => {
                Error::column_not_found(table, column)
            }
        }
    }

    /// Returns true if this diagnostic fails a query run under `config`.
    pub fn is_fatal(&self, config: &QueryConfig) -> bool {
        match self {
            Diagnostic::UnknownProjection { .. } => true,
            Diagnostic::MissingTable { .. } | Diagnostic::MissingColumn { .. } => {
                config.on_missing == MissingPolicy::Strict
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingTable { name } => {
                write!(f, "No table named \"{}\" was found!", name)
            }
            Diagnostic::MissingColumn { column, .. } => {
                write!(f, "No column named \"{}\" was found!", column)
            }
            Diagnostic::UnknownProjection { table, column } => {
                write!(f, "Projected column \"{}\" does not exist in \"{}\"", column, table)
            }
        }
    }
}

/// The outcome of evaluating a clause: always a table, plus any diagnostics.
#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct Evaluation {
    pub table: Table,
    pub diagnostics: Vec<Diagnostic>,
}

impl Evaluation {
    /// Creates a clean evaluation.
    pub fn new(table: Table) -> Self {
        Self {
            table,
            diagnostics: Vec::new(),
        }
    }

    /// Attaches a diagnostic.
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    /// Attaches an optional diagnostic.
    pub fn with_optional(mut self, diagnostic: Option<Diagnostic>) -> Self {
        self.diagnostics.extend(diagnostic);
        self
    }

    /// Replaces the table with the result of the next stage, keeping the
    /// diagnostics of both stages in order.
    pub fn then<F>(self, stage: F) -> Self
    where
        F: FnOnce(Table) -> Evaluation,
    {
        let mut diagnostics = self.diagnostics;
        let next = stage(self.table);
        diagnostics.extend(next.diagnostics);
        Self {
            table: next.table,
            diagnostics,
        }
    }

    /// Appends the diagnostics of `other`, keeping this evaluation's table.
    pub fn merge(&mut self, other: Evaluation) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Returns true if no diagnostics were recorded.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Discards diagnostics and returns the table.
    pub fn into_table(self) -> Table {
        self.table
    }

    /// Returns the table, or the first diagnostic that `config` treats as fatal.
    pub fn into_result(self, config: &QueryConfig) -> Result<Table> {
        match self.diagnostics.into_iter().find(|d| d.is_fatal(config)) {
            Some(diagnostic) => Err(diagnostic.into_error()),
            None => Ok(self.table),
        }
    }
}
