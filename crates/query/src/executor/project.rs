//! Projection.

use crate::ast::LiteralGroup;
use crate::context::{Context, ProjectionPolicy};
use crate::diagnostic::{Diagnostic, Evaluation};
use alloc::vec::Vec;
use tabula_core::Table;

/// Project executor - keeps the listed columns of a table.
///
/// Kept columns stay in the table's own order, not the order of the list.
pub struct ProjectExecutor<'a> {
    columns: &'a LiteralGroup,
}

impl<'a> ProjectExecutor<'a> {
    /// Creates a new project executor.
    pub fn new(columns: &'a LiteralGroup) -> Self {
        Self { columns }
    }

    /// Executes the projection on the input table.
    ///
    /// `source` names the table in diagnostics.
    pub fn execute(&self, mut input: Table, source: &str, ctx: &Context) -> Evaluation {
        if self.columns.is_wildcard() {
            return Evaluation::new(input);
        }

        let mut diagnostics = Vec::new();
        if ctx.config().projection == ProjectionPolicy::Strict {
            for name in self.columns.literals() {
                if !input.contains_column(name) {
                    diagnostics.push(ctx.report(Diagnostic::UnknownProjection {
                        table: source.into(),
                        column: name.clone(),
                    }));
                }
            }
        }

        input.retain_columns(|name| self.columns.contains(name));
        Evaluation {
            table: input,
            diagnostics,
        }
    }
}
