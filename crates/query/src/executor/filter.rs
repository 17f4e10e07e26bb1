//! WHERE evaluation.

use crate::ast::{Condition, Where};
use crate::context::Context;
use crate::diagnostic::{Diagnostic, Evaluation};
use alloc::vec::Vec;
use tabula_core::{Column, Table, CLASSIFIER_COLUMN};

/// Filter executor - keeps the rows of a table that satisfy a condition.
pub struct FilterExecutor<'a> {
    condition: &'a Condition,
}

impl<'a> FilterExecutor<'a> {
    /// Creates a new filter executor.
    pub fn new(condition: &'a Condition) -> Self {
        Self { condition }
    }

    /// Computes one flag per row of `input`.
    ///
    /// If the condition column is absent the flags are empty, which filters
    /// out every row. `source` names the table in diagnostics.
    pub fn classify(
        &self,
        input: &Table,
        source: &str,
        ctx: &Context,
    ) -> (Vec<bool>, Option<Diagnostic>) {
        let column = self.condition.column();
        match input.column(column) {
            Some(cells) => {
                let comparison = self.condition.comparison();
                let threshold = self.condition.threshold();
                let flags = cells.iter().map(|c| comparison.test(c, threshold)).collect();
                (flags, None)
            }
            None => {
                let diagnostic = ctx.report(Diagnostic::MissingColumn {
                    table: source.into(),
                    column: column.into(),
                });
                (Vec::new(), Some(diagnostic))
            }
        }
    }

    /// Executes the filter on the input table.
    pub fn execute(&self, input: Table, source: &str, ctx: &Context) -> Evaluation {
        let (keep, diagnostic) = self.classify(&input, source, ctx);
        let before = input.nrows();
        let table = filter_columns(input, &keep);
        log::trace!(
            "filter {}: {} of {} rows kept",
            self.condition,
            table.nrows(),
            before
        );
        Evaluation::new(table).with_optional(diagnostic)
    }
}

/// Keeps, in every column independently, the cells whose flag is true.
/// Cells past the end of `keep` are dropped.
fn filter_columns(input: Table, keep: &[bool]) -> Table {
    Table::from_columns(input.into_iter().map(|column| {
        let (name, values) = column.into_parts();
        let kept = values
            .into_iter()
            .zip(keep.iter())
            .filter(|&(_, &k)| k)
            .map(|(v, _)| v)
            .collect();
        Column::new(name, kept)
    }))
}

impl Condition {
    /// Returns the one-column `classifier` table for the context's selection.
    pub fn evaluate(&self, ctx: &Context) -> Evaluation {
        ctx.get(Context::SELECTION).then(|selection| {
            let (flags, diagnostic) = FilterExecutor::new(self).classify(&selection, Context::SELECTION, ctx);
            Evaluation::new(Table::new().with_column(CLASSIFIER_COLUMN, flags))
                .with_optional(diagnostic)
        })
    }
}

impl Where {
    /// Filters `selection`, the output of the previous stage read from `source`.
    pub fn apply(&self, selection: Table, source: &str, ctx: &Context) -> Evaluation {
        FilterExecutor::new(self.condition()).execute(selection, source, ctx)
    }

    /// Filters the table registered under `Context::SELECTION`.
    pub fn evaluate(&self, ctx: &Context) -> Evaluation {
        ctx.get(Context::SELECTION)
            .then(|selection| self.apply(selection, Context::SELECTION, ctx))
    }
}
