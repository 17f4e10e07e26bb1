//! ORDER BY evaluation.

use crate::ast::{Direction, OrderBy, SortOrder};
use crate::context::Context;
use crate::diagnostic::{Diagnostic, Evaluation};
use alloc::vec::Vec;
use tabula_core::{Column, Table, Value, ORDER_COLUMN};

/// Sort executor - reorders every column of a table by one key column.
pub struct SortExecutor<'a> {
    direction: &'a Direction,
}

impl<'a> SortExecutor<'a> {
    /// Creates a new sort executor.
    pub fn new(direction: &'a Direction) -> Self {
        Self { direction }
    }

    /// Computes the row permutation for `input`.
    ///
    /// Ascending order is a stable sort of the key column under
    /// `Value::sort_cmp`. Descending order reverses that sequence. A missing key
    /// column yields the identity permutation. `source` names the table in
    /// diagnostics.
    pub fn permutation(
        &self,
        input: &Table,
        source: &str,
        ctx: &Context,
    ) -> (Vec<usize>, Option<Diagnostic>) {
        let column = self.direction.column();
        let Some(cells) = input.column(column) else {
            let diagnostic = ctx.report(Diagnostic::MissingColumn {
                table: source.into(),
                column: column.into(),
            });
            return ((0..input.nrows()).collect(), Some(diagnostic));
        };

        let mut indexed: Vec<(usize, &Value)> = cells.iter().enumerate().collect();
        indexed.sort_by(|a, b| a.1.sort_cmp(b.1));

        let mut order: Vec<usize> = indexed.into_iter().map(|(idx, _)| idx).collect();
        if self.direction.order() == SortOrder::Desc {
            order.reverse();
        }
        (order, None)
    }

    /// Executes the sort on the input table.
    pub fn execute(&self, input: Table, source: &str, ctx: &Context) -> Evaluation {
        let (order, diagnostic) = self.permutation(&input, source, ctx);
        log::trace!("sort {}: {} rows", self.direction, order.len());
        Evaluation::new(reorder_columns(input, &order)).with_optional(diagnostic)
    }
}

/// Applies `order` to every column independently.
/// Indices past the end of a shorter column read as `Null`.
fn reorder_columns(input: Table, order: &[usize]) -> Table {
    Table::from_columns(input.into_iter().map(|column| {
        let (name, values) = column.into_parts();
        let reordered = order
            .iter()
            .map(|&idx| values.get(idx).cloned().unwrap_or(Value::Null))
            .collect();
        Column::new(name, reordered)
    }))
}

impl Direction {
    /// Returns the one-column `order` table of row indices for the context's
    /// selection.
    pub fn evaluate(&self, ctx: &Context) -> Evaluation {
        ctx.get(Context::SELECTION).then(|selection| {
            let (order, diagnostic) = SortExecutor::new(self).permutation(&selection, Context::SELECTION, ctx);
            let indices = order.into_iter().map(|idx| idx as i64);
            Evaluation::new(Table::new().with_column(ORDER_COLUMN, indices))
                .with_optional(diagnostic)
        })
    }
}

impl OrderBy {
    /// Sorts `selection`, the output of the previous stage read from `source`.
    pub fn apply(&self, selection: Table, source: &str, ctx: &Context) -> Evaluation {
        SortExecutor::new(self.direction()).execute(selection, source, ctx)
    }

    /// Sorts the table registered under `Context::SELECTION`.
    pub fn evaluate(&self, ctx: &Context) -> Evaluation {
        ctx.get(Context::SELECTION)
            .then(|selection| self.apply(selection, Context::SELECTION, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::QueryConfig;
    use alloc::vec;

    fn quiet() -> Context {
        Context::with_config(QueryConfig::default().with_log_diagnostics(false))
    }

    fn mt_cars() -> Table {
        Table::new()
            .with_column("mpg", [21.0, 21.0, 22.8, 21.4, 18.7, 18.1, 14.3])
            .with_column("hp", [110, 110, 93, 110, 175, 105, 245])
            .with_column("carb", [4, 4, 1, 1, 2, 1, 4])
    }

    #[test]
    fn test_sort_executor_asc() {
        let dir = Direction::ascending("hp");
        let eval = SortExecutor::new(&dir).execute(mt_cars(), "mt_cars", &quiet());
        assert!(eval.is_clean());
        assert_eq!(
            eval.table.column("hp"),
            Some(&[93, 105, 110, 110, 110, 175, 245].map(Value::from)[..])
        );
        // Rows stay aligned across columns.
        assert_eq!(eval.table.column("carb").map(|c| c[0].clone()), Some(Value::Int64(1)));
    }

    #[test]
    fn test_sort_executor_desc_reverses_ties() {
        let table = Table::new()
            .with_column("key", [1, 2, 1])
            .with_column("id", ["a", "b", "c"]);

        let asc = Direction::ascending("key");
        let (order, _) = SortExecutor::new(&asc).permutation(&table, "t", &quiet());
        assert_eq!(order, vec![0, 2, 1]);

        let desc = Direction::descending("key");
        let (order, _) = SortExecutor::new(&desc).permutation(&table, "t", &quiet());
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_sort_strings_naturally() {
        let table = Table::new().with_column("name", ["item10", "item2", "Item1"]);
        let dir = Direction::ascending("name");
        let eval = SortExecutor::new(&dir).execute(table, "inventory", &quiet());
        assert_eq!(
            eval.table.column("name"),
            Some(&["Item1", "item2", "item10"].map(Value::from)[..])
        );
    }

    #[test]
    fn test_missing_column_keeps_identity() {
        let dir = Direction::descending("nope");
        let eval = SortExecutor::new(&dir).execute(mt_cars(), "mt_cars", &quiet());
        assert_eq!(eval.table, mt_cars());
        assert_eq!(
            eval.diagnostics,
            vec![Diagnostic::MissingColumn {
                table: "mt_cars".into(),
                column: "nope".into()
            }]
        );
    }

    #[test]
    fn test_direction_order_table() {
        let mut ctx = quiet();
        ctx.add(mt_cars(), Context::SELECTION);

        let eval = Direction::ascending("mpg").evaluate(&ctx);
        assert_eq!(
            eval.table.column(ORDER_COLUMN),
            Some(&[6, 5, 4, 0, 1, 3, 2].map(|i: i64| Value::Int64(i))[..])
        );
    }

    #[test]
    fn test_order_by_reads_selection() {
        let mut ctx = quiet();
        ctx.add(mt_cars(), Context::SELECTION);

        let eval = OrderBy::new(Direction::descending("carb")).evaluate(&ctx);
        assert!(eval.is_clean());
        assert_eq!(eval.table.nrows(), 7);
        assert_eq!(
            eval.table.column("carb"),
            Some(&[4, 4, 4, 2, 1, 1, 1].map(Value::from)[..])
        );
    }
}
