//! SELECT pipeline and clause dispatch.

use crate::ast::{Clause, Select};
use crate::context::Context;
use crate::diagnostic::Evaluation;
use crate::executor::ProjectExecutor;
use tabula_core::{Result, Table};

impl Select {
    /// Evaluates the query: FROM, then WHERE, then ORDER BY, then projection.
    ///
    /// Each stage takes the previous stage's table by value. The context is
    /// never written, so no `selection` entry exists before, during or after
    /// evaluation.
    pub fn evaluate(&self, ctx: &Context) -> Evaluation {
        let source = self.from().table();
        let mut eval = self.from().evaluate(ctx);
        log::debug!("{}: {} rows", self.from(), eval.table.nrows());

        if let Some(where_clause) = self.where_clause() {
            eval = eval.then(|table| where_clause.apply(table, source, ctx));
            log::debug!("{}: {} rows", where_clause, eval.table.nrows());
        }

        if let Some(order_by) = self.order_by() {
            eval = eval.then(|table| order_by.apply(table, source, ctx));
            log::debug!("{}: {} rows", order_by, eval.table.nrows());
        }

        eval.then(|table| ProjectExecutor::new(self.columns()).execute(table, source, ctx))
    }

    /// Evaluates the query under the context's `QueryConfig`.
    ///
    /// With the default lenient configuration this never fails.
    pub fn run(&self, ctx: &Context) -> Result<Table> {
        self.evaluate(ctx).into_result(ctx.config())
    }
}

impl Clause {
    /// Evaluates any clause against the context.
    ///
    /// WHERE, ORDER BY, condition and direction clauses read their input from
    /// the table registered under `Context::SELECTION`.
    pub fn evaluate(&self, ctx: &Context) -> Evaluation {
        match self {
            Clause::Select(c) => c.evaluate(ctx),
            Clause::From(c) => c.evaluate(ctx),
            Clause::Where(c) => c.evaluate(ctx),
            Clause::Condition(c) => c.evaluate(ctx),
            Clause::OrderBy(c) => c.evaluate(ctx),
            Clause::Direction(c) => c.evaluate(ctx),
            Clause::LiteralGroup(c) => c.evaluate(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Condition, Direction, From, LiteralGroup, OrderBy, Where};
    use crate::context::{MissingPolicy, QueryConfig};
    use crate::diagnostic::Diagnostic;
    use alloc::vec;
    use tabula_core::{Error, CLASSIFIER_COLUMN, ORDER_COLUMN};

    fn context() -> Context {
        let mut ctx = Context::with_config(QueryConfig::default().with_log_diagnostics(false));
        ctx.add(
            Table::new()
                .with_column("day", [1, 2, 3, 4, 5, 6, 7])
                .with_column("customers", [75, 40, 84, 92, 48, 66, 103])
                .with_column("revenue", [770, 450, 1030, 885, 516, 650, 1310]),
            "store_reports",
        );
        ctx
    }

    #[test]
    fn test_full_pipeline() {
        let ctx = context();
        let select = Select::new(LiteralGroup::new(["day", "revenue"]), From::new("store_reports"))
            .with_where(Where::new(Condition::more_than("customers", 75)))
            .with_order_by(OrderBy::new(Direction::ascending("revenue")));

        let table = select.run(&ctx).unwrap();
        let expected = Table::new()
            .with_column("day", [4, 3, 7])
            .with_column("revenue", [885, 1030, 1310]);
        assert_eq!(table, expected);
        assert!(!ctx.contains(Context::SELECTION));
    }

    #[test]
    fn test_where_only() {
        let ctx = context();
        let select = Select::new(LiteralGroup::new(["day"]), From::new("store_reports"))
            .with_where(Where::new(Condition::less_than("revenue", 600)));
        let table = select.run(&ctx).unwrap();
        assert_eq!(table, Table::new().with_column("day", [2, 5]));
    }

    #[test]
    fn test_missing_table_lenient() {
        let ctx = context();
        let select = Select::new(LiteralGroup::wildcard(), From::new("nope"));
        let eval = select.evaluate(&ctx);
        assert!(eval.table.is_empty());
        assert_eq!(
            eval.diagnostics,
            vec![Diagnostic::MissingTable {
                name: "nope".into()
            }]
        );
    }

    #[test]
    fn test_missing_column_strict() {
        let mut ctx = context();
        ctx.set_config(
            QueryConfig::default()
                .with_on_missing(MissingPolicy::Strict)
                .with_log_diagnostics(false),
        );
        let select = Select::new(LiteralGroup::wildcard(), From::new("store_reports"))
            .with_order_by(OrderBy::new(Direction::ascending("nope")));
        assert_eq!(
            select.run(&ctx),
            Err(Error::column_not_found("store_reports", "nope"))
        );
    }

    #[test]
    fn test_clause_dispatch() {
        let mut ctx = context();
        let from: Clause = From::new("store_reports").into();
        let base = from.evaluate(&ctx).into_table();
        assert_eq!(base.nrows(), 7);

        ctx.add(base, Context::SELECTION);
        let condition: Clause = Condition::equal("day", 1).into();
        let classifier = condition.evaluate(&ctx).into_table();
        assert_eq!(classifier.colnames(), vec![CLASSIFIER_COLUMN]);

        let direction: Clause = Direction::descending("day").into();
        let order = direction.evaluate(&ctx).into_table();
        assert_eq!(order.colnames(), vec![ORDER_COLUMN]);
        assert_eq!(order.nrows(), 7);
        ctx.remove(Context::SELECTION);
    }
}
