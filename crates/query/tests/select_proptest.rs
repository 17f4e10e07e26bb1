//! Property-based tests for SELECT evaluation.
//!
//! These tests check the pipeline invariants on randomly generated tables.

use proptest::prelude::*;
use std::collections::HashSet;
use tabula_core::{Table, Value};
use tabula_query::ast::{Condition, Direction, From, LiteralGroup, OrderBy, Select, Where};
use tabula_query::context::Context;

/// Strategy for a three-column integer table with `a`, `b`, `c` columns.
fn table_strategy(max_rows: usize) -> impl Strategy<Value = Table> {
    (0..max_rows).prop_flat_map(|n| {
        (
            prop::collection::vec(-50i64..50, n),
            prop::collection::vec(-50i64..50, n),
            prop::collection::vec(-1000i64..1000, n),
        )
            .prop_map(|(a, b, c)| {
                Table::new()
                    .with_column("a", a)
                    .with_column("b", b)
                    .with_column("c", c)
            })
    })
}

/// Strategy for a table whose `key` column holds distinct values.
fn unique_key_table_strategy(max_rows: usize) -> impl Strategy<Value = Table> {
    prop::collection::hash_set(-10_000i64..10_000, 0..max_rows).prop_map(|keys| {
        let keys: Vec<i64> = keys.into_iter().collect();
        let payload: Vec<i64> = (0..keys.len() as i64).collect();
        Table::new().with_column("key", keys).with_column("payload", payload)
    })
}

fn context_with(table: &Table) -> Context {
    let mut ctx = Context::new();
    ctx.add(table.clone(), "t");
    ctx
}

fn int_rows(table: &Table) -> Vec<Vec<i64>> {
    table
        .rows()
        .into_iter()
        .map(|row| row.iter().filter_map(Value::as_i64).collect())
        .collect()
}

proptest! {
    /// Property: `SELECT * FROM t` returns t unchanged.
    #[test]
    fn wildcard_select_is_identity(table in table_strategy(40)) {
        let ctx = context_with(&table);
        let select = Select::new(LiteralGroup::wildcard(), From::new("t"));
        let eval = select.evaluate(&ctx);

        prop_assert!(eval.is_clean());
        prop_assert_eq!(eval.table, table);
        prop_assert!(!ctx.contains(Context::SELECTION));
    }

    /// Property: projecting every column keeps names and order.
    #[test]
    fn full_projection_is_idempotent(table in table_strategy(40)) {
        let ctx = context_with(&table);
        let select = Select::new(LiteralGroup::new(["c", "a", "b"]), From::new("t"));
        let result = select.run(&ctx).unwrap();

        prop_assert_eq!(result.colnames(), table.colnames());
        prop_assert_eq!(result, table);
    }

    /// Property: WHERE keeps exactly the matching rows, in source order.
    #[test]
    fn where_preserves_row_order(table in table_strategy(40), threshold in -50i64..50) {
        let ctx = context_with(&table);
        let select = Select::new(LiteralGroup::wildcard(), From::new("t"))
            .with_where(Where::new(Condition::more_than("a", threshold)));
        let result = select.run(&ctx).unwrap();

        let expected: Vec<Vec<i64>> = int_rows(&table)
            .into_iter()
            .filter(|row| row[0] > threshold)
            .collect();
        prop_assert_eq!(int_rows(&result), expected);
    }

    /// Property: `=` and `<>` partition the rows.
    #[test]
    fn equal_and_not_equal_partition(table in table_strategy(40), value in -50i64..50) {
        let ctx = context_with(&table);
        let count = |condition: Condition| {
            Select::new(LiteralGroup::wildcard(), From::new("t"))
                .with_where(Where::new(condition))
                .run(&ctx)
                .unwrap()
                .nrows()
        };

        let equal = count(Condition::equal("b", value));
        let not_equal = count(Condition::not_equal("b", value));
        prop_assert_eq!(equal + not_equal, table.nrows());
    }

    /// Property: ORDER BY is a permutation of the rows, sorted on the key.
    #[test]
    fn order_by_is_permutation(table in table_strategy(40)) {
        let ctx = context_with(&table);
        let select = Select::new(LiteralGroup::wildcard(), From::new("t"))
            .with_order_by(OrderBy::new(Direction::ascending("b")));
        let result = select.run(&ctx).unwrap();

        prop_assert_eq!(result.nrows(), table.nrows());
        for column in result.columns() {
            prop_assert_eq!(column.len(), table.nrows());
        }

        let mut before = int_rows(&table);
        let mut after = int_rows(&result);
        let keys: Vec<i64> = after.iter().map(|row| row[1]).collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));

        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Property: with distinct keys, DESC equals ASC reversed.
    #[test]
    fn descending_is_reversed_ascending(table in unique_key_table_strategy(40)) {
        let ctx = context_with(&table);
        let sorted = |direction: Direction| {
            Select::new(LiteralGroup::wildcard(), From::new("t"))
                .with_order_by(OrderBy::new(direction))
                .run(&ctx)
                .unwrap()
        };

        let mut ascending = int_rows(&sorted(Direction::ascending("key")));
        let descending = int_rows(&sorted(Direction::descending("key")));
        ascending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    /// Property: filtering never invents rows.
    #[test]
    fn where_result_is_subset(table in table_strategy(40), threshold in -50i64..50) {
        let ctx = context_with(&table);
        let select = Select::new(LiteralGroup::new(["a", "c"]), From::new("t"))
            .with_where(Where::new(Condition::less_than("b", threshold)))
            .with_order_by(OrderBy::new(Direction::descending("c")));
        let result = select.run(&ctx).unwrap();

        let source: HashSet<(i64, i64)> = int_rows(&table)
            .into_iter()
            .map(|row| (row[0], row[2]))
            .collect();
        for row in int_rows(&result) {
            prop_assert!(source.contains(&(row[0], row[1])));
        }
        prop_assert!(result.nrows() <= table.nrows());
        prop_assert!(!ctx.contains(Context::SELECTION));
    }
}
