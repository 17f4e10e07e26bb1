//! Runs the demonstration queries over the `store_reports` and `mt_cars` tables.
//!
//! ```text
//! cargo run -p tabula-query --example store_reports
//! ```
//!
//! No logger is installed, so diagnostic logging is switched off and each
//! diagnostic is printed to stderr from the returned `Evaluation` instead.

use tabula_core::Table;
use tabula_query::ast::{Condition, Direction, From, LiteralGroup, OrderBy, Select, Where};
use tabula_query::context::{Context, QueryConfig};

fn main() {
    let store_reports = Table::new()
        .with_column("day", [1, 2, 3, 4, 5, 6, 7])
        .with_column("customers", [75, 40, 84, 92, 48, 66, 103])
        .with_column("revenue", [770, 450, 1030, 885, 516, 650, 1310])
        .with_column("products_sold", [90, 63, 110, 95, 60, 84, 118])
        .with_column("products_left", [400, 337, 227, 132, 72, 753, 635]);

    let mt_cars = Table::new()
        .with_column("mpg", [21.0, 21.0, 22.8, 21.4, 18.7, 18.1, 14.3])
        .with_column("cyl", [6, 6, 4, 6, 8, 6, 8])
        .with_column("disp", [160, 160, 108, 258, 360, 225, 360])
        .with_column("hp", [110, 110, 93, 110, 175, 105, 245])
        .with_column("carb", [4, 4, 1, 1, 2, 1, 4]);

    let mut ctx = Context::with_config(QueryConfig::default().with_log_diagnostics(false));
    ctx.add(store_reports, "store_reports");
    ctx.add(mt_cars, "mt_cars");

    let queries = [
        Select::new(LiteralGroup::new(["day", "revenue"]), From::new("store_reports"))
            .with_where(Where::new(Condition::more_than("customers", 75)))
            .with_order_by(OrderBy::new(Direction::ascending("revenue"))),
        Select::new(
            LiteralGroup::new(["day", "revenue", "products_sold"]),
            From::new("store_reports"),
        ),
        Select::new(LiteralGroup::new(["mpg", "disp", "hp"]), From::new("mt_cars"))
            .with_where(Where::new(Condition::not_equal("hp", 110)))
            .with_order_by(OrderBy::new(Direction::ascending("mpg"))),
        Select::new(LiteralGroup::wildcard(), From::new("mt_cars"))
            .with_where(Where::new(Condition::equal("hp", 110)))
            .with_order_by(OrderBy::new(Direction::descending("carb"))),
    ];

    for select in &queries {
        println!("{}", select);
        let eval = select.evaluate(&ctx);
        for diagnostic in &eval.diagnostics {
            eprintln!("warning: {}", diagnostic);
        }
        println!("{}", eval.table);
    }
}
