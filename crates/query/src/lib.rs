//! Tabula Query - Clause AST and evaluator for a restricted SELECT language.
//!
//! This crate provides:
//!
//! - `ast`: The clause sum type (`Select`, `From`, `Where`, `Condition`,
//!   `OrderBy`, `Direction`, `LiteralGroup`)
//! - `executor`: Clause evaluation (filter, sort, projection and the SELECT pipeline)
//! - `context`: The table catalog and `QueryConfig`
//! - `diagnostic`: Non-fatal lookup diagnostics and the `Evaluation` result
//!
//! Queries are built directly as ASTs; there is no SQL text parser.
//!
//! # Example
//!
//! ```rust
//! use tabula_core::Table;
//! use tabula_query::ast::{Condition, Direction, From, LiteralGroup, OrderBy, Select, Where};
//! use tabula_query::context::Context;
//!
//! let mut ctx = Context::new();
//! ctx.add(
//!     Table::new()
//!         .with_column("day", [1, 2, 3, 4])
//!         .with_column("customers", [75, 40, 84, 92])
//!         .with_column("revenue", [770, 450, 1030, 885]),
//!     "store_reports",
//! );
//!
//! let select = Select::new(LiteralGroup::new(["day", "revenue"]), From::new("store_reports"))
//!     .with_where(Where::new(Condition::more_than("customers", 75)))
//!     .with_order_by(OrderBy::new(Direction::ascending("revenue")));
//!
//! let result = select.run(&ctx).unwrap();
//! assert_eq!(
//!     result,
//!     Table::new().with_column("day", [4, 3]).with_column("revenue", [885, 1030])
//! );
//! ```

#![no_std]

extern crate alloc;

pub mod ast;
pub mod context;
pub mod diagnostic;
pub mod executor;
