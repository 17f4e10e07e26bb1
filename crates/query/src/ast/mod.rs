//! Clause AST for SELECT queries.

mod clause;
mod expr;
mod order;
mod predicate;

pub use clause::{Clause, Select};
pub use expr::{From, LiteralGroup, WILDCARD};
pub use order::{Direction, OrderBy, SortOrder};
pub use predicate::{Comparison, Condition, Where};
