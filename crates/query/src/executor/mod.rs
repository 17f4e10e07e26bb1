//! Clause evaluation.
//!
//! Each clause kind gets an `evaluate(&Context) -> Evaluation` method here.
//! `Select` threads its intermediate table through the stage executors
//! directly instead of staging it in the context.

mod filter;
mod project;
mod runner;
mod scan;
mod sort;

pub use filter::FilterExecutor;
pub use project::ProjectExecutor;
pub use sort::SortExecutor;
