//! Tabula Core - Cell values and columnar tables for the Tabula query interpreter.
//!
//! This crate provides the foundational types:
//!
//! - `DataType`: Supported cell data types (Boolean, Int64, Float64, String)
//! - `Value`: Runtime cell values, with the comparison rules used by WHERE and ORDER BY
//! - `Table`: An ordered mapping from column name to column values
//! - `collation`: Natural string ordering
//! - `Error`: Error types surfaced by strict evaluation
//!
//! # Example
//!
//! ```rust
//! use tabula_core::{Table, Value};
//!
//! let table = Table::new()
//!     .with_column("day", [1, 2, 3])
//!     .with_column("revenue", [770, 450, 1030]);
//!
//! assert_eq!(table.colnames(), vec!["day", "revenue"]);
//! assert_eq!(table.nrows(), 3);
//! assert_eq!(table.column("revenue").map(|c| c[2].clone()), Some(Value::Int64(1030)));
//! ```

#![no_std]

extern crate alloc;

pub mod collation;
mod error;
mod table;
mod types;
mod value;

pub use error::{Error, Result};
pub use table::{Column, Table, CLASSIFIER_COLUMN, LITERALS_COLUMN, ORDER_COLUMN};
pub use types::DataType;
pub use value::Value;
