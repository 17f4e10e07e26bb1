//! Value type definitions for Tabula.
//!
//! This module defines the `Value` enum which represents any value that can be stored
//! in a table cell, together with the comparison rules the evaluator relies on.
//!
//! # Comparison rules
//!
//! Two families of comparison exist, and they are deliberately different:
//!
//! - **Condition comparisons** (`loose_eq`, `loose_cmp`) back the WHERE operators.
//!   Numbers compare by value regardless of width. Two strings compare by content.
//!   For ordering, a mixed pair is coerced to numbers where possible (booleans as
//!   0/1, numeric strings parsed); a pair that cannot be coerced, and any NaN,
//!   yields no ordering so both `>` and `<` are false. Equality never coerces
//!   across tags: `Int64(1)` equals `Float64(1.0)` but not `String("1")`.
//! - **Sort comparison** (`sort_cmp`) backs ORDER BY and is a total order:
//!   `Null` first, then numbers (booleans as 0/1, NaN after every other number),
//!   then strings in natural collation order.

use crate::collation::natural_cmp;
use crate::types::DataType;
use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;

/// A value that can be stored in a table cell.
#[derive(Clone, Debug)]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean value
    Boolean(bool),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit floating point
    Float64(f64),
    /// UTF-8 string
    String(String),
}

impl Value {
    /// Returns the data type of this value, or None if it's Null.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(DataType::Boolean),
            Value::Int64(_) => Some(DataType::Int64),
            Value::Float64(_) => Some(DataType::Float64),
            Value::String(_) => Some(DataType::String),
        }
    }

    /// Returns true if this value is Null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value is an Int64 or a Float64.
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int64(_) | Value::Float64(_))
    }

    /// Returns the boolean value if this is a Boolean, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the i64 value if this is an Int64, None otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the f64 value if this is a Float64, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Coerces this value to a number.
    ///
    /// Numbers pass through, booleans become 0/1, strings are parsed after
    /// trimming. `Null` and non-numeric strings return None.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Null => None,
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Int64(i) => Some(*i as f64),
            Value::Float64(f) => Some(*f),
            Value::String(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Equality used by the `=` and `<>` conditions.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (a, b) if a.is_number() && b.is_number() => {
                match (a.numeric(), b.numeric()) {
                    (Some(x), Some(y)) => x.compare(y) == Some(Ordering::Equal),
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Ordering used by the `>` and `<` conditions.
    ///
    /// Returns None when the pair has no meaningful order.
    pub fn loose_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Some(a.as_str().cmp(b.as_str())),
            (Value::Int64(a), Value::Int64(b)) => Some(a.cmp(b)),
            _ => self.numeric()?.compare(other.numeric()?),
        }
    }

    /// Total ordering used by ORDER BY.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::String(a), Value::String(b)) => natural_cmp(a, b),
            (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
            (Value::Null, Value::Null) => Ordering::Equal,
            _ if self.sort_rank() != other.sort_rank() => {
                self.sort_rank().cmp(&other.sort_rank())
            }
            _ => {
                // Both numeric (including booleans) at this point.
                let a = self.numeric().unwrap_or(Number::Float(f64::NAN));
                let b = other.numeric().unwrap_or(Number::Float(f64::NAN));
                match (a.is_nan(), b.is_nan()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => a.compare(b).unwrap_or(Ordering::Equal),
                }
            }
        }
    }

    /// Numeric view without widening integers to f64.
    fn numeric(&self) -> Option<Number> {
        match self {
            Value::Null => None,
            Value::Boolean(b) => Some(Number::Int(*b as i64)),
            Value::Int64(i) => Some(Number::Int(*i)),
            Value::Float64(f) => Some(Number::Float(*f)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .map(Number::Int)
                    .or_else(|_| s.parse::<f64>().map(Number::Float))
                    .ok()
            }
        }
    }

    /// Returns the tag group ordering used by `sort_cmp`.
    fn sort_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Boolean(_) | Value::Int64(_) | Value::Float64(_) => 1,
            Value::String(_) => 2,
        }
    }
}

/// An integer or float compared by exact mathematical value.
#[derive(Clone, Copy, Debug)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn is_nan(self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }

    fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

/// Compares an integer with a float without rounding either side.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, exactly representable. i64 covers [-2^63, 2^63).
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    if f.is_nan() {
        return None;
    }
    if f >= BOUND {
        return Some(Ordering::Less);
    }
    if f < -BOUND {
        return Some(Ordering::Greater);
    }
    // In range, the cast truncates toward zero exactly.
    let whole = f as i64;
    match i.cmp(&whole) {
        Ordering::Equal => 0.0f64.partial_cmp(&(f - whole as f64)),
        ord => Some(ord),
    }
}

/// Structural equality: same tag and same payload. NaN equals NaN so that
/// tables holding NaN still compare equal to themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Float64(a), Value::Float64(b)) => {
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Int64(i) => write!(f, "{}", i),
            Value::Float64(v) => write!(f, "{}", v),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int64(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}
