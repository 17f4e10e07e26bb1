//! WHERE clause and its single-column conditions.

use alloc::string::String;
use core::fmt;
use tabula_core::Value;

/// Comparison operator of a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// `=`
    Equal,
    /// `<>`
    NotEqual,
    /// `>`
    MoreThan,
    /// `<`
    LessThan,
}

impl Comparison {
    /// Returns the SQL operator symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Equal => "=",
            Comparison::NotEqual => "<>",
            Comparison::MoreThan => ">",
            Comparison::LessThan => "<",
        }
    }

    /// Applies the operator to a cell and the threshold.
    ///
    /// See `Value::loose_eq` and `Value::loose_cmp` for how mixed types compare.
    pub fn test(&self, cell: &Value, threshold: &Value) -> bool {
        match self {
            Comparison::Equal => cell.loose_eq(threshold),
            Comparison::NotEqual => !cell.loose_eq(threshold),
            Comparison::MoreThan => cell.loose_cmp(threshold) == Some(core::cmp::Ordering::Greater),
            Comparison::LessThan => cell.loose_cmp(threshold) == Some(core::cmp::Ordering::Less),
        }
    }
}

/// `<column> <op> <threshold>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    column: String,
    comparison: Comparison,
    threshold: Value,
}

impl Condition {
    /// Creates a condition comparing each cell of `column` with `threshold`.
    pub fn new(column: impl Into<String>, comparison: Comparison, threshold: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            comparison,
            threshold: threshold.into(),
        }
    }

    /// `column = threshold`.
    pub fn equal(column: impl Into<String>, threshold: impl Into<Value>) -> Self {
        Self::new(column, Comparison::Equal, threshold)
    }

    /// `column <> threshold`.
    pub fn not_equal(column: impl Into<String>, threshold: impl Into<Value>) -> Self {
        Self::new(column, Comparison::NotEqual, threshold)
    }

    /// `column > threshold`.
    pub fn more_than(column: impl Into<String>, threshold: impl Into<Value>) -> Self {
        Self::new(column, Comparison::MoreThan, threshold)
    }

    /// `column < threshold`.
    pub fn less_than(column: impl Into<String>, threshold: impl Into<Value>) -> Self {
        Self::new(column, Comparison::LessThan, threshold)
    }

    /// Returns the name of the column the condition reads.
    #[inline]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the operator.
    #[inline]
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Returns the value cells are compared with.
    #[inline]
    pub fn threshold(&self) -> &Value {
        &self.threshold
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.column, self.comparison.symbol())?;
        match &self.threshold {
            Value::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            other => write!(f, "{}", other),
        }
    }
}

/// `WHERE <condition>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Where {
    condition: Condition,
}

impl Where {
    /// Wraps a single condition.
    pub fn new(condition: Condition) -> Self {
        Self { condition }
    }

    /// Returns the condition.
    #[inline]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }
}

impl fmt::Display for Where {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WHERE {}", self.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_comparison_operators() {
        let threshold = Value::Int64(75);
        assert!(Comparison::MoreThan.test(&Value::Int64(84), &threshold));
        assert!(!Comparison::MoreThan.test(&Value::Int64(75), &threshold));
        assert!(Comparison::LessThan.test(&Value::Int64(40), &threshold));
        assert!(Comparison::Equal.test(&Value::Int64(75), &threshold));
        assert!(Comparison::NotEqual.test(&Value::Int64(76), &threshold));
    }

    #[test]
    fn test_mismatched_types() {
        let threshold = Value::Int64(5);
        let text = Value::String("abc".into());
        assert!(!Comparison::MoreThan.test(&text, &threshold));
        assert!(!Comparison::LessThan.test(&text, &threshold));
        assert!(!Comparison::Equal.test(&text, &threshold));
        assert!(Comparison::NotEqual.test(&text, &threshold));
        assert!(!Comparison::MoreThan.test(&Value::Null, &threshold));
    }

    #[test]
    fn test_condition_display() {
        assert_eq!(Condition::more_than("customers", 75).to_string(), "customers > 75");
        assert_eq!(Condition::not_equal("hp", 110).to_string(), "hp <> 110");
        assert_eq!(
            Condition::equal("name", "O'Hara").to_string(),
            "name = 'O''Hara'"
        );
        assert_eq!(
            Where::new(Condition::less_than("mpg", 21.5)).to_string(),
            "WHERE mpg < 21.5"
        );
    }
}
