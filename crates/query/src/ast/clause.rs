//! The clause sum type and the SELECT root.

use crate::ast::{Condition, Direction, From, LiteralGroup, OrderBy, Where};
use core::fmt;

/// `SELECT <columns> FROM <table> [WHERE ...] [ORDER BY ...]`.
///
/// The FROM clause is required by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Select {
    columns: LiteralGroup,
    from: From,
    where_clause: Option<Where>,
    order_by: Option<OrderBy>,
}

impl Select {
    /// Creates a query with no WHERE or ORDER BY.
    pub fn new(columns: LiteralGroup, from: From) -> Self {
        Self {
            columns,
            from,
            where_clause: None,
            order_by: None,
        }
    }

    /// Creates a query from all four parts.
    pub fn from_parts(
        columns: LiteralGroup,
        from: From,
        where_clause: Option<Where>,
        order_by: Option<OrderBy>,
    ) -> Self {
        Self {
            columns,
            from,
            where_clause,
            order_by,
        }
    }

    /// Adds a WHERE clause.
    pub fn with_where(mut self, where_clause: Where) -> Self {
        self.where_clause = Some(where_clause);
        self
    }

    /// Adds an ORDER BY clause.
    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    #[inline]
    pub fn columns(&self) -> &LiteralGroup {
        &self.columns
    }

    #[inline]
    pub fn from(&self) -> &From {
        &self.from
    }

    #[inline]
    pub fn where_clause(&self) -> Option<&Where> {
        self.where_clause.as_ref()
    }

    #[inline]
    pub fn order_by(&self) -> Option<&OrderBy> {
        self.order_by.as_ref()
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {} {}", self.columns, self.from)?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, " {}", where_clause)?;
        }
        if let Some(order_by) = &self.order_by {
            write!(f, " {}", order_by)?;
        }
        Ok(())
    }
}

/// Any clause of the query language.
///
/// Every variant evaluates against a `Context` to a table; see
/// `Clause::evaluate`.
#[derive(Clone, Debug, PartialEq)]
pub enum Clause {
    Select(Select),
    From(From),
    Where(Where),
    Condition(Condition),
    OrderBy(OrderBy),
    Direction(Direction),
    LiteralGroup(LiteralGroup),
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Select(c) => c.fmt(f),
            Clause::From(c) => c.fmt(f),
            Clause::Where(c) => c.fmt(f),
            Clause::Condition(c) => c.fmt(f),
            Clause::OrderBy(c) => c.fmt(f),
            Clause::Direction(c) => c.fmt(f),
            Clause::LiteralGroup(c) => c.fmt(f),
        }
    }
}

macro_rules! impl_into_clause {
    ($($variant:ident),*) => {
        $(
            impl core::convert::From<$variant> for Clause {
                fn from(clause: $variant) -> Self {
                    Clause::$variant(clause)
                }
            }
        )*
    };
}

impl_into_clause!(Select, From, Where, Condition, OrderBy, Direction, LiteralGroup);
