//! Table lookup and literal group evaluation.

use crate::ast::{From, LiteralGroup};
use crate::context::Context;
use crate::diagnostic::Evaluation;
use tabula_core::{Table, LITERALS_COLUMN};

impl From {
    /// Looks the table up in the context.
    ///
    /// An unknown name yields an empty table and a `MissingTable` diagnostic.
    pub fn evaluate(&self, ctx: &Context) -> Evaluation {
        ctx.get(self.table())
    }
}

impl LiteralGroup {
    /// Returns a one-column `literals` table holding the listed names.
    pub fn evaluate(&self, _ctx: &Context) -> Evaluation {
        Evaluation::new(Table::new().with_column(
            LITERALS_COLUMN,
            self.literals().iter().map(|l| l.as_str()),
        ))
    }
}
