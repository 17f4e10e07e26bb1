//! Evaluation context: the table catalog and query configuration.

use crate::diagnostic::{Diagnostic, Evaluation};
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use tabula_core::{Result, Table};

/// What to do when a table or column lookup misses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Substitute an empty table (or identity order) and record a diagnostic.
    #[default]
    Lenient,
    /// Fail `Select::run` with the first missing table or column.
    Strict,
}

/// What to do when a projection names a column the table does not have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProjectionPolicy {
    /// Ignore the unknown name.
    #[default]
    IgnoreUnknown,
    /// Fail `Select::run` with `ColumnNotFound`.
    Strict,
}

/// Query configuration carried by a `Context`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryConfig {
    pub on_missing: MissingPolicy,
    pub projection: ProjectionPolicy,
    /// Emit diagnostics through `log::warn!` as they are recorded.
    pub log_diagnostics: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            on_missing: MissingPolicy::Lenient,
            projection: ProjectionPolicy::IgnoreUnknown,
            log_diagnostics: true,
        }
    }
}

impl QueryConfig {
    /// Configuration that fails on every missing table, column or projection.
    pub fn strict() -> Self {
        Self {
            on_missing: MissingPolicy::Strict,
            projection: ProjectionPolicy::Strict,
            ..Self::default()
        }
    }

    /// Sets the missing lookup policy.
    pub fn with_on_missing(mut self, policy: MissingPolicy) -> Self {
        self.on_missing = policy;
        self
    }

    /// Sets the projection policy.
    pub fn with_projection(mut self, policy: ProjectionPolicy) -> Self {
        self.projection = policy;
        self
    }

    /// Enables or disables diagnostic logging.
    pub fn with_log_diagnostics(mut self, enabled: bool) -> Self {
        self.log_diagnostics = enabled;
        self
    }
}

/// A named registry of tables.
///
/// `Select` evaluation only reads the context, so one context can serve any
/// number of queries, including concurrent ones.
#[derive(Clone, Debug, Default)]
pub struct Context {
    tables: HashMap<String, Table>,
    config: QueryConfig,
}

impl Context {
    /// Reserved name of the table standalone WHERE and ORDER BY clauses read.
    pub const SELECTION: &'static str = "selection";

    /// Creates an empty context with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty context with the given configuration.
    pub fn with_config(config: QueryConfig) -> Self {
        Self {
            tables: HashMap::new(),
            config,
        }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: QueryConfig) {
        self.config = config;
    }

    /// Registers a table, replacing any table with the same name.
    pub fn add(&mut self, table: Table, name: impl Into<String>) -> &mut Self {
        self.tables.insert(name.into(), table);
        self
    }

    /// Registers a table after checking all its columns have equal length.
    pub fn try_add(&mut self, table: Table, name: impl Into<String>) -> Result<&mut Self> {
        table.validate()?;
        Ok(self.add(table, name))
    }

    /// Removes a table, returning it if it was registered.
    pub fn remove(&mut self, name: &str) -> Option<Table> {
        self.tables.remove(name)
    }

    /// Returns true if a table with this name is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Returns a registered table by reference.
    pub fn lookup(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Returns an owned copy of a registered table.
    ///
    /// A missing name never fails: the result holds an empty table and a
    /// `MissingTable` diagnostic.
    pub fn get(&self, name: &str) -> Evaluation {
        match self.tables.get(name) {
            Some(table) => Evaluation::new(table.clone()),
            None => Evaluation::new(Table::new()).with_diagnostic(self.report(
                Diagnostic::MissingTable {
                    name: name.into(),
                },
            )),
        }
    }

    /// Returns the registered table names, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Logs a diagnostic if enabled and hands it back for recording.
    pub(crate) fn report(&self, diagnostic: Diagnostic) -> Diagnostic {
        if self.config.log_diagnostics {
            log::warn!("{}", diagnostic);
        }
        diagnostic
    }
}
