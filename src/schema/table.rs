//! The table state machine.
//!
//! A [`Table`] starts out with placeholder identity and no columns, and is
//! mutated in place by each statement passed to [`Table::apply_statement`].
//! Statements are applied strictly in the order they are given.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, trace};

use super::Column;
use crate::errors::Error;
use crate::statement::{StatementKind, match_create, normalize, parse_column_def};

/// Placeholder for catalog, schema and name before any `create table`.
pub(crate) const UNKNOWN: &str = "unknown";
/// Storage format assumed for every table.
pub(crate) const DEFAULT_TABLE_FORMAT: &str = "delta";

/// What applying a single statement did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// A `drop table` statement. The table is left untouched.
    TableDropped,
    /// A `create table` statement set the identity and appended columns.
    Created {
        /// Number of columns appended.
        columns: usize,
    },
    /// An `add column` statement appended one column.
    ColumnAdded,
    /// A `drop column` statement removed every column with the given name.
    ColumnsDropped {
        /// Number of columns removed, zero if the name was absent.
        removed: usize,
    },
    /// The statement was not recognized, or was a `create table` without a
    /// constraint clause. The table is left untouched.
    Ignored,
}

impl Applied {
    /// Whether the statement changed the table.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        match self {
            Self::Created { .. } | Self::ColumnAdded => true,
            Self::ColumnsDropped { removed } => *removed > 0,
            Self::TableDropped | Self::Ignored => false,
        }
    }
}

/// The cumulative schema of a single table.
///
/// # Example
///
/// ```
/// use ddl_replay::Table;
///
/// let mut table = Table::new();
/// table
///     .apply_statement("CREATE TABLE cat.sch.tbl (id INT COMMENT 'pk' CONSTRAINT pk PRIMARY KEY (id));")
///     .unwrap();
/// table
///     .apply_statement("ALTER TABLE tbl ADD COLUMN name STRING COMMENT 'nm';")
///     .unwrap();
///
/// assert_eq!(table.qualified_name(), "cat.sch.tbl");
/// assert_eq!(table.column_names(), vec!["id", "name"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Catalog, `unknown` until a `create table` is applied.
    pub catalog: String,
    /// Schema, `unknown` until a `create table` is applied.
    pub schema: String,
    /// Table name, `unknown` until a `create table` is applied.
    pub name: String,
    /// Columns in the order their statements were applied.
    ///
    /// Names are not required to be unique.
    pub columns: Vec<Column>,
    /// Partitioning columns.
    pub partition_by: Option<Vec<String>>,
    /// Storage location.
    pub location: Option<String>,
    /// Table comment.
    pub comment: Option<String>,
    /// Storage format.
    pub table_format: String,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            catalog: UNKNOWN.into(),
            schema: UNKNOWN.into(),
            name: UNKNOWN.into(),
            columns: Vec::new(),
            partition_by: None,
            location: None,
            comment: None,
            table_format: DEFAULT_TABLE_FORMAT.into(),
        }
    }
}

impl Table {
    /// Create a table carrying placeholder identity and no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the `catalog.schema.name` identifier.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}.{}", self.catalog, self.schema, self.name)
    }

    /// Get the column names, in order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Get the first column with the given name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether the identity still carries the placeholder values, i.e. no
    /// `create table` has been applied.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.catalog == UNKNOWN && self.schema == UNKNOWN && self.name == UNKNOWN
    }

    /// Apply one statement to the table.
    ///
    /// The statement is normalized (terminators removed, whitespace collapsed,
    /// lower-cased) and dispatched on its [`StatementKind`]. Unrecognized
    /// statements, `drop table`, and `create table` statements without a
    /// constraint clause leave the table untouched.
    ///
    /// # Errors
    ///
    /// * [`Error::Structure`] if a `create table` name is not `catalog.schema.table`.
    /// * [`Error::Parse`] if a column definition of a `create table` or
    ///   `add column` statement is malformed.
    ///
    /// The table is not modified when an error is returned.
    pub fn apply_statement(&mut self, statement: &str) -> Result<Applied, Error> {
        let normalized = normalize(statement);
        trace!(statement = %normalized, "normalized statement");

        let kind = StatementKind::classify(&normalized);
        let applied = match kind {
            StatementKind::DropTable => Applied::TableDropped,
            StatementKind::CreateTable(statement) => self.create_table(statement)?,
            StatementKind::AddColumn(definition) => self.add_column(definition)?,
            StatementKind::DropColumn(name) => self.drop_column(name),
            StatementKind::Unrecognized => Applied::Ignored,
        };

        debug!(kind = kind.label(), ?applied, "applied statement");
        Ok(applied)
    }

    /// Set the identity and append the columns of a `create table`.
    ///
    /// Prior columns are kept: applying the same create twice doubles them.
    fn create_table(&mut self, statement: &str) -> Result<Applied, Error> {
        let Some(create) = match_create(statement) else {
            debug!("create table without constraint clause, ignoring");
            return Ok(Applied::Ignored);
        };

        let (catalog, schema, name) = create.identity()?;
        let columns = create.columns()?;
        let count = columns.len();

        self.catalog = catalog;
        self.schema = schema;
        self.name = name;
        self.columns.extend(columns);

        Ok(Applied::Created { columns: count })
    }

    fn add_column(&mut self, definition: &str) -> Result<Applied, Error> {
        let column = parse_column_def(definition)?;
        self.columns.push(column);
        Ok(Applied::ColumnAdded)
    }

    /// Remove every column named `name`, not only the first.
    fn drop_column(&mut self, name: &str) -> Applied {
        let before = self.columns.len();
        self.columns.retain(|c| c.name != name);
        Applied::ColumnsDropped {
            removed: before - self.columns.len(),
        }
    }
}
