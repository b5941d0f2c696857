//! Replaying a whole file of statements.

use core::str::FromStr;

use tracing::debug;

use crate::errors::Error;
use crate::schema::Table;

/// Split raw file content into statements.
///
/// The content is split on every `;`, each piece is trimmed, and empty
/// pieces are dropped. A `;` inside a quoted literal still splits.
pub fn split_statements(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
}

/// Replay every statement of `content` against a fresh [`Table`] and return
/// the final state.
///
/// # Errors
///
/// Returns the first [`Error`] raised by a statement. The statements after it
/// are not applied.
///
/// # Example
///
/// ```
/// use ddl_replay::parse_ddl_file;
///
/// let table = parse_ddl_file(
///     "create table cat.sch.tbl (id int comment 'pk' constraint pk primary key (id));
///      alter table tbl add column name string comment 'nm';",
/// )
/// .unwrap();
///
/// assert_eq!(table.catalog, "cat");
/// assert_eq!(table.column_names(), vec!["id", "name"]);
/// ```
pub fn parse_ddl_file(content: &str) -> Result<Table, Error> {
    let mut table = Table::new();
    for (index, statement) in split_statements(content).enumerate() {
        if let Err(err) = table.apply_statement(statement) {
            debug!(index, %err, "replay aborted");
            return Err(err);
        }
    }
    debug!(
        table = %table.qualified_name(),
        columns = table.columns.len(),
        "replay finished"
    );
    Ok(table)
}

impl FromStr for Table {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ddl_file(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_split_statements() {
        let statements: Vec<&str> = split_statements(" a ;\n\n; b;c ;  ").collect();
        assert_eq!(statements, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_empty_content() {
        assert_eq!(split_statements("").count(), 0);
        assert_eq!(split_statements(" ;; \n ;").count(), 0);
    }

    #[test]
    fn test_empty_file_yields_placeholder_table() {
        assert_eq!(parse_ddl_file("").unwrap(), Table::new());
    }

    #[test]
    fn test_from_str() {
        let table: Table = "create table a.b.c (x int comment 'y' constraint k (x));"
            .parse()
            .unwrap();
        assert_eq!(table.qualified_name(), "a.b.c");
    }

    #[test]
    fn test_error_stops_replay() {
        let result = parse_ddl_file(
            "create table a.b.c (x int comment 'y' constraint k (x));
             alter table c add column broken;
             alter table c add column ok int comment 'never applied';",
        );
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
