//! Testing utilities for fuzzing the replay pipeline.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`FuzzStatement`]: a well-formed statement drawn from small identifier pools
//! - [`render_script`]: render a sequence of statements as a DDL file
//! - [`expected_table`]: the table a sequence should produce, computed without
//!   going through text
//! - [`run_differential_test`]: replay a rendered script and compare with [`expected_table`]
//! - [`run_raw_input_test`]: replay arbitrary text and check the invariants
//!   that hold for any input

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write;

use arbitrary::{Arbitrary, Unstructured};

use crate::replay::parse_ddl_file;
use crate::schema::{Column, Table};

const CATALOGS: &[&str] = &["main", "hive"];
const SCHEMAS: &[&str] = &["sales", "raw"];
const TABLES: &[&str] = &["tbl", "events"];
const NAMES: &[&str] = &["id", "name", "ts", "amount", "flag"];
const TYPES: &[&str] = &["int", "string", "bigint", "timestamp", "array<string>"];
const COMMENTS: &[&str] = &["pk", "", "user name", "it's", "Mixed Case"];

/// A statement the replay is expected to understand.
///
/// Identifiers come from fixed pools that never contain `,`, `;`,
/// `constraint` or the dispatch phrases, so rendering and replaying is
/// lossless up to lower-casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FuzzStatement {
    /// `CREATE TABLE catalog.schema.table (...)` with a constraint clause.
    Create {
        /// Catalog part of the qualified name.
        catalog: &'static str,
        /// Schema part of the qualified name.
        schema: &'static str,
        /// Table part of the qualified name.
        table: &'static str,
        /// Column definitions, possibly none.
        columns: Vec<Column>,
    },
    /// `ALTER TABLE ... ADD COLUMN ...`.
    AddColumn(Column),
    /// `ALTER TABLE ... DROP COLUMN ...`.
    DropColumn(&'static str),
    /// `DROP TABLE ...`.
    DropTable,
    /// A statement no rule matches.
    Unrecognized,
}

impl FuzzStatement {
    /// Render as upper-cased SQL without a terminator.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Create {
                catalog,
                schema,
                table,
                columns,
            } => {
                let mut sql = format!("CREATE TABLE {catalog}.{schema}.{table} (\n");
                for column in columns {
                    let _ = writeln!(sql, "  {},", column_sql(column));
                }
                let pk = columns.first().map_or("id", Column::name);
                let _ = write!(sql, "  CONSTRAINT pk PRIMARY KEY ({pk})\n)");
                sql
            }
            Self::AddColumn(column) => {
                format!("ALTER TABLE tbl ADD COLUMN {}", column_sql(column))
            }
            Self::DropColumn(name) => format!("ALTER TABLE tbl DROP COLUMN {name}"),
            Self::DropTable => "DROP TABLE tbl".to_string(),
            Self::Unrecognized => "SELECT * FROM tbl".to_string(),
        }
    }
}

fn column_sql(column: &Column) -> String {
    format!(
        "{} {} COMMENT '{}'",
        column.name.to_uppercase(),
        column.data_type.to_uppercase(),
        column.comment().unwrap_or_default()
    )
}

/// Render statements as a `;`-terminated script.
#[must_use]
pub fn render_script(statements: &[FuzzStatement]) -> String {
    let mut script = String::new();
    for statement in statements {
        let _ = writeln!(script, "{};", statement.to_sql());
    }
    script
}

/// The table `statements` should produce, applied directly to the model.
#[must_use]
pub fn expected_table(statements: &[FuzzStatement]) -> Table {
    let lowered = |column: &Column| Column {
        name: column.name.to_lowercase(),
        data_type: column.data_type.to_lowercase(),
        comment: column.comment.as_ref().map(|c| c.to_lowercase()),
    };

    let mut table = Table::new();
    for statement in statements {
        match statement {
            FuzzStatement::Create {
                catalog,
                schema,
                table: name,
                columns,
            } => {
                table.catalog = (*catalog).into();
                table.schema = (*schema).into();
                table.name = (*name).into();
                table.columns.extend(columns.iter().map(lowered));
            }
            FuzzStatement::AddColumn(column) => table.columns.push(lowered(column)),
            FuzzStatement::DropColumn(name) => table.columns.retain(|c| c.name != *name),
            FuzzStatement::DropTable | FuzzStatement::Unrecognized => {}
        }
    }
    table
}

/// Replay the rendered script and compare it with [`expected_table`].
///
/// # Panics
///
/// Panics if the replay fails or diverges from the model.
pub fn run_differential_test(statements: &[FuzzStatement]) {
    let script = render_script(statements);
    let actual = match parse_ddl_file(&script) {
        Ok(table) => table,
        Err(err) => panic!("Replay failed: {err}\n\nScript:\n{script}"),
    };
    assert_eq!(
        actual,
        expected_table(statements),
        "Replay diverged from model\n\nScript:\n{script}"
    );
}

/// Replay arbitrary text.
///
/// Malformed input is expected and returns silently. When the replay
/// succeeds, every column must account for two quotes of the input, and
/// appending a `drop table` must not change the result.
///
/// # Panics
///
/// Panics if either invariant does not hold.
pub fn run_raw_input_test(input: &str) {
    let Ok(table) = parse_ddl_file(input) else {
        return;
    };
    let quotes = input.matches('\'').count();
    assert!(
        table.columns.len() * 2 <= quotes,
        "{} columns from {quotes} quotes in {input:?}",
        table.columns.len()
    );
    let with_drop = format!("{input};\nDROP TABLE tbl;");
    assert_eq!(
        parse_ddl_file(&with_drop).as_ref(),
        Ok(&table),
        "drop table changed the replay of {input:?}"
    );
}

fn fuzz_column(u: &mut Unstructured<'_>) -> arbitrary::Result<Column> {
    Ok(Column::new(*u.choose(NAMES)?, *u.choose(TYPES)?).with_comment(*u.choose(COMMENTS)?))
}

impl<'a> Arbitrary<'a> for FuzzStatement {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(match u.int_in_range(0..=4u8)? {
            0 => {
                let count = u.int_in_range(0..=4usize)?;
                let columns = (0..count)
                    .map(|_| fuzz_column(u))
                    .collect::<arbitrary::Result<Vec<_>>>()?;
                Self::Create {
                    catalog: *u.choose(CATALOGS)?,
                    schema: *u.choose(SCHEMAS)?,
                    table: *u.choose(TABLES)?,
                    columns,
                }
            }
            1 => Self::AddColumn(fuzz_column(u)?),
            2 => Self::DropColumn(*u.choose(NAMES)?),
            3 => Self::DropTable,
            _ => Self::Unrecognized,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_render_create() {
        let statement = FuzzStatement::Create {
            catalog: "main",
            schema: "sales",
            table: "tbl",
            columns: vec![Column::new("id", "int").with_comment("pk")],
        };
        assert_eq!(
            statement.to_sql(),
            "CREATE TABLE main.sales.tbl (\n  ID INT COMMENT 'pk',\n  CONSTRAINT pk PRIMARY KEY (id)\n)"
        );
    }

    #[test]
    fn test_differential_sequence() {
        run_differential_test(&[
            FuzzStatement::Unrecognized,
            FuzzStatement::Create {
                catalog: "hive",
                schema: "raw",
                table: "events",
                columns: vec![
                    Column::new("id", "int").with_comment("Mixed Case"),
                    Column::new("ts", "timestamp").with_comment("it's"),
                ],
            },
            FuzzStatement::AddColumn(Column::new("flag", "array<string>").with_comment("")),
            FuzzStatement::DropTable,
            FuzzStatement::DropColumn("id"),
            FuzzStatement::DropColumn("amount"),
        ]);
    }

    #[test]
    fn test_differential_empty_create() {
        run_differential_test(&[FuzzStatement::Create {
            catalog: "main",
            schema: "raw",
            table: "tbl",
            columns: Vec::new(),
        }]);
    }

    #[test]
    fn test_raw_input() {
        run_raw_input_test("");
        run_raw_input_test("create table a.b (x int comment 'y' constraint k (x))");
        run_raw_input_test("alter table t add column x int comment 'y'; garbage ;;");
    }

    #[test]
    fn test_arbitrary_statements_replay() {
        let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let mut u = Unstructured::new(&data);
        let statements: Vec<FuzzStatement> = u.arbitrary().unwrap();
        run_differential_test(&statements);
    }
}
