//! Matching of individual schema-definition statements.
//!
//! This is intentionally not a SQL parser. It recognizes four statement
//! shapes in normalized (single-line, lower-case) text:
//! - `drop table ...`, accepted and ignored
//! - `create table <catalog.schema.table> (<columns> constraint ...)`
//! - `... add column <name> <type> comment '<text>'`
//! - `... drop column <name>`
//!
//! Anything else classifies as [`StatementKind::Unrecognized`].

mod column_def;
mod create;
mod kind;
mod normalize;

pub use column_def::parse_column_def;
pub use create::{CreateTable, match_create};
pub use kind::StatementKind;
pub use normalize::normalize;

/// Skip a mandatory run of whitespace, `None` if there is none.
fn skip_separator(input: &str) -> Option<&str> {
    let trimmed = input.trim_start();
    (trimmed.len() < input.len()).then_some(trimmed)
}
