//! Matcher for `create table` statements.

use alloc::string::String;
use alloc::vec::Vec;

use super::column_def::parse_column_def;
use super::skip_separator;
use crate::errors::{ParseError, StructureError};
use crate::schema::Column;

/// Keyword separating column definitions from the constraint clause.
const CONSTRAINT: &str = "constraint";

/// The parts of a matched `create table` statement, borrowed from the
/// normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateTable<'a> {
    /// The table identifier as written, expected to be `catalog.schema.table`.
    pub qualified_name: &'a str,
    /// Everything between the opening parenthesis and the last `constraint`
    /// keyword that is still followed by a closing parenthesis.
    pub body: &'a str,
}

/// Match `create table <name> ( <body> constraint ... )` against a normalized
/// statement.
///
/// The name is the run of characters after `create table` up to the first
/// whitespace or `(`. The body extends greedily to the last `constraint`
/// keyword that has a `)` somewhere after it; text following that `)` is not
/// inspected. A statement without such a constraint clause does not match.
#[must_use]
pub fn match_create(statement: &str) -> Option<CreateTable<'_>> {
    let rest = statement.strip_prefix("create")?;
    let rest = skip_separator(rest)?.strip_prefix("table")?;
    let rest = skip_separator(rest)?;

    let name_end = rest
        .find(|c: char| c.is_whitespace() || c == '(')
        .unwrap_or(rest.len());
    if name_end == 0 {
        return None;
    }
    let (qualified_name, rest) = rest.split_at(name_end);

    let rest = rest.trim_start().strip_prefix('(')?;
    let close = rest.rfind(')')?;
    let constraint = rest[..close].rfind(CONSTRAINT)?;

    Some(CreateTable {
        qualified_name,
        body: &rest[..constraint],
    })
}

impl CreateTable<'_> {
    /// Split the qualified name into `(catalog, schema, table)`.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] unless the name has exactly two dots.
    pub fn identity(&self) -> Result<(String, String, String), StructureError> {
        let parts: Vec<&str> = self.qualified_name.split('.').collect();
        match parts.as_slice() {
            [catalog, schema, name] => Ok(((*catalog).into(), (*schema).into(), (*name).into())),
            _ => Err(StructureError {
                qualified_name: self.qualified_name.into(),
                parts: parts.len(),
            }),
        }
    }

    /// Parse the comma-separated column definitions of the body.
    ///
    /// Pieces are trimmed and empty pieces skipped, so a trailing comma before
    /// the constraint clause is accepted. Commas are not quote-aware.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first malformed definition.
    pub fn columns(&self) -> Result<Vec<Column>, ParseError> {
        self.body
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(parse_column_def)
            .collect()
    }
}
