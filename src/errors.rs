//! Submodule defining the errors used across the crate.
//!
//! Only two shapes of input are hard failures: a qualified table name that
//! does not have exactly three parts, and a column definition that does not
//! read as `name type comment '...'`. Everything else the replay cannot match
//! is skipped without an error.

use alloc::string::String;

/// The qualified name of a `create table` statement is not `catalog.schema.table`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Qualified table name `{qualified_name}` has {parts} dot-separated part(s), expected 3")]
pub struct StructureError {
    /// The qualified name as it appeared in the normalized statement.
    pub qualified_name: String,
    /// How many parts splitting on `.` produced.
    pub parts: usize,
}

/// A column definition does not match `name type comment '...'`.
///
/// Every variant carries the offending definition text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing was left to parse.
    #[error("Empty column definition")]
    EmptyDefinition {
        /// The offending definition.
        definition: String,
    },
    /// The column name is not followed by a data type.
    #[error("Column `{name}` has no data type in `{definition}`")]
    MissingType {
        /// The column name that was read.
        name: String,
        /// The offending definition.
        definition: String,
    },
    /// The data type is not followed by the `comment` keyword.
    #[error("Expected `comment` keyword, found {found:?} in `{definition}`")]
    ExpectedComment {
        /// The token found in place of the keyword, if any.
        found: Option<String>,
        /// The offending definition.
        definition: String,
    },
    /// The `comment` keyword is not followed by a quoted literal.
    #[error("Expected a quoted comment after `comment`, found {found:?} in `{definition}`")]
    ExpectedQuote {
        /// The text found in place of the opening quote, if any.
        found: Option<String>,
        /// The offending definition.
        definition: String,
    },
    /// The comment literal has no closing quote.
    #[error("Unterminated comment literal in `{definition}`")]
    UnterminatedComment {
        /// The offending definition.
        definition: String,
    },
}

impl ParseError {
    /// Returns the definition text that failed to parse.
    #[must_use]
    pub fn definition(&self) -> &str {
        match self {
            Self::EmptyDefinition { definition }
            | Self::MissingType { definition, .. }
            | Self::ExpectedComment { definition, .. }
            | Self::ExpectedQuote { definition, .. }
            | Self::UnterminatedComment { definition } => definition,
        }
    }
}

/// Errors that abort the replay of a statement stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The qualified name of a `create table` statement is malformed.
    #[error(transparent)]
    Structure(#[from] StructureError),
    /// A column definition is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_structure_error_message() {
        let err = StructureError {
            qualified_name: "sch.tbl".into(),
            parts: 2,
        };
        assert_eq!(
            err.to_string(),
            "Qualified table name `sch.tbl` has 2 dot-separated part(s), expected 3"
        );
    }

    #[test]
    fn test_error_is_transparent() {
        let err: Error = ParseError::UnterminatedComment {
            definition: "a int comment 'x".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Unterminated comment literal in `a int comment 'x`"
        );
    }

    #[test]
    fn test_definition_accessor() {
        let err = ParseError::ExpectedComment {
            found: Some("'no".into()),
            definition: "c comment 'no type'".into(),
        };
        assert_eq!(err.definition(), "c comment 'no type'");
    }
}
