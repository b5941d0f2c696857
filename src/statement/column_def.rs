//! Tokenizer for `name type comment '...'` column definitions.

use alloc::string::{String, ToString};

use super::skip_separator;
use crate::errors::ParseError;
use crate::schema::Column;

/// Keyword introducing the comment literal.
const COMMENT: &str = "comment";
/// Delimiter of the comment literal.
const QUOTE: char = '\'';

/// Parse a single column definition of the form `name type comment '<text>'`.
///
/// The name and type are the first two whitespace-separated tokens. The third
/// token must be exactly `comment`, followed by whitespace and a single quote.
/// The comment runs up to the *last* single quote of the definition, so it may
/// itself contain quotes, and any text after that last quote is ignored.
///
/// Matching is case-sensitive: callers pass normalized (lower-case) text.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first part of the definition that
/// does not fit the shape.
pub fn parse_column_def(definition: &str) -> Result<Column, ParseError> {
    let (name, rest) = split_token(definition);
    if name.is_empty() {
        return Err(ParseError::EmptyDefinition {
            definition: definition.into(),
        });
    }

    let (data_type, rest) = skip_separator(rest).map_or(("", rest), split_token);
    if data_type.is_empty() {
        return Err(ParseError::MissingType {
            name: name.into(),
            definition: definition.into(),
        });
    }

    let (keyword, rest) = skip_separator(rest).map_or(("", rest), split_token);
    if keyword != COMMENT {
        return Err(ParseError::ExpectedComment {
            found: non_empty(keyword),
            definition: definition.into(),
        });
    }

    let literal = skip_separator(rest).unwrap_or("");
    let Some(body) = literal.strip_prefix(QUOTE) else {
        return Err(ParseError::ExpectedQuote {
            found: non_empty(split_token(literal).0),
            definition: definition.into(),
        });
    };

    let Some(end) = body.rfind(QUOTE) else {
        return Err(ParseError::UnterminatedComment {
            definition: definition.into(),
        });
    };

    Ok(Column::new(name, data_type).with_comment(&body[..end]))
}

/// Split off the leading run of non-whitespace characters.
fn split_token(input: &str) -> (&str, &str) {
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    input.split_at(end)
}

fn non_empty(token: &str) -> Option<String> {
    (!token.is_empty()).then(|| token.to_string())
}
