//! Classification of normalized statements.

/// Prefix of a `drop table` statement.
pub(crate) const DROP_TABLE: &str = "drop table";
/// Prefix of a `create table` statement.
pub(crate) const CREATE_TABLE: &str = "create table";
/// Phrase introducing a column to add.
pub(crate) const ADD_COLUMN: &str = "add column";
/// Phrase introducing a column to drop.
pub(crate) const DROP_COLUMN: &str = "drop column";

/// The kind of a normalized statement.
///
/// Classification checks, in order: a `drop table` prefix, a `create table`
/// prefix, an `add column` phrase anywhere, a `drop column` phrase anywhere.
/// The first hit wins. The phrase checks are substring matches, so a
/// statement that merely mentions `add column` (say, inside a comment
/// literal of some other statement) classifies as [`StatementKind::AddColumn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind<'a> {
    /// `drop table ...`, a no-op for the tracked table.
    DropTable,
    /// `create table ...`, carrying the whole normalized statement.
    CreateTable(&'a str),
    /// Statement containing `add column`, carrying the trimmed text after
    /// the first occurrence of the phrase.
    AddColumn(&'a str),
    /// Statement containing `drop column`, carrying the trimmed text after
    /// the first occurrence of the phrase.
    DropColumn(&'a str),
    /// Nothing matched.
    Unrecognized,
}

impl<'a> StatementKind<'a> {
    /// Classify a statement already passed through [`normalize`](super::normalize).
    #[must_use]
    pub fn classify(statement: &'a str) -> Self {
        if statement.starts_with(DROP_TABLE) {
            Self::DropTable
        } else if statement.starts_with(CREATE_TABLE) {
            Self::CreateTable(statement)
        } else if let Some(rest) = after_phrase(statement, ADD_COLUMN) {
            Self::AddColumn(rest)
        } else if let Some(rest) = after_phrase(statement, DROP_COLUMN) {
            Self::DropColumn(rest)
        } else {
            Self::Unrecognized
        }
    }

    /// Short lower-case label, used in diagnostics.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::DropTable => DROP_TABLE,
            Self::CreateTable(_) => CREATE_TABLE,
            Self::AddColumn(_) => ADD_COLUMN,
            Self::DropColumn(_) => DROP_COLUMN,
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Trimmed text following the first occurrence of `phrase`.
fn after_phrase<'a>(statement: &'a str, phrase: &str) -> Option<&'a str> {
    statement
        .find(phrase)
        .map(|idx| statement[idx + phrase.len()..].trim())
}
