//! A single column of the tracked table.

use alloc::string::String;

/// A column definition as produced by a `create table` or `add column` statement.
///
/// Columns are never edited in place: dropping removes them, adding appends
/// a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Column data type, kept verbatim (e.g. `int`, `decimal(10`).
    pub data_type: String,
    /// Free-text comment, if any.
    pub comment: Option<String>,
}

impl Column {
    /// Create a new column without a comment.
    ///
    /// # Arguments
    ///
    /// * `name` - The column name.
    /// * `data_type` - The data type as written in the statement.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            comment: None,
        }
    }

    /// Attach a comment, the literal without its quotes.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Get the column name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the column data type.
    #[inline]
    #[must_use]
    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    /// Get the column comment.
    #[inline]
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl Default for Column {
    fn default() -> Self {
        Self {
            name: "unknown".into(),
            data_type: "unknown".into(),
            comment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_column() {
        let col = Column::new("id", "int").with_comment("pk");
        assert_eq!(col.name(), "id");
        assert_eq!(col.data_type(), "int");
        assert_eq!(col.comment(), Some("pk"));
    }

    #[test]
    fn test_column_without_comment() {
        let col = Column::new("ts", "timestamp");
        assert_eq!(col.comment(), None);
    }

    #[test]
    fn test_default_column_uses_placeholders() {
        let col = Column::default();
        assert_eq!(col.name(), "unknown");
        assert_eq!(col.data_type(), "unknown");
        assert_eq!(col.comment(), None);
    }
}
