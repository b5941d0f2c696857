//! Human-readable rendering of the table model.

use core::fmt::{self, Display};

use crate::schema::{Column, Table};

/// Write an optional value, `None` when absent.
fn write_optional(f: &mut fmt::Formatter<'_>, value: Option<&str>) -> fmt::Result {
    match value {
        Some(v) => write!(f, "{v}"),
        None => write!(f, "None"),
    }
}

/// Write a bracketed, comma-separated list.
fn write_list<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

impl Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column(name={}, data_type={}, comment=", self.name, self.data_type)?;
        write_optional(f, self.comment())?;
        write!(f, ")")
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table(catalog={}, schema={}, name={}, columns=",
            self.catalog, self.schema, self.name
        )?;
        write_list(f, &self.columns)?;

        write!(f, ", partition_by=")?;
        match &self.partition_by {
            Some(partition_by) => write_list(f, partition_by)?,
            None => write!(f, "None")?,
        }

        write!(f, ", location=")?;
        write_optional(f, self.location.as_deref())?;
        write!(f, ", comment=")?;
        write_optional(f, self.comment.as_deref())?;
        write!(f, ", table_format={})", self.table_format)
    }
}
