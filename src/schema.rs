//! In-memory model of the tracked table.
mod column;
mod table;

pub use column::Column;
pub use table::{Applied, Table};
