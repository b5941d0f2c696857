#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod errors;
mod format;
pub mod replay;
pub mod schema;
pub mod statement;
#[cfg(feature = "testing")]
pub mod testing;

// Re-export main types
pub use errors::{Error, ParseError, StructureError};
pub use replay::{parse_ddl_file, split_statements};
pub use schema::{Applied, Column, Table};
pub use statement::StatementKind;
