//! Command-line front end: replay a DDL file and print the final table.
//!
//! The first argument is the file to replay, `table_init.sql` when omitted.
//! `DDL_REPLAY_OUTPUT` selects the output format, `text` (the default) or
//! `json`. Log verbosity follows `RUST_LOG`; logs go to stderr.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, fs, io};

use anyhow::{Context, Result, bail};
use ddl_replay::{Table, parse_ddl_file};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "table_init.sql";
const OUTPUT_VAR: &str = "DDL_REPLAY_OUTPUT";

/// How the final table is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum OutputFormat {
    /// One-line `Table(...)` rendering.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown output format `{other}`, expected `text` or `json`"),
        }
    }
}

fn replay_file(path: &Path) -> Result<Table> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_ddl_file(&content).with_context(|| format!("replaying {}", path.display()))
}

fn render(table: &Table, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(table.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(table).context("serializing table"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_INPUT), PathBuf::from);
    let format = match env::var(OUTPUT_VAR) {
        Ok(value) => value.parse()?,
        Err(_) => OutputFormat::default(),
    };

    tracing::info!("Replaying {}", path.display());
    let table = replay_file(&path)?;
    tracing::info!(
        columns = table.columns.len(),
        "Replayed {}",
        table.qualified_name()
    );

    println!("{}", render(&table, format)?);
    Ok(())
}
