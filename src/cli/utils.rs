//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lcdcodec::{MappingTable, TableSpec};

/// Resolve plain-text input for commands that accept either inline strings
/// or files.
pub fn read_text_arg(text: Option<String>, from: Option<PathBuf>) -> Result<String> {
    if let Some(t) = text {
        return Ok(t);
    }
    if let Some(path) = from {
        if path.as_os_str() == "-" {
            return read_stdin();
        }
        return fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    read_stdin()
}

/// Read the entire stdin stream into memory.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Load and validate a mapping table from a JSON spec file.
pub fn load_table(path: &Path) -> Result<MappingTable> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let spec: TableSpec = serde_json::from_str(&raw)
        .with_context(|| format!("invalid table spec in {}", path.display()))?;
    MappingTable::try_from(spec)
        .with_context(|| format!("invalid mapping table in {}", path.display()))
}
