//! Custom table validation commands (`lcdc table ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::utils::load_table;

/// Table subcommands.
#[derive(Subcommand, Debug)]
pub enum TableCommand {
    /// Validate a mapping table JSON file.
    Check(TableCheckArgs),
}

/// Arguments for `lcdc table check`.
#[derive(Args, Debug)]
pub struct TableCheckArgs {
    /// Path to the table spec file.
    pub file: PathBuf,
}

/// Execute a table command.
pub fn handle(command: TableCommand) -> Result<()> {
    match command {
        TableCommand::Check(args) => check(args),
    }
}

fn check(args: TableCheckArgs) -> Result<()> {
    let table = load_table(&args.file)?;
    println!("Table '{}' is valid", table.name());
    println!("  glyph mappings: {}", table.glyph_count());
    println!("  combined rules: {}", table.combined_rule_count());
    println!("  lookahead:      {}", table.lookahead());
    println!("  replacement:    {}", table.replacement());
    Ok(())
}
