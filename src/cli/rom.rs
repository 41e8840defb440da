//! ROM variant discovery commands (`lcdc rom ...`).

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lcdcodec::RomVariant;

/// ROM subcommands.
#[derive(Subcommand, Debug)]
pub enum RomCommand {
    /// List all built-in ROM variants.
    List,
    /// Show table statistics for a ROM variant.
    Show(RomShowArgs),
}

/// Arguments for `lcdc rom show`.
#[derive(Args, Debug)]
pub struct RomShowArgs {
    /// ROM variant name to display.
    pub name: String,
}

/// Execute a ROM command.
pub fn handle(command: RomCommand) -> Result<()> {
    match command {
        RomCommand::List => list(),
        RomCommand::Show(args) => show(args),
    }
}

fn list() -> Result<()> {
    println!("Available ROM variants:");
    for rom in RomVariant::all() {
        println!("  - {}: {}", rom.name(), rom.description());
    }
    Ok(())
}

fn show(args: RomShowArgs) -> Result<()> {
    let rom = RomVariant::get(&args.name)
        .with_context(|| format!("ROM variant '{}' not found", args.name))?;
    let table = rom.table();
    println!("ROM: {}", rom.name());
    println!("{}", rom.description());
    println!("  glyph mappings: {}", table.glyph_count());
    println!("  combined rules: {}", table.combined_rule_count());
    println!("  lookahead:      {}", table.lookahead());
    println!("  replacement:    {}", table.replacement());
    Ok(())
}
