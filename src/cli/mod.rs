//! Command-line interface wiring for the `lcdc` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! specialized submodules that encapsulate each command family.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod common;
pub mod encode;
pub mod rom;
pub mod table;
pub mod utils;

/// Parsed CLI entrypoint for the `lcdc` binary.
#[derive(Parser, Debug)]
#[command(name = "lcdc", version, about = "Unicode to character-LCD code transcoder")]
pub struct Cli {
    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// High-level command families made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(subcommand)]
    Encode(encode::EncodeCommand),
    #[command(subcommand)]
    Rom(rom::RomCommand),
    #[command(subcommand)]
    Table(table::TableCommand),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode(cmd) => encode::handle(cmd),
        Command::Rom(cmd) => rom::handle(cmd),
        Command::Table(cmd) => table::handle(cmd),
    }
}
