//! Encoding commands (`lcdc encode ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use lcdcodec::{RomVariant, encode, render_codes};

use crate::cli::common::{FormatArg, RomArg};
use crate::cli::utils::{load_table, read_text_arg};

/// Encode subcommands.
#[derive(Subcommand, Debug)]
pub enum EncodeCommand {
    /// Encode text into a controller code stream.
    Text(EncodeTextArgs),
}

/// Arguments for `lcdc encode text`.
#[derive(Args, Debug)]
pub struct EncodeTextArgs {
    /// Input text (falls back to stdin if omitted).
    #[arg(long)]
    pub text: Option<String>,
    /// Read input from file (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Built-in ROM variant to encode with.
    #[arg(long, value_enum, default_value = "a00", conflicts_with = "table")]
    pub rom: RomArg,
    /// Custom mapping table JSON file (instead of --rom).
    #[arg(long)]
    pub table: Option<PathBuf>,
    /// Output format for the code stream.
    #[arg(long, value_enum, default_value = "dec")]
    pub format: FormatArg,
}

/// Execute an encode command.
pub fn handle(command: EncodeCommand) -> Result<()> {
    match command {
        EncodeCommand::Text(args) => text(args),
    }
}

fn text(args: EncodeTextArgs) -> Result<()> {
    let input = read_text_arg(args.text.clone(), args.from.clone())?;
    let table = match &args.table {
        Some(path) => load_table(path)?,
        None => RomVariant::from(args.rom).table(),
    };
    let codes = encode(&table, &input);
    match args.format.style() {
        Some(style) => println!("{}", render_codes(&codes, style)),
        None => println!("{}", serde_json::to_string(&codes)?),
    }
    Ok(())
}
