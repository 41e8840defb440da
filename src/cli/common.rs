//! Shared clap helper types for CLI commands.

use clap::ValueEnum;
use lcdcodec::{CodeStyle, RomVariant};

/// Built-in ROM variants selectable from the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum RomArg {
    #[value(name = "a00")]
    A00,
    #[value(name = "a02")]
    A02,
}

impl From<RomArg> for RomVariant {
    fn from(value: RomArg) -> RomVariant {
        match value {
            RomArg::A00 => RomVariant::A00,
            RomArg::A02 => RomVariant::A02,
        }
    }
}

/// Output formats for an encoded code stream.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FormatArg {
    Dec,
    Hex,
    Json,
}

impl FormatArg {
    /// The textual rendering style, if this format is textual rather than
    /// JSON.
    pub fn style(self) -> Option<CodeStyle> {
        match self {
            FormatArg::Dec => Some(CodeStyle::Dec),
            FormatArg::Hex => Some(CodeStyle::Hex),
            FormatArg::Json => None,
        }
    }
}
