//! Core library for transcoding Unicode text into character-LCD controller
//! codes.

mod codec;
mod roms;
mod table;

pub use codec::{Code, CodeStyle, encode, render_codes};
pub use roms::RomVariant;
pub use table::{CombinedRule, MappingTable, TableError, TableSpec};

/// Encode text with one of the built-in ROM variant tables.
pub fn encode_with_rom(rom: RomVariant, text: &str) -> Vec<Code> {
    codec::encode(&rom.table(), text)
}
