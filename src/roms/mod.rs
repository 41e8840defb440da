//! Built-in mapping tables for the common HD44780 character generator ROMs.

mod a00;
mod a02;

use std::fmt;

use anyhow::{Result, anyhow};

use crate::table::MappingTable;

/// Controller ROM variants shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomVariant {
    A00,
    A02,
}

impl RomVariant {
    /// All built-in variants, in listing order.
    pub fn all() -> &'static [RomVariant] {
        &[RomVariant::A00, RomVariant::A02]
    }

    pub fn name(self) -> &'static str {
        match self {
            RomVariant::A00 => "a00",
            RomVariant::A02 => "a02",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RomVariant::A00 => "Japanese standard font (ASCII, halfwidth katakana, Greek/symbol block)",
            RomVariant::A02 => "European font (ASCII, ISO 8859-1 upper half)",
        }
    }

    /// Resolve a variant by name (case-insensitive).
    pub fn get(name: &str) -> Result<RomVariant> {
        for rom in Self::all() {
            if rom.name().eq_ignore_ascii_case(name) {
                return Ok(*rom);
            }
        }
        Err(anyhow!("unknown ROM variant '{}'", name))
    }

    /// Build the variant's mapping table.
    pub fn table(self) -> MappingTable {
        let table = match self {
            RomVariant::A00 => a00::table(),
            RomVariant::A02 => a02::table(),
        };
        table.expect("built-in ROM table data is valid")
    }
}

impl fmt::Display for RomVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Code, encode};
    use pretty_assertions::assert_eq;

    #[test]
    fn every_builtin_table_constructs() {
        for rom in RomVariant::all() {
            let table = rom.table();
            assert_eq!(table.name(), rom.name());
            assert_eq!(table.lookahead(), 1);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(RomVariant::get("A00").unwrap(), RomVariant::A00);
        assert_eq!(RomVariant::get("a02").unwrap(), RomVariant::A02);
        assert!(RomVariant::get("a99").is_err());
    }

    #[test]
    fn a00_ascii_and_yen_cell() {
        let t = RomVariant::A00.table();
        assert_eq!(encode(&t, "Az"), vec![Code(0x41), Code(0x7A)]);
        // 0x5C renders as yen; backslash itself has no glyph.
        assert_eq!(encode(&t, "¥"), vec![Code(0x5C)]);
        assert_eq!(encode(&t, "\\"), vec![Code(0x3F)]);
        assert_eq!(encode(&t, "→←"), vec![Code(0x7E), Code(0x7F)]);
    }

    #[test]
    fn a00_halfwidth_katakana_block() {
        let t = RomVariant::A00.table();
        // U+FF71 halfwidth A sits at 0xB1.
        assert_eq!(encode(&t, "\u{FF71}"), vec![Code(0xB1)]);
        assert_eq!(encode(&t, "\u{FF61}"), vec![Code(0xA1)]);
        assert_eq!(encode(&t, "\u{FF9F}"), vec![Code(0xDF)]);
    }

    #[test]
    fn a00_combining_diaeresis_collapses() {
        let t = RomVariant::A00.table();
        assert_eq!(encode(&t, "a\u{0308}"), vec![Code(0xE1)]);
        // The precomposed character reaches the same glyph.
        assert_eq!(encode(&t, "ä"), vec![Code(0xE1)]);
        assert_eq!(encode(&t, "n\u{0303}"), vec![Code(0xEE)]);
    }

    #[test]
    fn a02_latin1_identity() {
        let t = RomVariant::A02.table();
        assert_eq!(encode(&t, "é"), vec![Code(0xE9)]);
        assert_eq!(encode(&t, "ß"), vec![Code(0xDF)]);
        assert_eq!(encode(&t, "~"), vec![Code(0x7E)]);
    }

    #[test]
    fn a02_combining_accents_collapse() {
        let t = RomVariant::A02.table();
        assert_eq!(encode(&t, "e\u{0301}"), vec![Code(0xE9)]);
        assert_eq!(encode(&t, "A\u{030A}"), vec![Code(0xC5)]);
        assert_eq!(encode(&t, "c\u{0327}"), vec![Code(0xE7)]);
        // A bare base letter with a non-rule continuation still encodes as
        // itself.
        assert_eq!(encode(&t, "ex"), vec![Code(0x65), Code(0x78)]);
    }

    #[test]
    fn unmapped_characters_degrade_to_question_mark() {
        for rom in RomVariant::all() {
            let t = rom.table();
            assert_eq!(encode(&t, "\u{4E16}"), vec![Code(0x3F)]);
        }
    }
}
