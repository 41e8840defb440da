use std::collections::HashMap;

use crate::codec::Code;
use crate::table::{CombinedRule, MappingTable, TableError};

/// HD44780 character generator ROM A00 (Japanese standard font).
///
/// The low half is ASCII except that 0x5C renders as `¥` and 0x7E/0x7F are
/// arrow glyphs. 0xA1–0xDF hold the halfwidth katakana block in JIS X 0201
/// order; 0xE0–0xFF is a mixed Greek/symbol block, covered here as a
/// curated subset.
pub(crate) fn table() -> Result<MappingTable, TableError> {
    let mut singles = HashMap::new();

    // Printable ASCII up to 0x7D, minus backslash (that cell is yen).
    for ch in ' '..='}' {
        if ch == '\\' {
            continue;
        }
        singles.insert(ch, Code(ch as i16));
    }
    singles.insert('¥', Code(0x5C));
    singles.insert('→', Code(0x7E));
    singles.insert('←', Code(0x7F));

    // Halfwidth katakana: U+FF61..=U+FF9F sits contiguously at 0xA1..=0xDF.
    for (i, ch) in ('\u{FF61}'..='\u{FF9F}').enumerate() {
        singles.insert(ch, Code(0xA1 + i as i16));
    }

    // Greek/symbol block. The handakuten glyph at 0xDF doubles as a degree
    // sign in practice.
    for (ch, code) in [
        ('°', 0xDF),
        ('α', 0xE0),
        ('ä', 0xE1),
        ('β', 0xE2),
        ('ε', 0xE3),
        ('μ', 0xE4),
        ('σ', 0xE5),
        ('ρ', 0xE6),
        ('√', 0xE8),
        ('¢', 0xEC),
        ('ñ', 0xEE),
        ('ö', 0xEF),
        ('θ', 0xF2),
        ('∞', 0xF3),
        ('Ω', 0xF4),
        ('ü', 0xF5),
        ('Σ', 0xF6),
        ('π', 0xF7),
        ('÷', 0xFD),
        ('█', 0xFF),
    ] {
        singles.insert(ch, Code(code));
    }

    // Combining sequences that collapse into a precomposed ROM glyph.
    let mut combined = HashMap::new();
    combined.insert('a', vec![CombinedRule::new("\u{0308}", Code(0xE1))]); // ä
    combined.insert('o', vec![CombinedRule::new("\u{0308}", Code(0xEF))]); // ö
    combined.insert('u', vec![CombinedRule::new("\u{0308}", Code(0xF5))]); // ü
    combined.insert('n', vec![CombinedRule::new("\u{0303}", Code(0xEE))]); // ñ

    MappingTable::new("a00", Code(0x3F), singles, combined)
}
