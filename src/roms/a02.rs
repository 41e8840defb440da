use std::collections::HashMap;

use crate::codec::Code;
use crate::table::{CombinedRule, MappingTable, TableError};

/// HD44780 character generator ROM A02 (European font).
///
/// Full printable ASCII in the low half and the ISO 8859-1 repertoire at
/// 0xA1–0xFF, so the upper half is an identity mapping on codepoints. A
/// handful of picture glyphs live in the 0x10–0x1F region.
pub(crate) fn table() -> Result<MappingTable, TableError> {
    let mut singles = HashMap::new();

    for ch in ' '..='~' {
        singles.insert(ch, Code(ch as i16));
    }
    // Latin-1 upper half: code equals codepoint.
    for ch in '\u{00A1}'..='\u{00FF}' {
        singles.insert(ch, Code(ch as i16));
    }

    // Picture glyphs in the control region (partial coverage).
    for (ch, code) in [('▶', 0x10), ('◀', 0x11), ('“', 0x12), ('”', 0x13)] {
        singles.insert(ch, Code(code));
    }

    // Base letter + combining accent -> the Latin-1 precomposed code.
    // U+0300 grave, U+0301 acute, U+0302 circumflex, U+0303 tilde,
    // U+0308 diaeresis, U+030A ring, U+0327 cedilla.
    let accents: &[(char, char, i16)] = &[
        ('A', '\u{0300}', 0xC0),
        ('A', '\u{0301}', 0xC1),
        ('A', '\u{0302}', 0xC2),
        ('A', '\u{0303}', 0xC3),
        ('A', '\u{0308}', 0xC4),
        ('A', '\u{030A}', 0xC5),
        ('C', '\u{0327}', 0xC7),
        ('E', '\u{0300}', 0xC8),
        ('E', '\u{0301}', 0xC9),
        ('E', '\u{0302}', 0xCA),
        ('E', '\u{0308}', 0xCB),
        ('I', '\u{0300}', 0xCC),
        ('I', '\u{0301}', 0xCD),
        ('I', '\u{0302}', 0xCE),
        ('I', '\u{0308}', 0xCF),
        ('N', '\u{0303}', 0xD1),
        ('O', '\u{0300}', 0xD2),
        ('O', '\u{0301}', 0xD3),
        ('O', '\u{0302}', 0xD4),
        ('O', '\u{0303}', 0xD5),
        ('O', '\u{0308}', 0xD6),
        ('U', '\u{0300}', 0xD9),
        ('U', '\u{0301}', 0xDA),
        ('U', '\u{0302}', 0xDB),
        ('U', '\u{0308}', 0xDC),
        ('Y', '\u{0301}', 0xDD),
        ('a', '\u{0300}', 0xE0),
        ('a', '\u{0301}', 0xE1),
        ('a', '\u{0302}', 0xE2),
        ('a', '\u{0303}', 0xE3),
        ('a', '\u{0308}', 0xE4),
        ('a', '\u{030A}', 0xE5),
        ('c', '\u{0327}', 0xE7),
        ('e', '\u{0300}', 0xE8),
        ('e', '\u{0301}', 0xE9),
        ('e', '\u{0302}', 0xEA),
        ('e', '\u{0308}', 0xEB),
        ('i', '\u{0300}', 0xEC),
        ('i', '\u{0301}', 0xED),
        ('i', '\u{0302}', 0xEE),
        ('i', '\u{0308}', 0xEF),
        ('n', '\u{0303}', 0xF1),
        ('o', '\u{0300}', 0xF2),
        ('o', '\u{0301}', 0xF3),
        ('o', '\u{0302}', 0xF4),
        ('o', '\u{0303}', 0xF5),
        ('o', '\u{0308}', 0xF6),
        ('u', '\u{0300}', 0xF9),
        ('u', '\u{0301}', 0xFA),
        ('u', '\u{0302}', 0xFB),
        ('u', '\u{0308}', 0xFC),
        ('y', '\u{0301}', 0xFD),
        ('y', '\u{0308}', 0xFF),
    ];
    let mut combined: HashMap<char, Vec<CombinedRule>> = HashMap::new();
    for &(base, mark, code) in accents {
        combined
            .entry(base)
            .or_default()
            .push(CombinedRule::new(&mark.to_string(), Code(code)));
    }

    MappingTable::new("a02", Code(0x3F), singles, combined)
}
