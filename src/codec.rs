use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::table::MappingTable;

/// One item in the output stream of the transcoder.
///
/// Non-negative values are glyph indices understood by the display
/// controller. The two negative sentinels stand for cursor-control actions
/// and are passed through for the transport layer to interpret; they never
/// appear inside mapping tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(pub i16);

impl Code {
    /// Return the cursor to the start of the current line.
    pub const CR: Code = Code(-1);
    /// Advance the cursor to the next line.
    pub const LF: Code = Code(-2);

    /// The glyph index, if this code addresses a glyph rather than a
    /// control action.
    pub fn glyph(self) -> Option<u8> {
        u8::try_from(self.0).ok()
    }

    pub fn is_control(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Code::CR => write!(f, "CR"),
            Code::LF => write!(f, "LF"),
            Code(v) => write!(f, "{}", v),
        }
    }
}

/// Encode `text` into a controller code stream using `table`.
///
/// Single left-to-right pass over the characters. At each position the
/// current character is checked for `\r`/`\n` first, then against the
/// table's multi-character rules (declared order, first match wins), then
/// against the single-character map, degrading to the table's replacement
/// code. The operation is total: it cannot fail, and the output never has
/// more items than the input has characters.
pub fn encode(table: &MappingTable, text: &str) -> Vec<Code> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut cursor = 0usize;
    while cursor < chars.len() {
        let ch = chars[cursor];

        // Newlines are recognised before any table lookup; they can never
        // start a multi-character match.
        if ch == '\r' {
            out.push(Code::CR);
            cursor += 1;
            continue;
        }
        if ch == '\n' {
            out.push(Code::LF);
            cursor += 1;
            continue;
        }

        // The window is clamped to the end of input rather than padded, so
        // a continuation that would run past the end has nothing to match.
        let window_end = chars.len().min(cursor + 1 + table.lookahead());
        if let Some((code, consumed)) = table.match_combined(ch, &chars[cursor + 1..window_end]) {
            out.push(code);
            cursor += 1 + consumed;
            continue;
        }

        out.push(table.resolve_single(ch));
        cursor += 1;
    }
    out
}

/// Textual renderings of a code stream.
#[derive(Debug, Clone, Copy)]
pub enum CodeStyle {
    /// Decimal glyph indices
    Dec,
    /// Zero-padded hexadecimal glyph indices
    Hex,
}

impl fmt::Display for CodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeStyle::Dec => write!(f, "dec"),
            CodeStyle::Hex => write!(f, "hex"),
        }
    }
}

/// Render a code stream for terminals, one token per code. Control
/// sentinels render as `CR`/`LF` in either style.
pub fn render_codes(codes: &[Code], style: CodeStyle) -> String {
    let mut out = String::new();
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match (*code, style) {
            (Code::CR, _) => out.push_str("CR"),
            (Code::LF, _) => out.push_str("LF"),
            (Code(v), CodeStyle::Dec) => {
                write!(&mut out, "{}", v).ok();
            }
            (Code(v), CodeStyle::Hex) => {
                write!(&mut out, "0x{:02X}", v).ok();
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CombinedRule;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn table(
        replacement: i16,
        singles: &[(char, i16)],
        combined: &[(char, &[(&str, i16)])],
    ) -> MappingTable {
        let singles = singles
            .iter()
            .map(|&(ch, code)| (ch, Code(code)))
            .collect();
        let mut rules: HashMap<char, Vec<CombinedRule>> = HashMap::new();
        for &(leader, list) in combined {
            rules.insert(
                leader,
                list.iter()
                    .map(|&(follows, code)| CombinedRule::new(follows, Code(code)))
                    .collect(),
            );
        }
        MappingTable::new("test", Code(replacement), singles, rules).unwrap()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let t = table(0, &[('a', 1)], &[]);
        assert_eq!(encode(&t, ""), Vec::<Code>::new());
    }

    #[test]
    fn combined_rule_consumes_its_continuation() {
        let t = table(0, &[('a', 1), ('b', 2)], &[('a', &[("b", 99)])]);
        assert_eq!(encode(&t, "ab"), vec![Code(99)]);
    }

    #[test]
    fn unmapped_character_degrades_to_replacement() {
        let t = table(0, &[('a', 1), ('b', 2)], &[('a', &[("b", 99)])]);
        assert_eq!(encode(&t, "ac"), vec![Code(1), Code(0)]);
    }

    #[test]
    fn declared_rule_order_beats_length() {
        // "a" listed before "ab": the shorter rule wins, leaving the 'b'
        // to be encoded on its own.
        let t = table(
            0,
            &[('x', 5), ('a', 1), ('b', 2)],
            &[('x', &[("a", 10), ("ab", 11)])],
        );
        assert_eq!(encode(&t, "xab"), vec![Code(10), Code(2)]);
    }

    #[test]
    fn failed_combined_scan_falls_back_to_single_map() {
        let t = table(0, &[('a', 1), ('q', 3)], &[('a', &[("zz", 99)])]);
        assert_eq!(encode(&t, "aq"), vec![Code(1), Code(3)]);
    }

    #[test]
    fn failed_combined_scan_without_single_entry_hits_replacement() {
        let t = table(7, &[], &[('a', &[("zz", 99)])]);
        assert_eq!(encode(&t, "a"), vec![Code(7)]);
    }

    #[test]
    fn crlf_passes_through_as_sentinels() {
        let t = table(0, &[], &[]);
        assert_eq!(encode(&t, "\r\n"), vec![Code::CR, Code::LF]);
    }

    #[test]
    fn carriage_return_never_starts_a_combined_match() {
        // Even with a rule keyed on '\r', the sentinel check runs first.
        let t = table(0, &[('x', 5)], &[('\r', &[("x", 77)])]);
        assert_eq!(encode(&t, "\rx"), vec![Code::CR, Code(5)]);
    }

    #[test]
    fn newline_compares_as_ordinary_character_inside_lookahead() {
        let t = table(0, &[('a', 1)], &[('a', &[("\n", 42)])]);
        assert_eq!(encode(&t, "a\n"), vec![Code(42)]);
    }

    #[test]
    fn continuation_past_end_of_input_never_matches() {
        let t = table(0, &[('a', 1), ('b', 2)], &[('a', &[("bc", 9)])]);
        assert_eq!(encode(&t, "ab"), vec![Code(1), Code(2)]);
    }

    #[test]
    fn long_continuations_are_matched_whole() {
        let t = table(0, &[('e', 4)], &[('e', &[("llo", 50)])]);
        assert_eq!(encode(&t, "elloe"), vec![Code(50), Code(4)]);
    }

    #[test]
    fn output_is_never_longer_than_input() {
        let t = table(0, &[('a', 1)], &[('a', &[("a", 8)])]);
        for input in ["", "a", "aa", "aaa", "zzzz", "\r\n\r\n"] {
            let codes = encode(&t, input);
            assert!(codes.len() <= input.chars().count());
        }
    }

    #[test]
    fn encode_is_a_pure_function() {
        let t = table(0, &[('a', 1), ('b', 2)], &[('a', &[("b", 99)])]);
        let input = "abba\r\nc";
        assert_eq!(encode(&t, input), encode(&t, input));
    }

    #[test]
    fn render_styles() {
        let codes = vec![Code(72), Code::CR, Code::LF, Code(255)];
        assert_eq!(render_codes(&codes, CodeStyle::Dec), "72 CR LF 255");
        assert_eq!(render_codes(&codes, CodeStyle::Hex), "0x48 CR LF 0xFF");
    }

    #[test]
    fn glyph_extraction() {
        assert_eq!(Code(65).glyph(), Some(65));
        assert_eq!(Code::CR.glyph(), None);
        assert!(Code::LF.is_control());
        assert!(!Code(0).is_control());
    }
}
