use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::Code;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("declared lookahead {declared} understates the longest rule continuation ({actual})")]
    LookaheadUnderstated { declared: usize, actual: usize },
    #[error("combined rule for '{0}' has an empty continuation")]
    EmptyContinuation(char),
    #[error("negative code {0} in table; negative codes are reserved control sentinels")]
    ReservedCode(i16),
    #[error("table key '{0}' must be exactly one character")]
    BadKey(String),
}

/// One multi-character substitution rule: when the leading character is
/// followed by `follows`, the whole run collapses into a single `code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedRule {
    follows: Vec<char>,
    code: Code,
}

impl CombinedRule {
    pub fn new(follows: &str, code: Code) -> Self {
        Self {
            follows: follows.chars().collect(),
            code,
        }
    }

    pub fn follows(&self) -> String {
        self.follows.iter().collect()
    }

    pub fn code(&self) -> Code {
        self.code
    }

    fn len(&self) -> usize {
        self.follows.len()
    }
}

/// Per-controller-variant mapping configuration.
///
/// The table is immutable once constructed and `encode` only reads it, so a
/// single table may be shared freely across threads.
///
/// Rule order inside each leader's list is the declared priority order:
/// candidates are tried front to back and the first match wins, even when a
/// later candidate is longer.
#[derive(Debug, Clone)]
pub struct MappingTable {
    name: String,
    replacement: Code,
    singles: HashMap<char, Code>,
    combined: HashMap<char, Vec<CombinedRule>>,
    lookahead: usize,
}

impl MappingTable {
    /// Build a table, computing the lookahead bound from the rules
    /// themselves. This is the preferred constructor: a table built here
    /// can never understate its own lookahead.
    pub fn new<S: Into<String>>(
        name: S,
        replacement: Code,
        singles: HashMap<char, Code>,
        combined: HashMap<char, Vec<CombinedRule>>,
    ) -> Result<Self, TableError> {
        validate(replacement, &singles, &combined)?;
        let lookahead = combined
            .values()
            .flatten()
            .map(CombinedRule::len)
            .max()
            .unwrap_or(0);
        Ok(Self {
            name: name.into(),
            replacement,
            singles,
            combined,
            lookahead,
        })
    }

    /// Build a table with an externally declared lookahead bound.
    ///
    /// An understated bound would make the engine silently skip longer
    /// matches, so construction is rejected instead. A bound larger than
    /// the true maximum is accepted; the extra window is harmless.
    pub fn with_declared_lookahead<S: Into<String>>(
        name: S,
        replacement: Code,
        singles: HashMap<char, Code>,
        combined: HashMap<char, Vec<CombinedRule>>,
        declared: usize,
    ) -> Result<Self, TableError> {
        let mut table = Self::new(name, replacement, singles, combined)?;
        if declared < table.lookahead {
            return Err(TableError::LookaheadUnderstated {
                declared,
                actual: table.lookahead,
            });
        }
        table.lookahead = declared;
        Ok(table)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fallback code emitted for characters absent from every map.
    pub fn replacement(&self) -> Code {
        self.replacement
    }

    /// Number of characters past the cursor the engine must buffer.
    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    pub fn glyph_count(&self) -> usize {
        self.singles.len()
    }

    pub fn combined_rule_count(&self) -> usize {
        self.combined.values().map(Vec::len).sum()
    }

    /// Try `ch`'s combined rules against the lookahead window, in declared
    /// order. Returns the mapped code and the number of lookahead
    /// characters the first matching rule consumes.
    pub(crate) fn match_combined(&self, ch: char, lookahead: &[char]) -> Option<(Code, usize)> {
        let rules = self.combined.get(&ch)?;
        for rule in rules {
            if lookahead.starts_with(&rule.follows) {
                return Some((rule.code, rule.len()));
            }
        }
        None
    }

    /// Resolve a character through the single-character map, degrading to
    /// the replacement code when unmapped.
    pub(crate) fn resolve_single(&self, ch: char) -> Code {
        self.singles.get(&ch).copied().unwrap_or(self.replacement)
    }
}

fn validate(
    replacement: Code,
    singles: &HashMap<char, Code>,
    combined: &HashMap<char, Vec<CombinedRule>>,
) -> Result<(), TableError> {
    if replacement.0 < 0 {
        return Err(TableError::ReservedCode(replacement.0));
    }
    for &code in singles.values() {
        if code.0 < 0 {
            return Err(TableError::ReservedCode(code.0));
        }
    }
    for (&leader, rules) in combined {
        for rule in rules {
            if rule.follows.is_empty() {
                return Err(TableError::EmptyContinuation(leader));
            }
            if rule.code.0 < 0 {
                return Err(TableError::ReservedCode(rule.code.0));
            }
        }
    }
    Ok(())
}

/// Raw, serde-friendly form of a mapping table as stored in JSON files.
///
/// Keys are one-character strings; each combined rule is a
/// `[continuation, code]` pair, and list order is priority order. The
/// optional `lookahead` field declares an external bound that is validated
/// against the rules on conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub replacement: i16,
    #[serde(default)]
    pub singles: HashMap<String, i16>,
    #[serde(default)]
    pub combined: HashMap<String, Vec<(String, i16)>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookahead: Option<usize>,
}

impl TryFrom<TableSpec> for MappingTable {
    type Error = TableError;

    fn try_from(spec: TableSpec) -> Result<Self, TableError> {
        let mut singles = HashMap::new();
        for (key, code) in spec.singles {
            singles.insert(single_char_key(&key)?, Code(code));
        }
        let mut combined = HashMap::new();
        for (key, rules) in spec.combined {
            let leader = single_char_key(&key)?;
            let rules = rules
                .into_iter()
                .map(|(follows, code)| CombinedRule::new(&follows, Code(code)))
                .collect();
            combined.insert(leader, rules);
        }
        let name = spec.name.unwrap_or_else(|| "custom".to_string());
        match spec.lookahead {
            Some(declared) => MappingTable::with_declared_lookahead(
                name,
                Code(spec.replacement),
                singles,
                combined,
                declared,
            ),
            None => MappingTable::new(name, Code(spec.replacement), singles, combined),
        }
    }
}

fn single_char_key(key: &str) -> Result<char, TableError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(TableError::BadKey(key.to_string())),
    }
}
