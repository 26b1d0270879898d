//! Normalized ticker symbols.

use std::fmt;

/// Maximum ticker length accepted anywhere in the pipeline.
pub const MAX_SYMBOL_LEN: usize = 5;

/// A normalized stock ticker: 1-5 uppercase ASCII letters, leading `$`
/// stripped.
///
/// Construction goes through [`Symbol::parse`], so a `Symbol` in hand is
/// always well-formed and can be used directly as an aggregation key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Normalize a raw candidate token into a `Symbol`.
    ///
    /// Strips a single leading `$` and rejects anything that is not 1-5
    /// uppercase ASCII letters. Lowercase input is rejected, not upcased.
    pub fn parse(raw: &str) -> Option<Symbol> {
        let letters = raw.strip_prefix('$').unwrap_or(raw);
        if letters.is_empty() || letters.len() > MAX_SYMBOL_LEN {
            return None;
        }
        if !letters.bytes().all(|b| b.is_ascii_uppercase()) {
            return None;
        }
        Some(Symbol(letters.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
