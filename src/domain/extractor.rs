//! Ticker token extraction from free text.
//!
//! The scan looks for runs of uppercase ASCII letters, optionally preceded
//! by a literal `$`, and accepts a run only when it is 1-5 letters long and
//! not touching another ASCII letter or digit on either side. Lowercase runs
//! never match; conventional all-caps ticker spelling is the primary
//! false-positive filter.

use regex::Regex;

use super::symbol::MAX_SYMBOL_LEN;

/// Scanner producing candidate ticker tokens from a fragment of text.
#[derive(Debug, Clone)]
pub struct SymbolExtractor {
    pattern: Regex,
}

impl SymbolExtractor {
    pub fn new() -> Self {
        // Uppercase runs are matched unbounded so an over-long run like
        // STOCKS is rejected whole instead of truncated to STOCK.
        let pattern = Regex::new(r"\$?[A-Z]+").expect("ticker pattern is valid");
        Self { pattern }
    }

    /// Scan `text` for candidate tokens, left to right, non-overlapping.
    ///
    /// Yields the raw matched token, `$` prefix included when present.
    /// Normalization to a [`Symbol`](super::Symbol) is the caller's job.
    pub fn extract<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pattern.find_iter(text).filter_map(move |m| {
            let token = m.as_str();
            let letters = token.strip_prefix('$').unwrap_or(token);
            if letters.is_empty() || letters.len() > MAX_SYMBOL_LEN {
                return None;
            }
            // A leading `$` is itself a valid left boundary; otherwise the
            // neighboring character decides. Only ASCII letters and digits
            // violate a boundary - punctuation does not.
            if !token.starts_with('$') && is_boundary_violation(text, m.start(), true) {
                return None;
            }
            if is_boundary_violation(text, m.end(), false) {
                return None;
            }
            Some(token)
        })
    }
}

impl Default for SymbolExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the byte adjacent to `pos` is an ASCII letter or digit.
fn is_boundary_violation(text: &str, pos: usize, before: bool) -> bool {
    let bytes = text.as_bytes();
    let neighbor = if before {
        pos.checked_sub(1).and_then(|i| bytes.get(i))
    } else {
        bytes.get(pos)
    };
    neighbor.is_some_and(|b| b.is_ascii_alphanumeric())
}
