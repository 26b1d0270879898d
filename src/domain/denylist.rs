//! False-positive filtering for candidate symbols.
//!
//! Plenty of ordinary text matches the ticker pattern: short words typed in
//! caps, acronyms, trading slang. The denylist is the hard filter - a symbol
//! on it is never counted. The [`SymbolFilter`] wraps the denylist together
//! with the softer acceptance policy for unknown symbols.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use super::symbol::{Symbol, MAX_SYMBOL_LEN};

/// Tokens that match the ticker pattern but are noise in practice: common
/// English words, web scheme fragments, finance acronyms and forum slang.
/// Entries longer than five letters can never match the pattern and are
/// not listed.
const BUILTIN_DENYLIST: &[&str] = &[
    // Common English words
    "A", "I", "AM", "AN", "AS", "AT", "BE", "BY", "CA", "DO", "EU", "GO", "HE", "IF", "IN", "IS",
    "IT", "LA", "ME", "MY", "NO", "NY", "OF", "ON", "OR", "PM", "SO", "TO", "UK", "UP", "US",
    "VS", "WE", "ALL", "AND", "ARE", "BOY", "BUT", "CAN", "DAY", "DID", "FOR", "GET", "HAS",
    "HER", "HIM", "HIS", "HOW", "ILL", "ITS", "LET", "NEW", "NOT", "NOW", "OLD", "ONE", "OUR",
    "OUT", "OWN", "SAY", "SEE", "SHE", "THE", "TOO", "TWO", "USD", "USE", "WAS", "WAY", "WHO",
    "WHY",
    "YOU", "ALSO", "BACK", "BEEN", "CAME", "COME", "EACH", "FROM", "GOOD", "HAVE", "INTO",
    "JUST", "KNOW", "LAST", "LIFE", "LIKE", "MADE", "MAKE", "MANY", "MOST", "MUCH", "NONE",
    "NULL", "ONLY", "OVER", "SAID", "SOME", "THAN", "THAT", "THEY", "THIS", "TIME", "TRUE",
    "USED", "VERY", "WANT", "WELL", "WERE", "WHAT", "WILL", "WITH", "WORK", "YEAR", "AFTER",
    "COULD", "FALSE", "FIRST", "RIGHT", "THEIR", "THINK", "THOSE", "WHERE", "WHICH", "WOULD",
    "YEARS",
    // Web fragments
    "HTTP", "HTTPS", "WWW", "COM", "ORG", "NET", "GOV", "EDU",
    // Finance and business acronyms that are not tickers
    "CEO", "CFO", "CTO", "IPO", "SEC", "FDA", "FBI", "IRS", "LLC", "INC", "ETF", "ATH", "ATL",
    "YTD", "EOD", "AH", "DD", "TA", "FA",
    // Forum slang
    "YOLO", "HODL", "FOMO", "FUD", "WSB", "LOL", "OMG", "WTF", "TBH", "IMO", "IMHO", "TLDR",
    "ELI", "AMA", "TIL", "PSA", "EDIT", "BULL", "BEAR", "MOON", "DIP", "RIP", "BUY", "SELL",
    "HOLD",
];

/// Fixed set of symbol-shaped strings excluded from counting.
///
/// Matching is exact string equality against uppercase entries; a `Symbol`
/// is uppercase by construction so no folding happens at lookup time.
#[derive(Debug, Clone)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Denylist {
    /// The denylist shipped with the crawler.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_DENYLIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            entries: HashSet::new(),
        }
    }

    /// Load a denylist from a file: one token per line, `#` starts a
    /// comment, blank lines ignored. Entries are upcased on the way in.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut denylist = Self::empty();
        denylist.extend(content.lines());
        Ok(denylist)
    }

    /// Add entries, normalizing to uppercase and skipping blanks/comments.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let token = entry.as_ref().trim();
            if token.is_empty() || token.starts_with('#') {
                continue;
            }
            self.entries.insert(token.to_ascii_uppercase());
        }
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.entries.contains(symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Denylist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut denylist = Self::empty();
        denylist.extend(iter);
        denylist
    }
}

/// Acceptance policy applied to a normalized symbol before counting.
///
/// The denylist always wins. Symbols on the known-symbols list are accepted
/// outright; anything else must be at least `min_unknown_len` letters long.
/// With an empty known list and `min_unknown_len` of 1 (the default), the
/// denylist is the only filter.
#[derive(Debug, Clone)]
pub struct SymbolFilter {
    denylist: Denylist,
    known_symbols: HashSet<String>,
    min_unknown_len: usize,
}

impl SymbolFilter {
    pub fn new(denylist: Denylist) -> Self {
        Self {
            denylist,
            known_symbols: HashSet::new(),
            min_unknown_len: 1,
        }
    }

    pub fn with_known_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.known_symbols = symbols
            .into_iter()
            .map(|s| s.as_ref().trim().to_ascii_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    /// Minimum length for symbols outside the known-symbols list.
    /// Clamped to the 1..=MAX_SYMBOL_LEN range a symbol can actually have.
    pub fn with_min_unknown_len(mut self, len: usize) -> Self {
        self.min_unknown_len = len.clamp(1, MAX_SYMBOL_LEN);
        self
    }

    pub fn accepts(&self, symbol: &Symbol) -> bool {
        if self.denylist.contains(symbol) {
            return false;
        }
        if self.known_symbols.contains(symbol.as_str()) {
            return true;
        }
        symbol.len() >= self.min_unknown_len
    }
}

impl Default for SymbolFilter {
    fn default() -> Self {
        Self::new(Denylist::builtin())
    }
}
