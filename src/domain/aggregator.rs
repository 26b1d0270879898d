//! Frequency aggregation of accepted symbols.
//!
//! The aggregator is the stateful heart of the crawl: fragments stream in
//! one at a time, every accepted token bumps a counter, and at the end the
//! table is ranked by count with ties broken by first-seen order.

use std::collections::HashMap;

use super::denylist::SymbolFilter;
use super::extractor::SymbolExtractor;
use super::fragment::TextFragment;
use super::symbol::Symbol;

/// One entry of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub symbol: Symbol,
    pub count: u64,
}

/// Stateful accumulator: extract, normalize, filter, count.
///
/// Counting is commutative and associative across fragments, so ingest
/// order never changes the final table.
pub struct SymbolAggregator {
    extractor: SymbolExtractor,
    filter: SymbolFilter,
    counts: HashMap<Symbol, u64>,
    // Insertion order of first acceptance, for the deterministic tie-break.
    first_seen: Vec<Symbol>,
}

impl SymbolAggregator {
    pub fn new(filter: SymbolFilter) -> Self {
        Self {
            extractor: SymbolExtractor::new(),
            filter,
            counts: HashMap::new(),
            first_seen: Vec::new(),
        }
    }

    /// Clear the frequency table. Called once at run start.
    pub fn reset(&mut self) {
        self.counts.clear();
        self.first_seen.clear();
    }

    /// Scan one fragment and count every accepted symbol occurrence.
    ///
    /// Total over arbitrary input: any string, including empty, is valid
    /// and simply yields zero or more tokens.
    pub fn ingest(&mut self, fragment: &TextFragment) {
        for token in self.extractor.extract(&fragment.text) {
            let Some(symbol) = Symbol::parse(token) else {
                continue;
            };
            if !self.filter.accepts(&symbol) {
                continue;
            }
            match self.counts.entry(symbol) {
                std::collections::hash_map::Entry::Occupied(mut entry) => {
                    *entry.get_mut() += 1;
                }
                std::collections::hash_map::Entry::Vacant(entry) => {
                    self.first_seen.push(entry.key().clone());
                    entry.insert(1);
                }
            }
        }
    }

    /// Number of distinct symbols counted since the last reset.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.len()
    }

    /// Total accepted mentions since the last reset.
    pub fn total_mentions(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Snapshot the table sorted by count descending, ties in first-seen
    /// order, truncated to `limit` entries. Does not mutate state.
    pub fn rank(&self, limit: usize) -> Vec<RankedEntry> {
        let mut entries: Vec<RankedEntry> = self
            .first_seen
            .iter()
            .map(|symbol| RankedEntry {
                symbol: symbol.clone(),
                count: self.counts[symbol],
            })
            .collect();
        // first_seen preserves insertion order and the sort is stable, so
        // equal counts keep their first-seen ordering.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(limit);
        entries
    }
}

impl Default for SymbolAggregator {
    fn default() -> Self {
        Self::new(SymbolFilter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::denylist::Denylist;

    fn aggregator_with_denylist(entries: &[&str]) -> SymbolAggregator {
        SymbolAggregator::new(SymbolFilter::new(Denylist::from_iter(entries.iter())))
    }

    fn ranked(aggregator: &SymbolAggregator, limit: usize) -> Vec<(String, u64)> {
        aggregator
            .rank(limit)
            .into_iter()
            .map(|e| (e.symbol.to_string(), e.count))
            .collect()
    }

    #[test]
    fn test_counts_every_occurrence() {
        let mut aggregator = aggregator_with_denylist(&[]);
        aggregator.ingest(&TextFragment::body("p1", "GME GME $GME"));
        assert_eq!(ranked(&aggregator, 10), vec![("GME".to_string(), 3)]);
    }

    #[test]
    fn test_denylisted_symbols_never_counted() {
        let mut aggregator = aggregator_with_denylist(&["THE"]);
        aggregator.ingest(&TextFragment::body("p1", "THE"));
        aggregator.ingest(&TextFragment::body("p1", "$THE"));
        assert_eq!(aggregator.distinct_symbols(), 0);
        assert!(ranked(&aggregator, 10).is_empty());
    }

    #[test]
    fn test_tie_break_by_first_seen_order() {
        let mut aggregator = aggregator_with_denylist(&["THE"]);
        for text in ["I love $TSLA and TSLA", "AAPL AAPL GME", "THE best stock is GME"] {
            aggregator.ingest(&TextFragment::body("p1", text));
        }
        // I is a single accepted letter seen first with count 1; the three
        // two-count symbols rank above it in first-seen order.
        assert_eq!(
            ranked(&aggregator, 3),
            vec![
                ("TSLA".to_string(), 2),
                ("AAPL".to_string(), 2),
                ("GME".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_order_independence() {
        let fragments = [
            TextFragment::title("p1", "$TSLA to the MOON"),
            TextFragment::body("p2", "AAPL and TSLA"),
            TextFragment::comment("p3", "GME GME AAPL"),
        ];

        let mut forward = aggregator_with_denylist(&["MOON"]);
        for fragment in &fragments {
            forward.ingest(fragment);
        }

        let mut backward = aggregator_with_denylist(&["MOON"]);
        for fragment in fragments.iter().rev() {
            backward.ingest(fragment);
        }

        assert_eq!(forward.distinct_symbols(), backward.distinct_symbols());
        assert_eq!(forward.total_mentions(), backward.total_mentions());
        let mut lhs = ranked(&forward, 10);
        let mut rhs = ranked(&backward, 10);
        lhs.sort();
        rhs.sort();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let mut aggregator = aggregator_with_denylist(&[]);
        aggregator.ingest(&TextFragment::body("p1", "GME AAPL GME"));
        assert_eq!(aggregator.rank(5), aggregator.rank(5));
    }

    #[test]
    fn test_rank_zero_and_oversized_limits() {
        let mut aggregator = aggregator_with_denylist(&[]);
        aggregator.ingest(&TextFragment::body("p1", "GME AAPL"));
        assert!(aggregator.rank(0).is_empty());
        assert_eq!(aggregator.rank(100).len(), 2);
    }

    #[test]
    fn test_rank_never_returns_zero_counts() {
        let mut aggregator = aggregator_with_denylist(&["THE"]);
        aggregator.ingest(&TextFragment::body("p1", "THE GME lowercase"));
        for entry in aggregator.rank(10) {
            assert!(entry.count >= 1);
        }
    }

    #[test]
    fn test_reset_clears_all_state() {
        let mut aggregator = aggregator_with_denylist(&[]);
        aggregator.ingest(&TextFragment::body("p1", "$AAPL"));
        aggregator.reset();
        aggregator.ingest(&TextFragment::body("p2", "$GME"));
        assert_eq!(ranked(&aggregator, 10), vec![("GME".to_string(), 1)]);
    }

    #[test]
    fn test_ingest_accepts_arbitrary_input() {
        let mut aggregator = aggregator_with_denylist(&[]);
        aggregator.ingest(&TextFragment::body("p1", ""));
        aggregator.ingest(&TextFragment::body("p1", "$$$ ### 12345 \u{1F680}"));
        assert_eq!(aggregator.distinct_symbols(), 0);
    }
}
