//! Deduplicated price mapping used for all rate math.
//!
//! A `PriceSet` holds exactly one price per symbol. It can only be built by the
//! [`crate::normalizer`], which guarantees that invariant. Iteration follows the
//! order in which each symbol was first seen in the feed.
use indexmap::IndexMap;

/// One-entry-per-symbol price mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSet {
    prices: IndexMap<String, f64>,
}

impl PriceSet {
    pub(crate) fn from_map(prices: IndexMap<String, f64>) -> Self {
        Self { prices }
    }

    /// Price stored for `symbol`, if the symbol is known.
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.prices.get(symbol).copied()
    }

    /// Returns `true` if `symbol` has an entry.
    pub fn contains(&self, symbol: &str) -> bool {
        self.prices.contains_key(symbol)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns `true` if no symbol is known.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterates `(symbol, price)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.prices.iter().map(|(s, p)| (s.as_str(), *p))
    }

    /// Symbols in first-seen order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.prices.keys().map(String::as_str)
    }
}
