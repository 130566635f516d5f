//! Collapsing raw quotes into a unique-per-symbol price set.
//!
//! Quotes are processed in input order. The first quote for a symbol is stored
//! verbatim. What happens to later duplicates depends on [`DedupPolicy`]:
//!
//! - `RunningPairwise` (default) replaces the stored price with
//!   `(stored + new) / 2`. With three or more duplicates this is not the arithmetic
//!   mean: `[10, 20, 30]` gives `((10 + 20) / 2 + 30) / 2 = 22.5`, and the result
//!   depends on feed order. This is what the price feed consumers have always seen.
//! - `ArithmeticMean` averages all duplicates uniformly (`[10, 20, 30]` gives `20`).
//!
//! No validation happens here: zero, negative, or NaN prices pass through and are
//! rejected later by the exchange calculator.
use clap::ValueEnum;
use indexmap::IndexMap;
use log::debug;
use strum_macros::{Display, EnumString};

use crate::price_set::PriceSet;
use crate::quote::Quote;

/// How duplicate quotes for the same symbol are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DedupPolicy {
    /// Sequential running average of the stored price and each new duplicate.
    #[default]
    RunningPairwise,
    /// Uniform mean over every quote seen for the symbol.
    ArithmeticMean,
}

/// Builds a [`PriceSet`] from raw quotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceNormalizer {
    policy: DedupPolicy,
}

impl PriceNormalizer {
    /// Creates a normalizer using the given duplicate policy.
    pub fn new(policy: DedupPolicy) -> Self {
        Self { policy }
    }

    /// Policy in effect.
    pub fn policy(&self) -> DedupPolicy {
        self.policy
    }

    /// Deduplicates `quotes` into one price per symbol. Never fails.
    pub fn normalize<I>(&self, quotes: I) -> PriceSet
    where
        I: IntoIterator<Item = Quote>,
    {
        let mut duplicates = 0usize;

        let prices = match self.policy {
            DedupPolicy::RunningPairwise => {
                let mut prices: IndexMap<String, f64> = IndexMap::new();
                for Quote { symbol, price } in quotes {
                    prices
                        .entry(symbol)
                        .and_modify(|stored| {
                            *stored = (*stored + price) / 2.0;
                            duplicates += 1;
                        })
                        .or_insert(price);
                }
                prices
            }
            DedupPolicy::ArithmeticMean => {
                // (sum, count) per symbol
                let mut totals: IndexMap<String, (f64, u32)> = IndexMap::new();
                for Quote { symbol, price } in quotes {
                    totals
                        .entry(symbol)
                        .and_modify(|(sum, count)| {
                            *sum += price;
                            *count += 1;
                            duplicates += 1;
                        })
                        .or_insert((price, 1));
                }
                totals
                    .into_iter()
                    .map(|(symbol, (sum, count))| (symbol, sum / f64::from(count)))
                    .collect()
            }
        };
        let prices = PriceSet::from_map(prices);

        debug!(
            "Normalized quotes into {} symbols ({} duplicates collapsed, policy {})",
            prices.len(),
            duplicates,
            self.policy
        );
        prices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn quotes(raw: &[(&str, f64)]) -> Vec<Quote> {
        raw.iter().map(|(s, p)| Quote::new(*s, *p)).collect()
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let prices = PriceNormalizer::default().normalize(Vec::new());
        assert!(prices.is_empty());
    }

    #[rstest]
    #[case(&[("A", 10.0)], 10.0)]
    #[case(&[("A", 10.0), ("A", 20.0)], 15.0)]
    #[case(&[("A", 10.0), ("A", 20.0), ("A", 30.0)], 22.5)]
    #[case(&[("A", 30.0), ("A", 20.0), ("A", 10.0)], 17.5)]
    fn running_pairwise_average(#[case] raw: &[(&str, f64)], #[case] expected: f64) {
        let prices = PriceNormalizer::default().normalize(quotes(raw));

        assert_eq!(prices.len(), 1);
        assert_eq!(prices.get("A"), Some(expected));
    }

    #[rstest]
    #[case(&[("A", 10.0), ("A", 20.0)], 15.0)]
    #[case(&[("A", 10.0), ("A", 20.0), ("A", 30.0)], 20.0)]
    #[case(&[("A", 30.0), ("A", 20.0), ("A", 10.0)], 20.0)]
    fn arithmetic_mean(#[case] raw: &[(&str, f64)], #[case] expected: f64) {
        let prices = PriceNormalizer::new(DedupPolicy::ArithmeticMean).normalize(quotes(raw));

        assert_eq!(prices.get("A"), Some(expected));
    }

    #[test]
    fn one_entry_per_symbol_in_first_seen_order() {
        let prices = PriceNormalizer::default().normalize(quotes(&[
            ("ETH", 1600.0),
            ("USDC", 1.0),
            ("ETH", 1650.0),
            ("ATOM", 7.0),
            ("USDC", 0.5),
        ]));

        assert_eq!(prices.symbols().collect::<Vec<_>>(), ["ETH", "USDC", "ATOM"]);
        assert_eq!(prices.get("ETH"), Some(1625.0));
        assert_eq!(prices.get("USDC"), Some(0.75));
        assert_eq!(prices.get("ATOM"), Some(7.0));
    }

    #[test]
    fn malformed_prices_pass_through() {
        let prices = PriceNormalizer::default().normalize(quotes(&[
            ("ZERO", 0.0),
            ("NEG", -3.0),
            ("NAN", f64::NAN),
        ]));

        assert_eq!(prices.get("ZERO"), Some(0.0));
        assert_eq!(prices.get("NEG"), Some(-3.0));
        assert!(prices.get("NAN").unwrap().is_nan());
    }

    #[test]
    fn policy_round_trips_through_its_name() {
        assert_eq!(DedupPolicy::RunningPairwise.to_string(), "running-pairwise");
        assert_eq!(
            "Arithmetic-Mean".parse::<DedupPolicy>().unwrap(),
            DedupPolicy::ArithmeticMean
        );
    }
}
