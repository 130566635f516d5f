//! Raw price quote as delivered by the feed.
//!
//! Quotes arrive as a JSON list of objects carrying at least `currency` and `price`.
//! Other fields (the feed also sends a `date`) are ignored. Duplicate symbols are
//! expected; collapsing them is the job of [`crate::normalizer`].
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SwapError;

/// A single reported (symbol, price) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Currency identifier, e.g. `ETH` or `USDC`.
    #[serde(rename = "currency")]
    pub symbol: String,
    /// Reported price. A missing or `null` price is kept as NaN rather than rejected.
    #[serde(default = "missing_price", deserialize_with = "price_or_nan")]
    pub price: f64,
}

impl Quote {
    /// Creates a quote from a symbol and a price.
    pub fn new(symbol: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
        }
    }

    /// Decodes a feed response body. Anything other than a JSON list of quotes fails.
    pub fn decode_list(body: &[u8]) -> Result<Vec<Quote>, SwapError> {
        let quotes = serde_json::from_slice::<Vec<Quote>>(body)?;
        Ok(quotes)
    }
}

fn missing_price() -> f64 {
    f64::NAN
}

fn price_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_feed_entries_and_ignores_extra_fields() {
        let body = br#"[
            {"currency":"BLUR","date":"2023-08-29T07:10:40.000Z","price":0.20811525423728813},
            {"currency":"bNEO","date":"2023-08-29T07:10:50.000Z","price":7.1282679}
        ]"#;

        let quotes = Quote::decode_list(body).unwrap();

        assert_eq!(
            quotes,
            vec![
                Quote::new("BLUR", 0.20811525423728813),
                Quote::new("bNEO", 7.1282679),
            ]
        );
    }

    #[test]
    fn missing_or_null_price_becomes_nan() {
        let body = br#"[{"currency":"A"},{"currency":"B","price":null}]"#;

        let quotes = Quote::decode_list(body).unwrap();

        assert_eq!(quotes.len(), 2);
        assert!(quotes.iter().all(|q| q.price.is_nan()));
    }

    #[test]
    fn non_list_body_is_a_network_error() {
        let err = Quote::decode_list(br#"{"currency":"A","price":1}"#).unwrap_err();
        assert!(err.is_network());

        let err = Quote::decode_list(b"<html>").unwrap_err();
        assert!(matches!(
            err,
            SwapError::Network(crate::NetworkError::MalformedBody(_))
        ));
    }

    #[test]
    fn empty_list_decodes() {
        assert!(Quote::decode_list(b"[]").unwrap().is_empty());
    }
}
