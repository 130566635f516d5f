//! Cross-currency rate arithmetic over a [`PriceSet`].
//!
//! `rate(from, to) = price(from) / price(to)`, in plain IEEE double precision. No
//! rounding is applied here. A symbol whose price is absent, zero, or NaN is
//! reported as [`SwapError::CurrencyNotFound`] before any division happens.
use crate::error::SwapError;
use crate::price_set::PriceSet;

/// Rate and converted amount produced by a single conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    /// Units of the target currency per unit of the source currency.
    pub rate: f64,
    /// `amount * rate`.
    pub converted_amount: f64,
}

/// Helper type for exchange rate calculations.
pub struct ExchangeRateCalculator;

impl ExchangeRateCalculator {
    /// Multiplicative factor converting one unit of `from` into `to`.
    pub fn rate(from: &str, to: &str, prices: &PriceSet) -> Result<f64, SwapError> {
        let from_price = usable_price(from, prices)?;
        let to_price = usable_price(to, prices)?;
        Ok(from_price / to_price)
    }

    /// Converts `amount` of `from` into `to`.
    pub fn convert(amount: f64, from: &str, to: &str, prices: &PriceSet) -> Result<f64, SwapError> {
        Ok(Self::conversion(amount, from, to, prices)?.converted_amount)
    }

    /// Like [`Self::convert`], but also returns the rate that was applied.
    pub fn conversion(
        amount: f64,
        from: &str,
        to: &str,
        prices: &PriceSet,
    ) -> Result<ConversionResult, SwapError> {
        let rate = Self::rate(from, to, prices)?;
        Ok(ConversionResult {
            rate,
            converted_amount: amount * rate,
        })
    }
}

fn usable_price(symbol: &str, prices: &PriceSet) -> Result<f64, SwapError> {
    match prices.get(symbol) {
        Some(price) if price != 0.0 && !price.is_nan() => Ok(price),
        _ => Err(SwapError::CurrencyNotFound(symbol.to_string())),
    }
}
