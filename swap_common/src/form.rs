//! Swap form state machine.
//!
//! The form owns its [`FormState`] exclusively. It never fetches anything: the
//! price set is lent to [`SwapForm::submit`] by whoever holds the session.
//!
//! Phases:
//! - `Editing` — initial phase. Any field edit clears the error and returns here.
//! - `Submitted` — reached by a successful submit; left on the next edit.
//!
//! A submit with a missing field sets the validation message without touching the
//! calculator. A submit that hits an unknown currency sets the error message and
//! keeps the previous `to_amount`.
use log::{debug, warn};
use strum_macros::{Display, EnumString};

use crate::error::SwapError;
use crate::exchange::{ConversionResult, ExchangeRateCalculator};
use crate::net::VALIDATION_MESSAGE;
use crate::price_set::PriceSet;

/// Lifecycle phase of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Fields are being edited.
    #[default]
    Editing,
    /// The last submit succeeded and nothing was edited since.
    Submitted,
}

/// Which currency selector an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FormSide {
    /// Source currency.
    From,
    /// Target currency.
    To,
}

/// Values exposed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Selected source currency.
    pub from_symbol: Option<String>,
    /// Selected target currency.
    pub to_symbol: Option<String>,
    /// Amount of the source currency to convert.
    pub from_amount: Option<f64>,
    /// Result of the last successful conversion, `0` before the first one.
    pub to_amount: f64,
    /// Message to display, if the last submit failed.
    pub error_message: Option<String>,
}

/// Controller for the two-field conversion form.
#[derive(Debug, Default)]
pub struct SwapForm {
    state: FormState,
    phase: FormPhase,
}

impl SwapForm {
    /// Creates an empty form in the `Editing` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Sets the currency on `side`. An empty or blank symbol clears it.
    pub fn set_symbol(&mut self, side: FormSide, symbol: &str) {
        let symbol = symbol.trim();
        let value = (!symbol.is_empty()).then(|| symbol.to_string());
        *self.slot(side) = value;
        self.edited();
    }

    /// Sets the source currency.
    pub fn set_from_symbol(&mut self, symbol: &str) {
        self.set_symbol(FormSide::From, symbol);
    }

    /// Sets the target currency.
    pub fn set_to_symbol(&mut self, symbol: &str) {
        self.set_symbol(FormSide::To, symbol);
    }

    /// Picker selection: choosing the symbol already selected on `side` deselects it.
    pub fn pick_symbol(&mut self, side: FormSide, symbol: &str) {
        let symbol = symbol.trim();
        if self.slot(side).as_deref() == Some(symbol) {
            self.set_symbol(side, "");
        } else {
            self.set_symbol(side, symbol);
        }
    }

    /// Sets the source amount directly.
    pub fn set_from_amount(&mut self, amount: Option<f64>) {
        self.state.from_amount = amount;
        self.edited();
    }

    /// Sets the source amount from user-typed text.
    ///
    /// Blank, unparseable, zero, or NaN input leaves the amount empty. Other values
    /// are stored as typed and checked at submit time.
    pub fn set_from_amount_text(&mut self, text: &str) {
        let amount = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| *v != 0.0 && !v.is_nan());
        self.set_from_amount(amount);
    }

    /// Validates the fields and converts using `prices`.
    ///
    /// Returns the conversion on success. Failures never escape the form: they are
    /// turned into `error_message` and `None` is returned.
    pub fn submit(&mut self, prices: &PriceSet) -> Option<ConversionResult> {
        let outcome = self.validated().and_then(|(from, to, amount)| {
            ExchangeRateCalculator::conversion(amount, from, to, prices)
        });

        match outcome {
            Ok(result) => {
                debug!(
                    "Converted {:?} {:?} -> {:?} at rate {}",
                    self.state.from_amount, self.state.from_symbol, self.state.to_symbol, result.rate
                );
                self.state.to_amount = result.converted_amount;
                self.state.error_message = None;
                self.phase = FormPhase::Submitted;
                Some(result)
            }
            Err(e) => {
                if !matches!(e, SwapError::Validation(_)) {
                    warn!("Conversion failed: {}", e);
                }
                self.state.error_message = Some(e.to_string());
                self.phase = FormPhase::Editing;
                None
            }
        }
    }

    fn validated(&self) -> Result<(&str, &str, f64), SwapError> {
        let from = self.state.from_symbol.as_deref();
        let to = self.state.to_symbol.as_deref();
        // infinite amounts are rejected even though they parse
        let amount = self.state.from_amount.filter(|v| v.is_finite() && *v > 0.0);

        match (from, to, amount) {
            (Some(from), Some(to), Some(amount)) => Ok((from, to, amount)),
            _ => Err(SwapError::Validation(VALIDATION_MESSAGE.to_string())),
        }
    }

    fn slot(&mut self, side: FormSide) -> &mut Option<String> {
        match side {
            FormSide::From => &mut self.state.from_symbol,
            FormSide::To => &mut self.state.to_symbol,
        }
    }

    fn edited(&mut self) {
        self.state.error_message = None;
        self.phase = FormPhase::Editing;
    }
}
