//!
//! Core of the currency swap: price ingestion, normalization, and conversion.
//!
//! This crate aggregates:
//! - `error` — unified error type `SwapError` used across the workspace.
//! - `result` — handy `Result<T, SwapError>` alias.
//! - `quote` — raw price quotes as delivered by the feed.
//! - `price_set` — the deduplicated, one-entry-per-symbol price mapping.
//! - `normalizer` — collapsing duplicate quotes into a `PriceSet`.
//! - `exchange` — cross-currency rate and amount arithmetic.
//! - `form` — the swap form state machine.
//! - `feed` — HTTP price feed client.
//! - `session` — session-scoped holder of the fetched prices and their loading state.
//! - `net` — endpoint and user-facing message constants.
#![warn(missing_docs)]
pub mod error;
pub mod exchange;
pub mod feed;
pub mod form;
pub mod net;
pub mod normalizer;
pub mod price_set;
pub mod quote;
pub mod result;
pub mod session;

pub use error::{NetworkError, SwapError};
pub use exchange::{ConversionResult, ExchangeRateCalculator};
pub use feed::{FeedConfig, HttpPriceFeed, PriceFeed};
pub use form::{FormPhase, FormSide, FormState, SwapForm};
pub use normalizer::{DedupPolicy, PriceNormalizer};
pub use price_set::PriceSet;
pub use quote::Quote;
pub use result::Result;
pub use session::{FeedStatus, FetchTicket, PriceSession};
