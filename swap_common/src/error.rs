//! Error types shared between the core and the client.
//!
//! `SwapError` unifies the failure cases of the swap: the price feed could not be
//! loaded, a currency has no usable price, or the form was submitted incomplete.
//! None of them is fatal; each one degrades to a visible error state.
use std::io;

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type shared by the core and the client.
#[derive(Error, Debug)]
pub enum SwapError {
    /// The price feed fetch failed.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// A symbol is absent from the price set or its price is zero or not a number.
    #[error("Token not found: {0}")]
    CurrencyNotFound(String),

    /// Required form fields were missing or invalid at submit time.
    #[error("{0}")]
    Validation(String),

    /// I/O error originating from the terminal front-end.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Ways a single price feed fetch can fail.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The feed answered with a non-success status code.
    #[error("unexpected status: {0}")]
    Status(StatusCode),

    /// The body was not a JSON list of quotes.
    #[error("malformed body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SwapError {
    fn from(err: reqwest::Error) -> Self {
        SwapError::Network(NetworkError::Transport(err))
    }
}

impl From<serde_json::Error> for SwapError {
    fn from(err: serde_json::Error) -> Self {
        SwapError::Network(NetworkError::MalformedBody(err))
    }
}

impl SwapError {
    /// Returns `true` for failures of the price feed fetch.
    pub fn is_network(&self) -> bool {
        matches!(self, SwapError::Network(_))
    }
}
