//! Fetching the raw quote list from the remote price feed.
//!
//! A fetch is a single attempt: no retries and no caching happen at this layer.
//! Transport failures, non-2xx answers, and bodies that are not a JSON list of
//! quotes all surface as [`SwapError::Network`].
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use crate::error::{NetworkError, SwapError};
use crate::net::DEFAULT_FEED_URL;
use crate::quote::Quote;

/// Source of raw price quotes.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Performs one fetch of the full quote list.
    async fn fetch(&self) -> Result<Vec<Quote>, SwapError>;
}

/// Where the feed lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Endpoint answering `GET` with a JSON array of quotes.
    pub url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

/// HTTP implementation of [`PriceFeed`].
pub struct HttpPriceFeed {
    client: Client,
    config: FeedConfig,
}

impl HttpPriceFeed {
    /// Creates a feed client for the given endpoint.
    pub fn new(config: FeedConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Endpoint this client fetches from.
    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl PriceFeed for HttpPriceFeed {
    async fn fetch(&self) -> Result<Vec<Quote>, SwapError> {
        info!("Fetching prices from {}", self.config.url);
        let response = self.client.get(&self.config.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status).into());
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from price feed", body.len());
        let quotes = Quote::decode_list(&body)?;
        info!("Fetched {} quotes", quotes.len());
        Ok(quotes)
    }
}
