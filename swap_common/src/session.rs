//! Session-scoped holder of the fetched price set.
//!
//! `PriceSession` owns the [`PriceSet`] and lends it to the form by reference. It
//! also exposes the loading/error state of the feed.
//!
//! Only the latest fetch counts. Every fetch gets a [`FetchTicket`] from
//! [`PriceSession::begin_fetch`], and [`PriceSession::complete_fetch`] drops results
//! whose ticket has been superseded by a newer fetch. Nothing is cancelled: a stale
//! response is simply ignored when it arrives.
use log::{error, info, warn};

use crate::error::SwapError;
use crate::feed::PriceFeed;
use crate::net::FETCH_FAILED_MESSAGE;
use crate::normalizer::{DedupPolicy, PriceNormalizer};
use crate::price_set::PriceSet;
use crate::quote::Quote;

/// Loading state of the price feed as seen by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedStatus {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded.
    Ready,
    /// The latest fetch failed; carries the message to display.
    Failed(String),
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Owner of the normalized prices for one session.
#[derive(Debug, Default)]
pub struct PriceSession {
    normalizer: PriceNormalizer,
    prices: PriceSet,
    status: FeedStatus,
    latest: u64,
}

impl PriceSession {
    /// Creates an idle session with an empty price set.
    pub fn new(policy: DedupPolicy) -> Self {
        Self {
            normalizer: PriceNormalizer::new(policy),
            ..Self::default()
        }
    }

    /// Prices from the last successful fetch.
    pub fn prices(&self) -> &PriceSet {
        &self.prices
    }

    /// Current feed status.
    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    /// Returns `true` while a fetch is pending.
    pub fn is_loading(&self) -> bool {
        self.status == FeedStatus::Loading
    }

    /// Message to display if the latest fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FeedStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Marks a new fetch as in flight, superseding any pending one.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest += 1;
        self.status = FeedStatus::Loading;
        FetchTicket(self.latest)
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` if the ticket was superseded and the outcome was dropped. A
    /// failed fetch keeps the previously loaded prices.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<Quote>, SwapError>,
    ) -> bool {
        if ticket.0 != self.latest {
            warn!(
                "Dropping result of superseded fetch #{} (latest is #{})",
                ticket.0, self.latest
            );
            return false;
        }

        match outcome {
            Ok(quotes) => {
                let count = quotes.len();
                self.prices = self.normalizer.normalize(quotes);
                self.status = FeedStatus::Ready;
                info!(
                    "Loaded {} prices from {} quotes",
                    self.prices.len(),
                    count
                );
            }
            Err(e) => {
                error!("Price fetch failed: {}", e);
                self.status = FeedStatus::Failed(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Fetches from `feed` and applies the result. The fetch is the only await point.
    pub async fn refresh(&mut self, feed: &dyn PriceFeed) -> &FeedStatus {
        let ticket = self.begin_fetch();
        let outcome = feed.fetch().await;
        self.complete_fetch(ticket, outcome);
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use async_trait::async_trait;
    use reqwest::StatusCode;

    struct StaticFeed(Vec<Quote>);

    #[async_trait]
    impl PriceFeed for StaticFeed {
        async fn fetch(&self) -> Result<Vec<Quote>, SwapError> {
            Ok(self.0.clone())
        }
    }

    struct FailingFeed;

    #[async_trait]
    impl PriceFeed for FailingFeed {
        async fn fetch(&self) -> Result<Vec<Quote>, SwapError> {
            Err(NetworkError::Status(StatusCode::BAD_GATEWAY).into())
        }
    }

    fn feed() -> StaticFeed {
        StaticFeed(vec![
            Quote::new("ETH", 1600.0),
            Quote::new("ETH", 1700.0),
            Quote::new("USDC", 1.0),
        ])
    }

    #[test]
    fn starts_idle_and_empty() {
        let session = PriceSession::default();
        assert_eq!(session.status(), &FeedStatus::Idle);
        assert!(session.prices().is_empty());
        assert_eq!(session.error(), None);
    }

    #[tokio::test]
    async fn refresh_normalizes_fetched_quotes() {
        let mut session = PriceSession::new(DedupPolicy::RunningPairwise);

        let status = session.refresh(&feed()).await;

        assert_eq!(status, &FeedStatus::Ready);
        assert_eq!(session.prices().len(), 2);
        assert_eq!(session.prices().get("ETH"), Some(1650.0));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_prices() {
        let mut session = PriceSession::default();
        session.refresh(&feed()).await;

        session.refresh(&FailingFeed).await;

        assert_eq!(session.error(), Some(FETCH_FAILED_MESSAGE));
        assert!(!session.is_loading());
        assert_eq!(session.prices().get("USDC"), Some(1.0));
    }

    #[test]
    fn begin_fetch_reports_loading() {
        let mut session = PriceSession::default();
        session.begin_fetch();
        assert!(session.is_loading());
    }

    #[test]
    fn superseded_fetch_result_is_dropped() {
        let mut session = PriceSession::default();
        let first = session.begin_fetch();
        let second = session.begin_fetch();

        assert!(session.complete_fetch(second, Ok(vec![Quote::new("NEW", 2.0)])));
        assert!(!session.complete_fetch(first, Ok(vec![Quote::new("OLD", 1.0)])));

        assert_eq!(session.status(), &FeedStatus::Ready);
        assert!(session.prices().contains("NEW"));
        assert!(!session.prices().contains("OLD"));
    }

    #[test]
    fn stale_result_does_not_end_pending_fetch() {
        let mut session = PriceSession::default();
        let first = session.begin_fetch();
        let _second = session.begin_fetch();

        assert!(!session.complete_fetch(first, Err(SwapError::CurrencyNotFound("X".into()))));

        assert!(session.is_loading());
        assert_eq!(session.error(), None);
    }
}
