//! Shared endpoint and message constants used by the core and the client.

/// Price feed endpoint returning a JSON array of `{ currency, date, price }` objects.
pub const DEFAULT_FEED_URL: &str = "https://interview.switcheo.com/prices.json";

/// Form error shown when a submit is attempted with a missing or invalid field.
pub const VALIDATION_MESSAGE: &str = "Please select currencies and fill in all fields";

/// Session error shown when the price feed could not be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch prices";
