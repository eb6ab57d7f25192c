use super::FeedFetchError;
use super::http_request::{request_common::NoBodyHTTPRequestType, tle_feed_get::TleFeedRequest};
use crate::sync::{FeedSource, FeedSpec};
use async_trait::async_trait;
use std::time::Duration;

/// A simple wrapper around `reqwest::Client` used to fetch element-set feeds
/// from a preconfigured base URL.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL, e.g. `https://celestrak.org/NORAD/elements/gp.php`.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL and request timeout.
    ///
    /// # Errors
    /// Fails if the TLS backend cannot be initialised.
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<HTTPClient, FeedFetchError> {
        Ok(HTTPClient {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .user_agent(concat!("orbit-sentinel/", env!("CARGO_PKG_VERSION")))
                .build()?,
            base_url: String::from(base_url),
        })
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }
}

#[async_trait]
impl FeedSource for HTTPClient {
    async fn fetch(&self, feed: &FeedSpec) -> Result<String, FeedFetchError> {
        TleFeedRequest::new(feed.source()).send_request(self).await
    }
}
