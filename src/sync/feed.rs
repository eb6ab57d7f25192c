use crate::catalog::Classification;
use crate::http_handler::FeedFetchError;
use async_trait::async_trait;
use std::fmt::{Display, Formatter};

/// One element-set feed: where to get it and which label its objects get.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSpec {
    /// Feed group name, e.g. `stations`.
    source: String,
    classification: Classification,
}

impl FeedSpec {
    pub fn new(source: impl Into<String>, classification: Classification) -> Self {
        Self { source: source.into(), classification }
    }

    pub fn source(&self) -> &str { &self.source }
    pub fn classification(&self) -> Classification { self.classification }
}

impl Display for FeedSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.source, self.classification)
    }
}

/// The feeds synced when nothing else is configured: active stations first,
/// so a station selector resolves before any debris with a similar name.
pub fn default_feeds() -> Vec<FeedSpec> {
    vec![
        FeedSpec::new("stations", Classification::Station),
        FeedSpec::new("debris", Classification::Debris),
    ]
}

/// Anything able to deliver the raw text of a feed.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches the raw, line oriented TLE text for `feed`.
    ///
    /// # Errors
    /// Returns a [`FeedFetchError`] on any transport or status failure.
    async fn fetch(&self, feed: &FeedSpec) -> Result<String, FeedFetchError>;
}
