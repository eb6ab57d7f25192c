use super::{FeedSource, FeedSpec, parse_feed};
use crate::catalog::{CatalogStore, Classification, UpsertRecord};
use crate::{error, event, info};
use std::sync::Arc;

/// Result of syncing a single feed.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedSyncOutcome {
    source: String,
    classification: Classification,
    created: usize,
    updated: usize,
    /// Set when the feed was skipped because it could not be fetched or
    /// committed.
    failed: bool,
}

impl FeedSyncOutcome {
    fn failed(feed: &FeedSpec) -> Self {
        Self {
            source: feed.source().to_string(),
            classification: feed.classification(),
            created: 0,
            updated: 0,
            failed: true,
        }
    }

    pub fn source(&self) -> &str { &self.source }
    pub fn classification(&self) -> Classification { self.classification }
    pub fn created(&self) -> usize { self.created }
    pub fn updated(&self) -> usize { self.updated }
    /// Distinct names created or updated by this feed.
    pub fn upserted(&self) -> usize { self.created + self.updated }
    pub fn is_failed(&self) -> bool { self.failed }
}

/// Per-feed outcomes of one `ingest` call, in feed order.
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncResult {
    feeds: Vec<FeedSyncOutcome>,
}

impl SyncResult {
    pub fn feeds(&self) -> &[FeedSyncOutcome] { &self.feeds }
    pub fn total_upserted(&self) -> usize { self.feeds.iter().map(FeedSyncOutcome::upserted).sum() }
    pub fn total_created(&self) -> usize { self.feeds.iter().map(FeedSyncOutcome::created).sum() }
    pub fn failed_feeds(&self) -> usize { self.feeds.iter().filter(|f| f.failed).count() }
}

/// Pulls element-set feeds into the catalog.
///
/// Each feed is fetched, parsed into triples and committed as one batch, so
/// the store sees exactly one write per feed. Feeds are independent: a
/// failing feed is logged and reported, the remaining ones still sync.
pub struct CatalogSync {
    source: Arc<dyn FeedSource>,
    store: Arc<dyn CatalogStore>,
}

impl CatalogSync {
    pub fn new(source: Arc<dyn FeedSource>, store: Arc<dyn CatalogStore>) -> Self {
        Self { source, store }
    }

    pub async fn ingest(&self, feeds: &[FeedSpec]) -> SyncResult {
        let mut result = SyncResult::default();
        for feed in feeds {
            info!("Fetching feed {feed}");
            let raw = match self.source.fetch(feed).await {
                Ok(raw) => raw,
                Err(err) => {
                    error!("Fetching feed {feed} failed: {err} ({err:?}), skipping");
                    result.feeds.push(FeedSyncOutcome::failed(feed));
                    continue;
                }
            };

            let batch: Vec<UpsertRecord> = parse_feed(&raw)
                .into_iter()
                .map(|record| record.into_upsert(feed.classification()))
                .collect();
            event!("Feed {feed} parsed into {} records", batch.len());

            match self.store.commit_batch(batch).await {
                Ok(outcome) => {
                    info!(
                        "Feed {feed}: {} created, {} updated",
                        outcome.created(),
                        outcome.updated()
                    );
                    result.feeds.push(FeedSyncOutcome {
                        source: feed.source().to_string(),
                        classification: feed.classification(),
                        created: outcome.created(),
                        updated: outcome.updated(),
                        failed: false,
                    });
                }
                Err(err) => {
                    error!("Committing feed {feed} failed: {err} ({err:?})");
                    result.feeds.push(FeedSyncOutcome::failed(feed));
                }
            }
        }
        info!(
            "Catalog sync done: {} objects created or updated, {} feeds failed, {} tracked",
            result.total_upserted(),
            result.failed_feeds(),
            self.store.len().await
        );
        result
    }
}
