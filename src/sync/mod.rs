mod catalog_sync;
mod feed;
mod feed_parser;

pub use catalog_sync::{CatalogSync, FeedSyncOutcome, SyncResult};
pub use feed::{FeedSource, FeedSpec, default_feeds};
pub use feed_parser::{RawElementRecord, parse_feed};
