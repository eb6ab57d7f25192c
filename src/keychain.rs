use crate::catalog::{CatalogStore, FileCatalogStore, MemoryCatalogStore, StoreError};
use crate::config::SentinelConfig;
use crate::http_handler::{FeedFetchError, http_client::HTTPClient};
use crate::orbit_path::OrbitPathSampler;
use crate::propagation::PositionPropagator;
use crate::screening::ConjunctionScreener;
use crate::sync::CatalogSync;
use crate::{info, warn};
use std::sync::Arc;
use strum_macros::Display;

/// Failures while building the [`Keychain`]. Both are fatal at startup.
#[derive(Debug, Display)]
pub enum InitError {
    Client(FeedFetchError),
    Store(StoreError),
}

impl std::error::Error for InitError {}

impl From<FeedFetchError> for InitError {
    fn from(err: FeedFetchError) -> Self { InitError::Client(err) }
}

impl From<StoreError> for InitError {
    fn from(err: StoreError) -> Self { InitError::Store(err) }
}

/// Struct holding the shared handles of the service: the feed client, the
/// catalog store and the propagator. Cloning is cheap, every handle is an
/// `Arc`.
#[derive(Clone)]
pub struct Keychain {
    /// The HTTP client fetching element feeds.
    client: Arc<HTTPClient>,
    /// The catalog store, in memory or backed by a snapshot file.
    store: Arc<dyn CatalogStore>,
    /// The propagator shared by screening and path sampling.
    propagator: Arc<dyn PositionPropagator>,
}

impl Keychain {
    /// Creates a new instance of `Keychain` asynchronously.
    ///
    /// # Arguments
    /// - `config`: The service configuration.
    ///
    /// # Returns
    /// A new `Keychain`, or an [`InitError`] if the HTTP client cannot be
    /// built or the catalog snapshot cannot be read.
    pub async fn new(config: &SentinelConfig) -> Result<Self, InitError> {
        let client = Arc::new(HTTPClient::new(config.feed_base_url(), config.http_timeout())?);
        let store: Arc<dyn CatalogStore> = match config.catalog_path() {
            Some(path) => {
                let file_store = FileCatalogStore::open(path).await?;
                info!("Opened catalog {} with {} objects", path.display(), file_store.len().await);
                Arc::new(file_store)
            }
            None => {
                warn!("SENTINEL_CATALOG_PATH not set, catalog lives in memory only");
                Arc::new(MemoryCatalogStore::new())
            }
        };
        let propagator = config.propagator().build();
        info!("Using {} propagator", config.propagator());
        Ok(Self { client, store, propagator })
    }

    /// Provides a cloned reference to the HTTP client.
    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    /// Provides a cloned reference to the catalog store.
    pub fn store(&self) -> Arc<dyn CatalogStore> { Arc::clone(&self.store) }

    /// Provides a cloned reference to the propagator.
    pub fn propagator(&self) -> Arc<dyn PositionPropagator> { Arc::clone(&self.propagator) }

    /// A sync pipeline pulling from the HTTP client into the store.
    pub fn catalog_sync(&self) -> CatalogSync { CatalogSync::new(self.client(), self.store()) }

    pub fn screener(&self) -> ConjunctionScreener { ConjunctionScreener::new(self.propagator()) }

    pub fn path_sampler(&self) -> OrbitPathSampler { OrbitPathSampler::new(self.propagator()) }
}
