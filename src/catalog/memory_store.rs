use super::{BatchOutcome, CatalogStore, CatalogTable, StoreError, TrackedObject, UpsertRecord};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Catalog kept purely in process memory. Lost on restart.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    table: RwLock<CatalogTable>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn snapshot(&self) -> Vec<TrackedObject> { self.table.read().await.objects().to_vec() }

    async fn len(&self) -> usize { self.table.read().await.len() }

    async fn find_by_name(&self, name: &str) -> Option<TrackedObject> {
        self.table.read().await.find_by_name(name).cloned()
    }

    async fn commit_batch(&self, batch: Vec<UpsertRecord>) -> Result<BatchOutcome, StoreError> {
        Ok(self.table.write().await.apply(batch))
    }
}
