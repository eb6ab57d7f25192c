use super::{BatchOutcome, CatalogStore, CatalogTable, StoreError, TrackedObject, UpsertRecord};
use crate::info;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Catalog persisted as a `bincode` snapshot file.
///
/// Every committed batch rewrites the snapshot (write to a sibling temp file,
/// then rename), so the file always holds a complete catalog. The in-memory
/// table is only swapped after the write succeeded.
#[derive(Debug)]
pub struct FileCatalogStore {
    path: PathBuf,
    table: RwLock<CatalogTable>,
}

impl FileCatalogStore {
    /// Opens the snapshot at `path`, starting with an empty catalog if the
    /// file does not exist yet.
    ///
    /// # Errors
    /// Fails if the file exists but cannot be read or decoded.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let table = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let (mut table, _): (CatalogTable, usize) =
                    bincode::serde::decode_from_slice(&bytes, bincode::config::standard())?;
                table.rebuild_index();
                info!("Loaded {} catalog objects from {}", table.len(), path.display());
                table
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("No catalog snapshot at {}, starting empty", path.display());
                CatalogTable::default()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, table: RwLock::new(table) })
    }

    pub fn path(&self) -> &Path { &self.path }

    async fn persist(&self, table: &CatalogTable) -> Result<(), StoreError> {
        let bytes = bincode::serde::encode_to_vec(table, bincode::config::standard())?;
        let tmp_path = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&tmp_path, bytes).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for FileCatalogStore {
    async fn snapshot(&self) -> Vec<TrackedObject> { self.table.read().await.objects().to_vec() }

    async fn len(&self) -> usize { self.table.read().await.len() }

    async fn find_by_name(&self, name: &str) -> Option<TrackedObject> {
        self.table.read().await.find_by_name(name).cloned()
    }

    async fn commit_batch(&self, batch: Vec<UpsertRecord>) -> Result<BatchOutcome, StoreError> {
        let mut table = self.table.write().await;
        let mut staged = table.clone();
        let outcome = staged.apply(batch);
        self.persist(&staged).await?;
        *table = staged;
        Ok(outcome)
    }
}
