use super::{Classification, ElementSet, ObjectId, TrackedObject};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use strum_macros::Display;

/// One "create or replace by name" instruction for the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertRecord {
    name: String,
    elements: ElementSet,
    classification: Classification,
}

impl UpsertRecord {
    pub fn new(name: impl Into<String>, elements: ElementSet, classification: Classification) -> Self {
        Self { name: name.into(), elements, classification }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn elements(&self) -> &ElementSet { &self.elements }
    pub fn classification(&self) -> Classification { self.classification }
}

/// Counts produced by committing one batch. Each distinct name counts once,
/// however often the batch repeats it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    created: usize,
    updated: usize,
}

impl BatchOutcome {
    pub fn created(&self) -> usize { self.created }
    pub fn updated(&self) -> usize { self.updated }
    pub fn upserted(&self) -> usize { self.created + self.updated }
}

#[derive(Debug, Display)]
pub enum StoreError {
    Io(std::io::Error),
    Encode(bincode::error::EncodeError),
    Decode(bincode::error::DecodeError),
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self { StoreError::Io(value) }
}

impl From<bincode::error::EncodeError> for StoreError {
    fn from(value: bincode::error::EncodeError) -> Self { StoreError::Encode(value) }
}

impl From<bincode::error::DecodeError> for StoreError {
    fn from(value: bincode::error::DecodeError) -> Self { StoreError::Decode(value) }
}

/// Durable keyed collection of tracked objects.
///
/// Objects are only ever created or updated, never removed. Readers work on
/// snapshots, so a reader racing a batch commit may see the catalog either
/// before or after that batch.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Copy of the whole catalog in insertion order.
    async fn snapshot(&self) -> Vec<TrackedObject>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool { self.len().await == 0 }

    /// Exact match on the (trimmed) name.
    async fn find_by_name(&self, name: &str) -> Option<TrackedObject>;

    /// Applies all records as a single write.
    ///
    /// # Errors
    /// Returns a [`StoreError`] if the batch could not be made durable. In that
    /// case none of the records are visible afterwards.
    async fn commit_batch(&self, batch: Vec<UpsertRecord>) -> Result<BatchOutcome, StoreError>;
}

/// The catalog contents plus the bookkeeping needed to upsert by name.
///
/// Shared by the in-memory and the file backed stores; the name index is
/// derived data and rebuilt after deserialisation.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default)]
pub struct CatalogTable {
    objects: Vec<TrackedObject>,
    next_id: ObjectId,
    #[serde(skip)]
    by_name: HashMap<String, usize>,
}

impl CatalogTable {
    pub fn objects(&self) -> &[TrackedObject] { &self.objects }

    pub fn len(&self) -> usize { self.objects.len() }

    pub fn is_empty(&self) -> bool { self.objects.is_empty() }

    pub fn find_by_name(&self, name: &str) -> Option<&TrackedObject> {
        self.by_name.get(name.trim()).map(|&idx| &self.objects[idx])
    }

    pub fn apply(&mut self, batch: Vec<UpsertRecord>) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        let mut touched = HashSet::new();
        for record in batch {
            let UpsertRecord { name, elements, classification } = record;
            let key = name.trim();
            if let Some(&idx) = self.by_name.get(key) {
                self.objects[idx].refresh(elements, classification);
                if touched.insert(key.to_string()) {
                    outcome.updated += 1;
                }
            } else {
                touched.insert(key.to_string());
                let id = self.next_id;
                self.next_id += 1;
                self.by_name.insert(key.to_string(), self.objects.len());
                self.objects.push(TrackedObject::new(id, key, elements, classification));
                outcome.created += 1;
            }
        }
        outcome
    }

    pub(super) fn rebuild_index(&mut self) {
        self.by_name = self
            .objects
            .iter()
            .enumerate()
            .map(|(idx, obj)| (obj.name().to_string(), idx))
            .collect();
        let max_id = self.objects.iter().map(TrackedObject::id).max();
        if let Some(max_id) = max_id {
            self.next_id = self.next_id.max(max_id + 1);
        }
    }
}
