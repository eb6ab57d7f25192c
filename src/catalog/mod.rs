mod classification;
mod file_store;
mod memory_store;
mod store;
mod tracked_object;
#[cfg(test)]
mod tests;

pub use classification::Classification;
pub use file_store::FileCatalogStore;
pub use memory_store::MemoryCatalogStore;
pub use store::{BatchOutcome, CatalogStore, CatalogTable, StoreError, UpsertRecord};
pub use tracked_object::{ElementSet, ObjectId, TrackedObject};
