use super::{
    CatalogStore, Classification, ElementSet, FileCatalogStore, MemoryCatalogStore, UpsertRecord,
};
use strum::IntoEnumIterator;

fn record(name: &str, line1: &str, classification: Classification) -> UpsertRecord {
    UpsertRecord::new(name, ElementSet::new(line1, "2 line"), classification)
}

#[test]
fn test_classification_parsing() {
    assert_eq!(Classification::from_label("station"), Classification::Station);
    assert_eq!(Classification::from_label(" DEBRIS "), Classification::Debris);
    assert_eq!(Classification::from_label("payload"), Classification::Unknown);
    for class in Classification::iter() {
        assert_eq!(Classification::from_label(class.to_string().as_str()), class);
    }
}

#[tokio::test]
async fn test_memory_store_upsert_by_name() {
    let store = MemoryCatalogStore::new();
    let first = store
        .commit_batch(vec![
            record("ISS (ZARYA)", "1 a", Classification::Station),
            record("COSMOS 1408 DEB", "1 b", Classification::Debris),
        ])
        .await
        .unwrap();
    assert_eq!((first.created(), first.updated()), (2, 0));

    let iss_before = store.find_by_name("ISS (ZARYA)").await.unwrap();
    let second = store
        .commit_batch(vec![record("  ISS (ZARYA) ", "1 c", Classification::Debris)])
        .await
        .unwrap();
    assert_eq!((second.created(), second.updated()), (0, 1));
    assert_eq!(store.len().await, 2);

    let iss_after = store.find_by_name("ISS (ZARYA)").await.unwrap();
    assert_eq!(iss_after.id(), iss_before.id());
    assert_eq!(iss_after.elements().line1(), "1 c");
    assert_eq!(iss_after.classification(), Classification::Debris);
}

#[tokio::test]
async fn test_memory_store_snapshot_keeps_insertion_order_and_unique_ids() {
    let store = MemoryCatalogStore::new();
    let names = ["A", "B", "C", "D"];
    let batch = names.iter().map(|n| record(n, "1", Classification::Unknown)).collect();
    store.commit_batch(batch).await.unwrap();

    let snapshot = store.snapshot().await;
    let snap_names: Vec<&str> = snapshot.iter().map(|o| o.name()).collect();
    assert_eq!(snap_names, names);
    let mut ids: Vec<u64> = snapshot.iter().map(|o| o.id()).collect();
    ids.dedup();
    assert_eq!(ids.len(), names.len());
}

#[tokio::test]
async fn test_duplicate_names_within_one_batch_collapse() {
    let store = MemoryCatalogStore::new();
    let outcome = store
        .commit_batch(vec![
            record("DUP", "1 old", Classification::Debris),
            record("DUP", "1 new", Classification::Debris),
        ])
        .await
        .unwrap();
    assert_eq!((outcome.created(), outcome.updated()), (1, 0));
    assert_eq!(store.len().await, 1);
    assert_eq!(store.find_by_name("DUP").await.unwrap().elements().line1(), "1 new");

    // an existing name repeated in a later batch is one update
    let again = store
        .commit_batch(vec![
            record("DUP", "1 newer", Classification::Debris),
            record(" DUP ", "1 newest", Classification::Station),
            record("OTHER", "1 x", Classification::Unknown),
        ])
        .await
        .unwrap();
    assert_eq!((again.created(), again.updated()), (1, 1));
    assert_eq!(again.upserted(), 2);
    let dup = store.find_by_name("DUP").await.unwrap();
    assert_eq!(dup.elements().line1(), "1 newest");
    assert_eq!(dup.classification(), Classification::Station);
}

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.bin");

    let store = FileCatalogStore::open(&path).await.unwrap();
    assert!(store.is_empty().await);
    store
        .commit_batch(vec![
            record("ISS (ZARYA)", "1 a", Classification::Station),
            record("FENGYUN 1C DEB", "1 b", Classification::Debris),
        ])
        .await
        .unwrap();
    let before = store.snapshot().await;
    drop(store);

    let reopened = FileCatalogStore::open(&path).await.unwrap();
    assert_eq!(reopened.snapshot().await, before);

    // ids keep counting from where the previous process stopped
    reopened.commit_batch(vec![record("NEW", "1 c", Classification::Unknown)]).await.unwrap();
    let new_obj = reopened.find_by_name("NEW").await.unwrap();
    assert!(before.iter().all(|o| o.id() != new_obj.id()));
    let updated = reopened
        .commit_batch(vec![record("ISS (ZARYA)", "1 z", Classification::Station)])
        .await
        .unwrap();
    assert_eq!(updated.updated(), 1);
    assert_eq!(reopened.len().await, 3);
}

#[tokio::test]
async fn test_file_store_rejects_garbage_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.bin");
    std::fs::write(&path, [0xff_u8; 3]).unwrap();
    assert!(FileCatalogStore::open(&path).await.is_err());
}
