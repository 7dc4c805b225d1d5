mod common;

use redb::{Database, TableDefinition};
use shortlink::AppError;
use shortlink::domain::entities::LinkRecord;
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::RedbLinkRepository;
use shortlink::utils::short_id::derive_id;
use std::sync::Arc;

// Mirrors the repository's table definition for raw writes.
const LINKS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("links_v1");

#[tokio::test]
async fn test_put_then_find_round_trip() {
    let (repo, _dir) = common::create_test_repository();

    let record = common::sample_record();
    let id = derive_id(&record.canonical_bytes().unwrap());

    repo.put(&id, &record).await.unwrap();

    let found = repo.find_by_id(&id).await.unwrap();
    assert_eq!(found, Some(record));
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let (repo, _dir) = common::create_test_repository();

    let result = repo.find_by_id("nonexistent-id").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_put_overwrites_same_key() {
    let (repo, _dir) = common::create_test_repository();

    let record = common::sample_record();
    let id = derive_id(&record.canonical_bytes().unwrap());

    repo.put(&id, &record).await.unwrap();
    repo.put(&id, &record).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(record));
}

#[tokio::test]
async fn test_put_overwrites_with_different_content() {
    // The store performs no uniqueness check: a write to an existing key
    // replaces the stored value unconditionally.
    let (repo, _dir) = common::create_test_repository();

    let first = LinkRecord::new("first", "d", "https://example.com/1");
    let second = LinkRecord::new("second", "d", "https://example.com/2");

    repo.put("shared-key", &first).await.unwrap();
    repo.put("shared-key", &second).await.unwrap();

    assert_eq!(repo.find_by_id("shared-key").await.unwrap(), Some(second));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_count_empty_store() {
    let (repo, _dir) = common::create_test_repository();

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_count_after_writes() {
    let (repo, _dir) = common::create_test_repository();

    for i in 0..3 {
        let record = LinkRecord::new(format!("title {i}"), "d", "https://example.com");
        let id = derive_id(&record.canonical_bytes().unwrap());
        repo.put(&id, &record).await.unwrap();
    }

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_corrupt_record_is_distinct_from_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let db = Arc::new(Database::create(dir.path().join("links.redb")).unwrap());

    // Plant unparseable bytes under a key, bypassing the repository
    let txn = db.begin_write().unwrap();
    {
        let mut table = txn.open_table(LINKS_TABLE).unwrap();
        table.insert("bad1", &b"not json at all"[..]).unwrap();
    }
    txn.commit().unwrap();

    let repo = RedbLinkRepository::new(db).unwrap();

    let err = repo.find_by_id("bad1").await.unwrap_err();
    assert!(matches!(err, AppError::CorruptRecord { .. }));

    // A key that was never written still reads as a clean miss
    let missing = repo.find_by_id("never-written").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.redb");

    let record = common::sample_record();
    let id = derive_id(&record.canonical_bytes().unwrap());

    {
        let db = Arc::new(Database::create(&path).unwrap());
        let repo = RedbLinkRepository::new(db).unwrap();
        repo.put(&id, &record).await.unwrap();
    }

    let db = Arc::new(Database::create(&path).unwrap());
    let repo = RedbLinkRepository::new(db).unwrap();

    assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(record));
}

#[tokio::test]
async fn test_concurrent_puts_and_gets() {
    let (repo, _dir) = common::create_test_repository();
    let repo = Arc::new(repo);

    let mut handles = Vec::new();

    for i in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            let record = LinkRecord::new(format!("title {i}"), "d", "https://example.com");
            let id = derive_id(&record.canonical_bytes().unwrap());

            repo.put(&id, &record).await.unwrap();
            let found = repo.find_by_id(&id).await.unwrap();
            assert_eq!(found, Some(record));
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(repo.count().await.unwrap(), 8);
}
