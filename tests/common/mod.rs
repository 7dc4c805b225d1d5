#![allow(dead_code)]

use redb::Database;
use std::sync::Arc;
use tempfile::TempDir;

use shortlink::application::services::LinkService;
use shortlink::domain::entities::LinkRecord;
use shortlink::infrastructure::persistence::RedbLinkRepository;
use shortlink::state::AppState;

/// Creates application state backed by a fresh temp-file redb database.
///
/// The returned [`TempDir`] must be kept alive for the duration of the test;
/// dropping it removes the database file.
pub fn create_test_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::create(dir.path().join("links.redb")).unwrap();

    let link_repository = Arc::new(RedbLinkRepository::new(Arc::new(db)).unwrap());
    let link_service = Arc::new(LinkService::new(link_repository));

    let state = AppState::new(link_service, "demo-item.png".to_string());

    (state, dir)
}

/// Creates a fresh repository over a temp-file database.
pub fn create_test_repository() -> (RedbLinkRepository, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::create(dir.path().join("links.redb")).unwrap();

    let repository = RedbLinkRepository::new(Arc::new(db)).unwrap();

    (repository, dir)
}

pub fn sample_record() -> LinkRecord {
    LinkRecord::new(
        "Tag: Item for 5 SWT",
        "Reply for 5 SWT on Tag",
        "https://swarm.city/detail/0xABC/0xDEF",
    )
}

/// Stores a record through the service and returns its derived id.
pub async fn create_test_link(state: &AppState, record: LinkRecord) -> String {
    state.link_service.create_link(record).await.unwrap()
}
