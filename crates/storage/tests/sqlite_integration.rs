use storage::repository::{LocalStore, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_local_store_round_trip() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_local_rt?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get_item("authToken").await.unwrap(), None);

    repo.set_item("authToken", "first").await.unwrap();
    repo.set_item("authToken", "second").await.unwrap();
    repo.set_item("userId", "12").await.unwrap();

    assert_eq!(
        repo.get_item("authToken").await.unwrap().as_deref(),
        Some("second")
    );
    assert_eq!(repo.get_item("userId").await.unwrap().as_deref(), Some("12"));

    repo.remove_item("authToken").await.unwrap();
    assert_eq!(repo.get_item("authToken").await.unwrap(), None);
    assert_eq!(repo.get_item("userId").await.unwrap().as_deref(), Some("12"));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_local_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set_item("k", "v").await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.get_item("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn storage_sqlite_wires_local_store() {
    let storage = Storage::sqlite("sqlite:file:memdb_local_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.local.set_item("userId", "3").await.unwrap();
    assert_eq!(
        storage.local.get_item("userId").await.unwrap().as_deref(),
        Some("3")
    );
    storage.local.remove_item("missing").await.unwrap();
}
