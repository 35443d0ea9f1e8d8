//! Round-trip and failure-path tests for the guild binding store.
use dontstarve_bot::storage::{BindingError, BindingRecord, BindingStore};
use tempfile::TempDir;

async fn fresh_store(dir: &TempDir) -> BindingStore {
    let (store, report) = BindingStore::initialize(dir.path())
        .await
        .expect("initialize should succeed on an empty directory");
    assert_eq!(report.loaded, 0);
    assert_eq!(report.failed, 0);
    store
}

#[tokio::test]
async fn bind_then_get_returns_exact_record() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;

    store.bind("G1", "42", "Base Camp").await.unwrap();
    let record = store.get("G1").await.unwrap();
    assert_eq!(record, BindingRecord::new("42", "Base Camp"));
}

#[tokio::test]
async fn bind_rejects_empty_guild_id() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;

    let err = store.bind("", "42", "Base Camp").await.unwrap_err();
    assert!(matches!(err, BindingError::InvalidContext));
}

#[tokio::test]
async fn unbind_never_bound_guild_fails() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;

    let err = store.unbind("G1").await.unwrap_err();
    assert!(matches!(err, BindingError::NotBound));
}

#[tokio::test]
async fn unbind_then_rebind_reuses_the_slot() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;

    store.bind("G1", "42", "Base Camp").await.unwrap();
    let previous = store.unbind("G1").await.unwrap();
    assert_eq!(previous.server_name, "Base Camp");

    let err = store.get("G1").await.unwrap_err();
    assert!(matches!(err, BindingError::NotBound));

    // The overwritten slot accepts a new binding.
    store.bind("G1", "7", "Winter Hideout").await.unwrap();
    assert_eq!(store.get("G1").await.unwrap().server_id, "7");
}

#[tokio::test]
async fn bindings_survive_a_reload() {
    let dir = TempDir::new().unwrap();
    {
        let store = fresh_store(&dir).await;
        store.bind("G1", "42", "Base Camp").await.unwrap();
        store.bind("G2", "9", "Endless Plains").await.unwrap();
    }

    let (reloaded, report) = BindingStore::initialize(dir.path()).await.unwrap();
    assert_eq!(report.loaded, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(
        reloaded.get("G1").await.unwrap(),
        BindingRecord::new("42", "Base Camp")
    );
    assert_eq!(reloaded.get("G2").await.unwrap().server_name, "Endless Plains");
}

#[tokio::test]
async fn corrupt_slots_are_counted_never_fatal() {
    let dir = TempDir::new().unwrap();
    {
        let store = fresh_store(&dir).await;
        store.bind("G1", "42", "Base Camp").await.unwrap();
        store.bind("G2", "9", "Endless Plains").await.unwrap();
    }
    std::fs::write(dir.path().join("G3"), "{ not json").unwrap();
    std::fs::write(dir.path().join("G4"), "[]").unwrap();

    let (reloaded, report) = BindingStore::initialize(dir.path()).await.unwrap();
    assert_eq!(report.loaded, 2);
    assert_eq!(report.failed, 2);
    assert!(reloaded.get("G1").await.is_ok());
    assert!(matches!(
        reloaded.get("G3").await.unwrap_err(),
        BindingError::NotBound
    ));
}

#[tokio::test]
async fn unbound_slot_on_disk_reads_as_not_bound() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("G1"),
        r#"{"serverId":"","serverName":""}"#,
    )
    .unwrap();

    let (store, report) = BindingStore::initialize(dir.path()).await.unwrap();
    // The slot parses fine; it just carries the unbound shape.
    assert_eq!(report.loaded, 1);
    assert!(matches!(
        store.get("G1").await.unwrap_err(),
        BindingError::NotBound
    ));
}

#[tokio::test]
async fn rebind_overwrites_unconditionally() {
    let dir = TempDir::new().unwrap();
    let store = fresh_store(&dir).await;

    store.bind("G1", "42", "Base Camp").await.unwrap();
    store.bind("G1", "43", "Base Camp II").await.unwrap();
    let record = store.get("G1").await.unwrap();
    assert_eq!(record, BindingRecord::new("43", "Base Camp II"));
}
