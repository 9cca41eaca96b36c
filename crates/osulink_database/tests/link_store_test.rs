//! Behavioural tests shared by every LinkStore implementation.

use osulink_core::GameMode;
use osulink_database::{DatabaseLinkStore, InMemoryLinkStore};
use osulink_interface::LinkStore;

async fn empty_store_has_nothing(store: &impl LinkStore) {
    assert!(store.get("100").await.unwrap().is_none());
    assert_eq!(store.count().await.unwrap(), 0);
    assert!(store.list().await.unwrap().is_empty());
}

async fn set_then_get(store: &impl LinkStore) {
    store
        .set("100", 124493, "Cookiezi", GameMode::Standard)
        .await
        .unwrap();

    let record = store.get("100").await.unwrap().expect("link stored");
    assert_eq!(record.chat_user_id(), "100");
    assert_eq!(*record.osu_user_id(), 124493);
    assert_eq!(record.osu_username(), "Cookiezi");
    assert_eq!(*record.default_mode(), GameMode::Standard);
}

async fn set_replaces_wholesale(store: &impl LinkStore) {
    store.set("200", 1, "first", GameMode::Taiko).await.unwrap();
    let before = store.get("200").await.unwrap().unwrap();

    store.set("200", 2, "second", GameMode::Catch).await.unwrap();
    let after = store.get("200").await.unwrap().unwrap();

    assert_eq!(*after.osu_user_id(), 2);
    assert_eq!(after.osu_username(), "second");
    assert_eq!(*after.default_mode(), GameMode::Catch);
    assert!(after.created_at() >= before.created_at());
    assert_eq!(store.count().await.unwrap(), 1);
}

async fn update_mode_on_unlinked_is_a_no_op(store: &impl LinkStore) {
    assert!(!store.update_mode("300", GameMode::Mania).await.unwrap());
    assert!(store.get("300").await.unwrap().is_none());
    assert_eq!(store.count().await.unwrap(), 0);
}

async fn update_mode_keeps_account(store: &impl LinkStore) {
    store.set("400", 9, "nine", GameMode::Standard).await.unwrap();

    assert!(store.update_mode("400", GameMode::Mania).await.unwrap());

    let record = store.get("400").await.unwrap().unwrap();
    assert_eq!(*record.default_mode(), GameMode::Mania);
    assert_eq!(*record.osu_user_id(), 9);
    assert_eq!(record.osu_username(), "nine");
}

async fn delete_reports_existence(store: &impl LinkStore) {
    store.set("500", 5, "five", GameMode::Standard).await.unwrap();

    assert!(store.delete("500").await.unwrap());
    assert!(!store.delete("500").await.unwrap());
    assert!(store.get("500").await.unwrap().is_none());
}

async fn list_and_count_agree(store: &impl LinkStore) {
    store.set("a", 1, "one", GameMode::Standard).await.unwrap();
    store.set("b", 2, "two", GameMode::Taiko).await.unwrap();
    store.set("c", 3, "three", GameMode::Mania).await.unwrap();

    let mut ids: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.chat_user_id().clone())
        .collect();
    ids.sort();

    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn in_memory_store_contract() {
    empty_store_has_nothing(&InMemoryLinkStore::new()).await;
    set_then_get(&InMemoryLinkStore::new()).await;
    set_replaces_wholesale(&InMemoryLinkStore::new()).await;
    update_mode_on_unlinked_is_a_no_op(&InMemoryLinkStore::new()).await;
    update_mode_keeps_account(&InMemoryLinkStore::new()).await;
    delete_reports_existence(&InMemoryLinkStore::new()).await;
    list_and_count_agree(&InMemoryLinkStore::new()).await;
}

#[tokio::test]
async fn database_store_contract() {
    let fresh = || DatabaseLinkStore::in_memory().expect("in-memory database");

    empty_store_has_nothing(&fresh()).await;
    set_then_get(&fresh()).await;
    set_replaces_wholesale(&fresh()).await;
    update_mode_on_unlinked_is_a_no_op(&fresh()).await;
    update_mode_keeps_account(&fresh()).await;
    delete_reports_existence(&fresh()).await;
    list_and_count_agree(&fresh()).await;
}

#[tokio::test]
async fn database_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.db");
    let url = path.to_str().unwrap();

    {
        let store = DatabaseLinkStore::open(url, 2).unwrap();
        store.set("600", 6, "six", GameMode::Taiko).await.unwrap();
    }

    let reopened = DatabaseLinkStore::open(url, 2).unwrap();
    let record = reopened.get("600").await.unwrap().expect("persisted link");
    assert_eq!(*record.default_mode(), GameMode::Taiko);
    assert_eq!(reopened.count().await.unwrap(), 1);
}
