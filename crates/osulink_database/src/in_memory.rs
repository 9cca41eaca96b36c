//! In-memory implementation of LinkStore for testing.
//!
//! Stores links in a HashMap behind an RwLock. All data is lost when the
//! store is dropped.

use async_trait::async_trait;
use chrono::Utc;
use osulink_core::{GameMode, LinkRecord};
use osulink_error::DatabaseResult;
use osulink_interface::LinkStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory link store.
///
/// # Example
/// ```no_run
/// use osulink_core::GameMode;
/// use osulink_database::InMemoryLinkStore;
/// use osulink_interface::LinkStore;
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryLinkStore::new();
///     store.set("1234", 2, "peppy", GameMode::Standard).await.unwrap();
///     assert_eq!(store.count().await.unwrap(), 1);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLinkStore {
    links: Arc<RwLock<HashMap<String, LinkRecord>>>,
}

impl InMemoryLinkStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing records.
    pub fn with_links(records: impl IntoIterator<Item = LinkRecord>) -> Self {
        let links = records
            .into_iter()
            .map(|r| (r.chat_user_id().clone(), r))
            .collect();
        Self {
            links: Arc::new(RwLock::new(links)),
        }
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn get(&self, chat_user_id: &str) -> DatabaseResult<Option<LinkRecord>> {
        Ok(self.links.read().await.get(chat_user_id).cloned())
    }

    async fn set(
        &self,
        chat_user_id: &str,
        osu_user_id: u32,
        osu_username: &str,
        mode: GameMode,
    ) -> DatabaseResult<()> {
        let record = LinkRecord::new(chat_user_id, osu_user_id, osu_username, mode, Utc::now());
        self.links
            .write()
            .await
            .insert(chat_user_id.to_string(), record);
        Ok(())
    }

    async fn update_mode(&self, chat_user_id: &str, mode: GameMode) -> DatabaseResult<bool> {
        let mut links = self.links.write().await;
        match links.remove(chat_user_id) {
            Some(record) => {
                links.insert(chat_user_id.to_string(), record.with_mode(mode));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, chat_user_id: &str) -> DatabaseResult<bool> {
        Ok(self.links.write().await.remove(chat_user_id).is_some())
    }

    async fn list(&self) -> DatabaseResult<Vec<LinkRecord>> {
        let mut records: Vec<LinkRecord> = self.links.read().await.values().cloned().collect();
        records.sort_by_key(|r| *r.created_at());
        Ok(records)
    }

    async fn count(&self) -> DatabaseResult<u64> {
        Ok(self.links.read().await.len() as u64)
    }
}
