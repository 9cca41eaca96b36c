//! Link store trait.

use async_trait::async_trait;
use osulink_core::{GameMode, LinkRecord};
use osulink_error::DatabaseResult;

/// Persistent mapping from chat user id to linked osu! account.
///
/// Each operation is atomic per key. Errors are reserved for storage
/// failures; a missing key is a normal outcome (`None` / `false`).
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Look up the link for a chat user.
    async fn get(&self, chat_user_id: &str) -> DatabaseResult<Option<LinkRecord>>;

    /// Create or replace the link for a chat user.
    ///
    /// Replacing resets `created_at` to the time of the write.
    async fn set(
        &self,
        chat_user_id: &str,
        osu_user_id: u32,
        osu_username: &str,
        mode: GameMode,
    ) -> DatabaseResult<()>;

    /// Change the default mode of an existing link.
    ///
    /// Returns `false` and writes nothing when the chat user is not linked.
    async fn update_mode(&self, chat_user_id: &str, mode: GameMode) -> DatabaseResult<bool>;

    /// Remove a link. Returns whether one existed.
    async fn delete(&self, chat_user_id: &str) -> DatabaseResult<bool>;

    /// All links.
    async fn list(&self) -> DatabaseResult<Vec<LinkRecord>>;

    /// Number of links.
    async fn count(&self) -> DatabaseResult<u64>;
}
