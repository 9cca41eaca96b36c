//! Link records: the only state osulink owns.

use crate::GameMode;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Association between a chat user and an osu! account.
///
/// At most one record exists per chat user. Re-linking replaces the record
/// wholesale; only the default mode can be changed in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct LinkRecord {
    /// Chat platform user id (primary key)
    chat_user_id: String,
    /// osu! user id
    osu_user_id: u32,
    /// osu! username at the time of linking
    osu_username: String,
    /// Mode used when a command does not name one
    default_mode: GameMode,
    /// When the link was (re)written
    created_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Create a record.
    pub fn new(
        chat_user_id: impl Into<String>,
        osu_user_id: u32,
        osu_username: impl Into<String>,
        default_mode: GameMode,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            chat_user_id: chat_user_id.into(),
            osu_user_id,
            osu_username: osu_username.into(),
            default_mode,
            created_at,
        }
    }

    /// Copy of this record with a different default mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.default_mode = mode;
        self
    }
}
