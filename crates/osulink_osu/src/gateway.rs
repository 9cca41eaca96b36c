//! [`StatsGateway`] backed by the osu! API.

use crate::client::OsuClient;
use async_trait::async_trait;
use osulink_core::{Beatmap, Beatmapset, GameMode, Score, ScoreKind, User, UserRef};
use osulink_error::OsuApiError;
use osulink_interface::StatsGateway;
use tracing::{debug, instrument, warn};

/// Gateway that hides upstream failures from command logic.
///
/// A 404 is logged at debug level, anything else at warn, and both become
/// `None` or an empty list.
#[derive(Debug, Clone)]
pub struct OsuGateway {
    client: OsuClient,
}

impl OsuGateway {
    /// Wrap a client.
    pub fn new(client: OsuClient) -> Self {
        Self { client }
    }

    /// The wrapped client, for callers that need the error detail.
    pub fn client(&self) -> &OsuClient {
        &self.client
    }
}

fn log_failure(operation: &'static str, err: &OsuApiError) {
    if err.kind().is_not_found() {
        debug!(operation, "Resource not found");
    } else {
        warn!(operation, error = %err, "osu! API call failed");
    }
}

fn or_none<T>(operation: &'static str, result: Result<T, OsuApiError>) -> Option<T> {
    result.inspect_err(|e| log_failure(operation, e)).ok()
}

fn or_empty<T>(operation: &'static str, result: Result<Vec<T>, OsuApiError>) -> Vec<T> {
    or_none(operation, result).unwrap_or_default()
}

#[async_trait]
impl StatsGateway for OsuGateway {
    #[instrument(skip(self), fields(user = %user))]
    async fn fetch_user(&self, user: &UserRef, mode: Option<GameMode>) -> Option<User> {
        or_none("fetch_user", self.client.user(user, mode).await)
    }

    #[instrument(skip(self))]
    async fn fetch_user_scores(
        &self,
        user_id: u32,
        kind: ScoreKind,
        mode: Option<GameMode>,
        limit: u8,
    ) -> Vec<Score> {
        or_empty(
            "fetch_user_scores",
            self.client.user_scores(user_id, kind, mode, limit).await,
        )
    }

    #[instrument(skip(self))]
    async fn fetch_beatmap(&self, beatmap_id: u32) -> Option<Beatmap> {
        or_none("fetch_beatmap", self.client.beatmap(beatmap_id).await)
    }

    #[instrument(skip(self))]
    async fn fetch_beatmap_scores(
        &self,
        beatmap_id: u32,
        mode: Option<GameMode>,
        limit: u8,
    ) -> Vec<Score> {
        or_empty(
            "fetch_beatmap_scores",
            self.client.beatmap_scores(beatmap_id, mode, limit).await,
        )
    }

    #[instrument(skip(self))]
    async fn search_beatmapsets(
        &self,
        query: &str,
        mode: Option<GameMode>,
        limit: u8,
    ) -> Vec<Beatmapset> {
        or_empty(
            "search_beatmapsets",
            self.client.search_beatmapsets(query, mode, limit).await,
        )
    }
}
