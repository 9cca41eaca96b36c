//! Statistics gateway trait.

use async_trait::async_trait;
use osulink_core::{Beatmap, Beatmapset, GameMode, Score, ScoreKind, User, UserRef};

/// Capability-oriented view of the osu! API.
///
/// Every call degrades to `None` or an empty list when the upstream call
/// fails for any reason, so "not found" and "unreachable" look the same to
/// callers. Implementations do not retry.
#[async_trait]
pub trait StatsGateway: Send + Sync {
    /// Fetch a user, with statistics for `mode` (the user's default mode when `None`).
    async fn fetch_user(&self, user: &UserRef, mode: Option<GameMode>) -> Option<User>;

    /// Fetch a user's best or recent plays.
    ///
    /// Best plays are ordered by performance; recent plays newest first and
    /// include failed attempts.
    async fn fetch_user_scores(
        &self,
        user_id: u32,
        kind: ScoreKind,
        mode: Option<GameMode>,
        limit: u8,
    ) -> Vec<Score>;

    /// Fetch a single difficulty, with its set attached.
    async fn fetch_beatmap(&self, beatmap_id: u32) -> Option<Beatmap>;

    /// Fetch the top of a beatmap's leaderboard.
    ///
    /// The returned order is the leaderboard order (descending score) and
    /// callers rely on it for positions.
    async fn fetch_beatmap_scores(
        &self,
        beatmap_id: u32,
        mode: Option<GameMode>,
        limit: u8,
    ) -> Vec<Score>;

    /// Search beatmapsets by free text.
    async fn search_beatmapsets(
        &self,
        query: &str,
        mode: Option<GameMode>,
        limit: u8,
    ) -> Vec<Beatmapset>;
}
