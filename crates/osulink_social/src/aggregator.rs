//! Score and leaderboard aggregation over the statistics gateway.
//!
//! Every operation is read-only. The gateway's leaderboard order is treated as
//! authoritative: positions and ranks are indices into the sequence as
//! fetched, never recomputed from score values.

use crate::outcome::{CommandFailure, CommandResult, Missing, ScoreScope};
use crate::resolver::ResolvedIdentity;
use derive_getters::Getters;
use osulink_core::{Beatmap, Beatmapset, GameMode, Score, ScoreKind, User, UserRef};
use osulink_interface::StatsGateway;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Leaderboard window searched for one player's scores on a beatmap.
pub const BEATMAP_SCORES_WINDOW: u8 = 50;
/// Recent plays fetched per lookup.
pub const RECENT_WINDOW: u8 = 10;
/// Upper bound for top plays, leaderboard size and recent index.
pub const MAX_LIST_LIMIT: u8 = 10;
/// Upper bound for search results.
pub const MAX_SEARCH_LIMIT: u8 = 5;

/// A player's best play on one beatmap.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct BestScore {
    beatmap: Beatmap,
    score: Score,
    /// 1-based leaderboard position; absent when outside the fetched window
    position: Option<usize>,
    /// Plays by the same player inside the window
    play_count: usize,
}

/// A leaderboard entry with its positional rank.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct RankedScore {
    rank: usize,
    score: Score,
}

/// Top of a beatmap's leaderboard.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Leaderboard {
    beatmap: Beatmap,
    mode: GameMode,
    entries: Vec<RankedScore>,
}

/// Whether a recent play was completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayStatus {
    /// Passed
    Completed,
    /// Failed or quit
    Failed,
}

impl From<&Score> for PlayStatus {
    fn from(score: &Score) -> Self {
        if score.passed {
            PlayStatus::Completed
        } else {
            PlayStatus::Failed
        }
    }
}

/// The Nth most recent play.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct RecentPlay {
    /// 1-based index that was requested
    index: u8,
    score: Score,
    status: PlayStatus,
}

/// Star rating spread of a set's difficulties in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct DifficultyRange {
    min: f64,
    max: f64,
    count: usize,
}

/// One beatmapset in search results.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct SearchHit {
    beatmapset: Beatmapset,
    difficulty: Option<DifficultyRange>,
}

/// Picks the player's highest raw score from a leaderboard window.
///
/// Ties keep the earliest entry, so the result is stable for a fixed window.
/// Returns the best score, its 1-based position and the player's play count.
pub fn select_best(leaderboard: &[Score], user_id: u32) -> Option<(Score, Option<usize>, usize)> {
    let mut best: Option<&Score> = None;
    let mut play_count = 0;
    for score in leaderboard.iter().filter(|s| s.user_id == user_id) {
        play_count += 1;
        if best.is_none_or(|b| score.score > b.score) {
            best = Some(score);
        }
    }
    let best = best?;
    let position = leaderboard
        .iter()
        .position(|s| s.id == best.id)
        .map(|i| i + 1);
    Some((best.clone(), position, play_count))
}

/// Difficulty range of `set` restricted to `mode`; absent when no child matches.
pub fn difficulty_range(set: &Beatmapset, mode: GameMode) -> Option<DifficultyRange> {
    let mut ratings: Vec<f64> = set
        .beatmaps
        .iter()
        .filter(|b| b.mode == mode)
        .map(|b| b.difficulty_rating)
        .collect();
    ratings.sort_by(f64::total_cmp);
    let (min, max) = (*ratings.first()?, *ratings.last()?);
    Some(DifficultyRange {
        min,
        max,
        count: ratings.len(),
    })
}

/// Orchestrates gateway calls for every score-centric command.
#[derive(Clone)]
pub struct ScoreAggregator {
    gateway: Arc<dyn StatsGateway>,
}

impl std::fmt::Debug for ScoreAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreAggregator").finish_non_exhaustive()
    }
}

impl ScoreAggregator {
    /// Create an aggregator over a gateway.
    pub fn new(gateway: Arc<dyn StatsGateway>) -> Self {
        Self { gateway }
    }

    /// Numeric id for an identity, looking usernames up in the identity's mode.
    ///
    /// # Errors
    ///
    /// [`CommandFailure::NotFound`] when a username does not resolve.
    #[instrument(skip(self, identity), fields(external_ref = %identity.external_ref()))]
    pub async fn user_id(&self, identity: &ResolvedIdentity) -> CommandResult<u32> {
        match identity.external_ref() {
            UserRef::Id(id) => Ok(*id),
            named @ UserRef::Username(_) => self
                .gateway
                .fetch_user(named, Some(*identity.mode()))
                .await
                .map(|user| user.id)
                .ok_or(CommandFailure::NotFound(Missing::User)),
        }
    }

    /// A user with statistics in `mode`.
    ///
    /// # Errors
    ///
    /// [`CommandFailure::NotFound`] when the user is absent.
    #[instrument(skip(self))]
    pub async fn player(&self, user: &UserRef, mode: GameMode) -> CommandResult<User> {
        self.gateway
            .fetch_user(user, Some(mode))
            .await
            .ok_or(CommandFailure::NotFound(Missing::User))
    }

    /// Profile of the resolved identity in its effective mode.
    ///
    /// # Errors
    ///
    /// [`CommandFailure::NotFound`] when the user is absent.
    pub async fn profile(&self, identity: &ResolvedIdentity) -> CommandResult<User> {
        self.player(identity.external_ref(), *identity.mode()).await
    }

    /// A single beatmap.
    ///
    /// # Errors
    ///
    /// [`CommandFailure::NotFound`] when the beatmap is absent.
    #[instrument(skip(self))]
    pub async fn beatmap(&self, beatmap_id: u32) -> CommandResult<Beatmap> {
        self.gateway
            .fetch_beatmap(beatmap_id)
            .await
            .ok_or(CommandFailure::NotFound(Missing::Beatmap))
    }

    /// The identity's best score on a beatmap and where it sits on the leaderboard.
    ///
    /// # Errors
    ///
    /// [`CommandFailure::NotFound`] for a missing beatmap or username,
    /// [`CommandFailure::NoScores`] when the player has no score in the window.
    #[instrument(skip(self, identity), fields(external_ref = %identity.external_ref(), mode = %identity.mode()))]
    pub async fn best_score_on_beatmap(
        &self,
        beatmap_id: u32,
        identity: &ResolvedIdentity,
    ) -> CommandResult<BestScore> {
        let beatmap = self.beatmap(beatmap_id).await?;
        let user_id = self.user_id(identity).await?;

        let leaderboard = self
            .gateway
            .fetch_beatmap_scores(beatmap_id, Some(*identity.mode()), BEATMAP_SCORES_WINDOW)
            .await;

        let (score, position, play_count) = select_best(&leaderboard, user_id)
            .ok_or(CommandFailure::NoScores(ScoreScope::Beatmap { player: None }))?;

        debug!(score_id = score.id, ?position, play_count, "Selected best score");
        Ok(BestScore {
            beatmap,
            score,
            position,
            play_count,
        })
    }

    /// Top `limit` scores of a beatmap, ranked by position.
    ///
    /// # Errors
    ///
    /// [`CommandFailure::NotFound`] for a missing beatmap,
    /// [`CommandFailure::NoScores`] for an empty leaderboard.
    #[instrument(skip(self))]
    pub async fn leaderboard(
        &self,
        beatmap_id: u32,
        mode: GameMode,
        limit: u8,
    ) -> CommandResult<Leaderboard> {
        let limit = limit.clamp(1, MAX_LIST_LIMIT);
        let beatmap = self.beatmap(beatmap_id).await?;
        let scores = self
            .gateway
            .fetch_beatmap_scores(beatmap_id, Some(mode), limit)
            .await;
        if scores.is_empty() {
            return Err(CommandFailure::NoScores(ScoreScope::Leaderboard));
        }

        let entries = scores
            .into_iter()
            .enumerate()
            .map(|(i, score)| RankedScore { rank: i + 1, score })
            .collect();
        Ok(Leaderboard {
            beatmap,
            mode,
            entries,
        })
    }

    /// The `index`-th most recent play, failed attempts included.
    ///
    /// # Errors
    ///
    /// [`CommandFailure::NoScores`] without recent plays,
    /// [`CommandFailure::IndexOutOfRange`] when fewer than `index` exist.
    #[instrument(skip(self, identity), fields(external_ref = %identity.external_ref(), mode = %identity.mode()))]
    pub async fn recent_play(&self, identity: &ResolvedIdentity, index: u8) -> CommandResult<RecentPlay> {
        let index = index.clamp(1, MAX_LIST_LIMIT);
        let user_id = self.user_id(identity).await?;
        let mut scores = self
            .gateway
            .fetch_user_scores(user_id, ScoreKind::Recent, Some(*identity.mode()), RECENT_WINDOW)
            .await;

        if scores.is_empty() {
            return Err(CommandFailure::NoScores(ScoreScope::Recent));
        }
        let available = scores.len();
        if usize::from(index) > available {
            return Err(CommandFailure::IndexOutOfRange {
                requested: index,
                available,
            });
        }

        let score = scores.swap_remove(usize::from(index) - 1);
        let status = PlayStatus::from(&score);
        Ok(RecentPlay {
            index,
            score,
            status,
        })
    }

    /// Up to `limit` personal bests, in the gateway's order.
    ///
    /// # Errors
    ///
    /// [`CommandFailure::NoScores`] when the player has none.
    #[instrument(skip(self, identity), fields(external_ref = %identity.external_ref(), mode = %identity.mode()))]
    pub async fn top_plays(&self, identity: &ResolvedIdentity, limit: u8) -> CommandResult<Vec<Score>> {
        let limit = limit.clamp(1, MAX_LIST_LIMIT);
        let user_id = self.user_id(identity).await?;
        let scores = self
            .gateway
            .fetch_user_scores(user_id, ScoreKind::Best, Some(*identity.mode()), limit)
            .await;
        if scores.is_empty() {
            return Err(CommandFailure::NoScores(ScoreScope::Top));
        }
        Ok(scores)
    }

    /// Beatmapsets matching `query`, each with its difficulty range in `mode`.
    ///
    /// # Errors
    ///
    /// [`CommandFailure::NoResults`] when nothing matches.
    #[instrument(skip(self))]
    pub async fn beatmap_search(
        &self,
        query: &str,
        mode: GameMode,
        limit: u8,
    ) -> CommandResult<Vec<SearchHit>> {
        let limit = limit.clamp(1, MAX_SEARCH_LIMIT);
        let sets = self
            .gateway
            .search_beatmapsets(query, Some(mode), limit)
            .await;
        if sets.is_empty() {
            return Err(CommandFailure::NoResults);
        }

        Ok(sets
            .into_iter()
            .map(|beatmapset| SearchHit {
                difficulty: difficulty_range(&beatmapset, mode),
                beatmapset,
            })
            .collect())
    }
}
