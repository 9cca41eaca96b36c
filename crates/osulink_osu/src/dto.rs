//! Data transfer objects for the osu! API v2.
//!
//! These mirror the legacy (unversioned) response format. Fields the bot
//! never reads are omitted; counters the API sometimes leaves out default
//! to zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OAuth client-credentials response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token
    pub access_token: String,
    /// Lifetime in seconds
    pub expires_in: u64,
    /// Always "Bearer"
    pub token_type: String,
}

/// Level block of user statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelDto {
    /// Whole level
    pub current: u32,
    /// Percent to next level
    pub progress: f64,
}

/// Grade counts block of user statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradeCountsDto {
    /// SS
    pub ss: u32,
    /// Silver SS
    pub ssh: u32,
    /// S
    pub s: u32,
    /// Silver S
    pub sh: u32,
    /// A
    pub a: u32,
}

/// Per-mode statistics of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatisticsDto {
    /// Level
    #[serde(default)]
    pub level: LevelDto,
    /// Global rank
    pub global_rank: Option<u32>,
    /// Country rank
    pub country_rank: Option<u32>,
    /// Performance points
    #[serde(default)]
    pub pp: f64,
    /// Accuracy in percent
    #[serde(default)]
    pub hit_accuracy: f64,
    /// Play count
    #[serde(default)]
    pub play_count: u64,
    /// Play time in seconds
    pub play_time: Option<u64>,
    /// Total score
    #[serde(default)]
    pub total_score: u64,
    /// Total hits
    #[serde(default)]
    pub total_hits: u64,
    /// Maximum combo
    #[serde(default)]
    pub maximum_combo: u32,
    /// Grade counts
    #[serde(default)]
    pub grade_counts: GradeCountsDto,
}

/// `GET /users/{user}/{mode}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    /// User id
    pub id: u32,
    /// Username
    pub username: String,
    /// Avatar
    #[serde(default)]
    pub avatar_url: String,
    /// Country code
    #[serde(default)]
    pub country_code: String,
    /// Cover image
    pub cover_url: Option<String>,
    /// Online presence
    #[serde(default)]
    pub is_online: bool,
    /// The user's preferred mode
    pub playmode: Option<String>,
    /// Statistics in the requested mode
    pub statistics: Option<UserStatisticsDto>,
}

/// Judgement counters of a score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreStatisticsDto {
    /// 300s
    #[serde(default)]
    pub count_300: Option<u32>,
    /// 100s
    #[serde(default)]
    pub count_100: Option<u32>,
    /// 50s
    #[serde(default)]
    pub count_50: Option<u32>,
    /// Gekis
    #[serde(default)]
    pub count_geki: Option<u32>,
    /// Katus
    #[serde(default)]
    pub count_katu: Option<u32>,
    /// Misses
    #[serde(default)]
    pub count_miss: Option<u32>,
}

/// Weight block of a top play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightDto {
    /// Percent
    pub percentage: f64,
    /// Weighted pp
    pub pp: f64,
}

/// Compact user embedded in scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreUserDto {
    /// User id
    pub id: u32,
    /// Username
    pub username: String,
    /// Country code
    #[serde(default)]
    pub country_code: String,
    /// Avatar
    #[serde(default)]
    pub avatar_url: String,
}

/// A score in any list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDto {
    /// Score id; unsubmitted plays have none
    pub id: Option<u64>,
    /// Player id
    pub user_id: u32,
    /// Accuracy in 0..=1
    pub accuracy: f64,
    /// Mod acronyms
    #[serde(default)]
    pub mods: Vec<String>,
    /// Raw score
    pub score: u64,
    /// Max combo
    pub max_combo: u32,
    /// Full combo
    #[serde(default)]
    pub perfect: bool,
    /// Judgements
    #[serde(default)]
    pub statistics: ScoreStatisticsDto,
    /// Passed or failed
    pub passed: bool,
    /// Performance points
    pub pp: Option<f64>,
    /// Grade
    pub rank: String,
    /// Submission time
    pub created_at: DateTime<Utc>,
    /// Ruleset name
    pub mode: String,
    /// Top play weighting
    pub weight: Option<WeightDto>,
    /// Played difficulty
    pub beatmap: Option<BeatmapDto>,
    /// Played set
    pub beatmapset: Option<BeatmapsetDto>,
    /// Player
    pub user: Option<ScoreUserDto>,
}

/// A beatmap difficulty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeatmapDto {
    /// Beatmap id
    pub id: u32,
    /// Set id
    pub beatmapset_id: u32,
    /// Ruleset name
    pub mode: String,
    /// Star rating
    pub difficulty_rating: f64,
    /// Difficulty name
    pub version: String,
    /// Length in seconds
    #[serde(default)]
    pub total_length: u32,
    /// Drain length in seconds
    #[serde(default)]
    pub hit_length: u32,
    /// BPM
    pub bpm: Option<f64>,
    /// Circle size
    #[serde(default)]
    pub cs: f64,
    /// HP drain
    #[serde(default)]
    pub drain: f64,
    /// Overall difficulty
    #[serde(default)]
    pub accuracy: f64,
    /// Approach rate
    #[serde(default)]
    pub ar: f64,
    /// Plays
    #[serde(default)]
    pub playcount: u64,
    /// Passes
    #[serde(default)]
    pub passcount: u64,
    /// Circles
    #[serde(default)]
    pub count_circles: u32,
    /// Sliders
    #[serde(default)]
    pub count_sliders: u32,
    /// Spinners
    #[serde(default)]
    pub count_spinners: u32,
    /// Owning set
    pub beatmapset: Option<BeatmapsetDto>,
}

/// Cover images of a set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoversDto {
    /// Header
    #[serde(default)]
    pub cover: String,
    /// Card
    #[serde(default)]
    pub card: String,
    /// Thumbnail
    #[serde(default)]
    pub list: String,
}

/// A beatmapset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeatmapsetDto {
    /// Set id
    pub id: u32,
    /// Artist
    pub artist: String,
    /// Title
    pub title: String,
    /// Mapper
    pub creator: String,
    /// Ranked status
    pub status: String,
    /// Artwork
    #[serde(default)]
    pub covers: CoversDto,
    /// Ranked date
    pub ranked_date: Option<DateTime<Utc>>,
    /// Difficulties (search results only)
    #[serde(default)]
    pub beatmaps: Vec<BeatmapDto>,
}

/// `GET /beatmaps/{id}/scores` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeatmapScoresDto {
    /// Leaderboard, best first
    pub scores: Vec<ScoreDto>,
}

/// `GET /beatmapsets/search` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeatmapsetSearchDto {
    /// Matching sets
    #[serde(default)]
    pub beatmapsets: Vec<BeatmapsetDto>,
}
