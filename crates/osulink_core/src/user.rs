//! osu! users.

use crate::{GameMode, OSU_WEB_URL};
use serde::{Deserialize, Serialize};

/// How a command names an osu! user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRef {
    /// Numeric user id
    Id(u32),
    /// Username as typed
    Username(String),
}

impl UserRef {
    /// Interpret user input: all-digit input is an id, anything else a username.
    ///
    /// ```
    /// use osulink_core::UserRef;
    ///
    /// assert_eq!(UserRef::parse(" 2 "), UserRef::Id(2));
    /// assert_eq!(UserRef::parse("peppy"), UserRef::Username("peppy".into()));
    /// ```
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<u32>() {
            Ok(id) => UserRef::Id(id),
            Err(_) => UserRef::Username(trimmed.to_string()),
        }
    }

    /// The `key` query parameter the users endpoint expects.
    pub fn key(&self) -> &'static str {
        match self {
            UserRef::Id(_) => "id",
            UserRef::Username(_) => "username",
        }
    }
}

impl std::fmt::Display for UserRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRef::Id(id) => write!(f, "{id}"),
            UserRef::Username(name) => f.write_str(name),
        }
    }
}

impl From<u32> for UserRef {
    fn from(id: u32) -> Self {
        UserRef::Id(id)
    }
}

/// Player level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Whole level
    pub current: u32,
    /// Progress to the next level, in percent
    pub progress: f64,
}

/// Counts of top grades.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCounts {
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
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStatistics {
    /// Level and progress
    pub level: Level,
    /// Global performance rank, absent when inactive
    pub global_rank: Option<u32>,
    /// Country performance rank, absent when inactive
    pub country_rank: Option<u32>,
    /// Total performance points
    pub pp: f64,
    /// Weighted accuracy, in percent (0..100)
    pub hit_accuracy: f64,
    /// Number of plays
    pub play_count: u64,
    /// Time played, in seconds
    pub play_time: u64,
    /// Sum of all scores
    pub total_score: u64,
    /// Total hits
    pub total_hits: u64,
    /// Highest combo ever reached
    pub maximum_combo: u32,
    /// Grade counts
    pub grade_counts: GradeCounts,
}

/// An osu! user as seen in one mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User id
    pub id: u32,
    /// Current username
    pub username: String,
    /// Avatar image
    pub avatar_url: String,
    /// ISO country code
    pub country_code: String,
    /// Profile cover image
    pub cover_url: Option<String>,
    /// Online presence
    pub is_online: bool,
    /// Mode the statistics belong to
    pub mode: GameMode,
    /// Statistics in `mode`
    pub statistics: Option<UserStatistics>,
}

impl User {
    /// Profile page.
    pub fn url(&self) -> String {
        format!("{OSU_WEB_URL}/users/{}", self.id)
    }
}
