//! Scores.

use crate::{Beatmap, Beatmapset, GameMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which per-user score list to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    /// Personal bests, ordered by performance
    Best,
    /// Latest plays, newest first, failed attempts included
    Recent,
}

impl ScoreKind {
    /// Path segment of the scores endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreKind::Best => "best",
            ScoreKind::Recent => "recent",
        }
    }

    /// Whether failed attempts belong in the list.
    pub fn includes_fails(self) -> bool {
        matches!(self, ScoreKind::Recent)
    }
}

/// Letter grade of a play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Silver SS
    XH,
    /// SS
    X,
    /// Silver S
    SH,
    /// S
    S,
    /// A
    A,
    /// B
    B,
    /// C
    C,
    /// D
    D,
    /// Failed
    #[default]
    F,
}

impl Grade {
    /// Grade as the API spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::XH => "XH",
            Grade::X => "X",
            Grade::SH => "SH",
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned for grade strings the API is not known to send.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("unknown grade: {_0}")]
pub struct ParseGradeError(pub String);

impl std::error::Error for ParseGradeError {}

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "XH" => Grade::XH,
            "X" => Grade::X,
            "SH" => Grade::SH,
            "S" => Grade::S,
            "A" => Grade::A,
            "B" => Grade::B,
            "C" => Grade::C,
            "D" => Grade::D,
            "F" => Grade::F,
            other => return Err(ParseGradeError(other.to_string())),
        })
    }
}

/// Judgement counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitCounts {
    /// 300s
    pub count_300: u32,
    /// 100s
    pub count_100: u32,
    /// 50s
    pub count_50: u32,
    /// Gekis
    pub count_geki: u32,
    /// Katus
    pub count_katu: u32,
    /// Misses
    pub count_miss: u32,
}

/// Weighting of a play inside a user's top list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeight {
    /// Weight in percent
    pub percentage: f64,
    /// Weighted pp
    pub pp: f64,
}

/// The player attached to a leaderboard score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreUser {
    /// User id
    pub id: u32,
    /// Username
    pub username: String,
    /// ISO country code
    pub country_code: String,
    /// Avatar image
    pub avatar_url: String,
}

/// Immutable snapshot of a single play.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Score id, unique across the service
    pub id: u64,
    /// Player id
    pub user_id: u32,
    /// Raw score value; leaderboards order by it
    pub score: u64,
    /// Accuracy in 0..=1
    pub accuracy: f64,
    /// Highest combo in the play
    pub max_combo: u32,
    /// Mod acronyms in the order the API lists them
    pub mods: Vec<String>,
    /// False for failed attempts
    pub passed: bool,
    /// Full combo
    pub perfect: bool,
    /// Performance points, absent for unranked plays
    pub pp: Option<f64>,
    /// Letter grade
    pub rank: Grade,
    /// When the play was submitted
    pub created_at: DateTime<Utc>,
    /// Mode the play was made in
    pub mode: GameMode,
    /// Judgements
    pub statistics: HitCounts,
    /// Weighting, only present in top lists
    pub weight: Option<ScoreWeight>,
    /// Difficulty that was played
    pub beatmap: Option<Beatmap>,
    /// Set of the played difficulty
    pub beatmapset: Option<Beatmapset>,
    /// Player summary
    pub user: Option<ScoreUser>,
}

impl Score {
    /// The beatmapset, whether the API attached it to the score or to its beatmap.
    pub fn beatmapset(&self) -> Option<&Beatmapset> {
        self.beatmapset
            .as_ref()
            .or_else(|| self.beatmap.as_ref().and_then(|b| b.beatmapset.as_ref()))
    }

    /// Name to show for the player.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beatmapset_falls_back_to_beatmap() {
        let set = Beatmapset {
            id: 3,
            ..Default::default()
        };
        let score = Score {
            beatmap: Some(Beatmap {
                id: 4,
                beatmapset: Some(set.clone()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(score.beatmapset().map(|s| s.id), Some(3));
    }

    #[test]
    fn grades_parse_from_api_spelling() {
        assert_eq!("SH".parse::<Grade>(), Ok(Grade::SH));
        assert!("SSS".parse::<Grade>().is_err());
    }

    #[test]
    fn only_recent_includes_fails() {
        assert!(ScoreKind::Recent.includes_fails());
        assert!(!ScoreKind::Best.includes_fails());
    }
}
