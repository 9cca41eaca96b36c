//! Beatmaps and beatmapsets.

use crate::{GameMode, OSU_WEB_URL};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Artwork of a beatmapset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Covers {
    /// Wide header image
    pub cover: String,
    /// Card image
    pub card: String,
    /// Square list thumbnail
    pub list: String,
}

/// A single difficulty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Beatmap {
    /// Beatmap id
    pub id: u32,
    /// Owning set
    pub beatmapset_id: u32,
    /// Ruleset the difficulty is mapped for
    pub mode: GameMode,
    /// Star rating
    pub difficulty_rating: f64,
    /// Difficulty name
    pub version: String,
    /// Length in seconds, breaks included
    pub total_length: u32,
    /// Drain length in seconds
    pub hit_length: u32,
    /// Beats per minute
    pub bpm: f64,
    /// Circle size
    pub cs: f64,
    /// HP drain
    pub drain: f64,
    /// Overall difficulty
    pub accuracy: f64,
    /// Approach rate
    pub ar: f64,
    /// Number of plays
    pub playcount: u64,
    /// Number of passes
    pub passcount: u64,
    /// Hit circles
    pub count_circles: u32,
    /// Sliders
    pub count_sliders: u32,
    /// Spinners
    pub count_spinners: u32,
    /// Owning set, when the API embeds it
    pub beatmapset: Option<Beatmapset>,
}

impl Beatmap {
    /// All hit objects.
    pub fn object_count(&self) -> u32 {
        self.count_circles + self.count_sliders + self.count_spinners
    }

    /// Combo ceiling shown next to a play's combo.
    pub fn combo_ceiling(&self) -> u32 {
        self.count_circles + self.count_sliders
    }

    /// Share of plays that passed, in percent. Absent for never-played maps.
    pub fn pass_rate(&self) -> Option<f64> {
        (self.playcount > 0).then(|| self.passcount as f64 / self.playcount as f64 * 100.0)
    }

    /// Difficulty page.
    pub fn url(&self) -> String {
        format!(
            "{OSU_WEB_URL}/beatmapsets/{}#{}/{}",
            self.beatmapset_id, self.mode, self.id
        )
    }
}

/// A set of difficulties sharing one song.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Beatmapset {
    /// Set id
    pub id: u32,
    /// Song artist
    pub artist: String,
    /// Song title
    pub title: String,
    /// Mapper
    pub creator: String,
    /// Ranked status as the API names it
    pub status: String,
    /// Artwork
    pub covers: Covers,
    /// Ranked date, absent for unranked sets
    pub ranked_date: Option<DateTime<Utc>>,
    /// Child difficulties, only present in search results
    pub beatmaps: Vec<Beatmap>,
}

impl Beatmapset {
    /// Set page.
    pub fn url(&self) -> String {
        format!("{OSU_WEB_URL}/beatmapsets/{}", self.id)
    }

    /// `Artist - Title`.
    pub fn display_title(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}
