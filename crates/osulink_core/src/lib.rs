//! Core data types for osulink.
//!
//! Everything here is a plain value: the locally owned [`LinkRecord`] and
//! snapshots of remote osu! entities ([`User`], [`Score`], [`Beatmap`],
//! [`Beatmapset`]). Every score and user reference travels with a
//! [`GameMode`] so lookups never mix modes.

#![warn(missing_docs)]

mod beatmap;
mod link;
mod mode;
mod score;
mod user;

pub use beatmap::{Beatmap, Beatmapset, Covers};
pub use link::LinkRecord;
pub use mode::{GameMode, ParseGameModeError};
pub use score::{Grade, HitCounts, ParseGradeError, Score, ScoreKind, ScoreUser, ScoreWeight};
pub use user::{GradeCounts, Level, User, UserRef, UserStatistics};

/// Base URL of the osu! website, used to build profile and beatmap links.
pub const OSU_WEB_URL: &str = "https://osu.ppy.sh";
