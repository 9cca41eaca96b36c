//! Chat-facing logic for osulink.
//!
//! The pipeline for every command is the same:
//!
//! 1. A transport parses platform input into an [`Invocation`]
//!    ([`parse_command`] does the platform-neutral part).
//! 2. [`IdentityResolver`] turns the `{username, user, mode}` triple into a
//!    [`ResolvedIdentity`] or an `Unlinked` failure.
//! 3. [`ScoreAggregator`] calls the statistics gateway and derives best
//!    scores, leaderboard positions, recent plays and search ranges.
//! 4. [`views`] renders the result, or the failure, into [`View`]s.
//!
//! # Platform Support
//!
//! - `discord` - serenity-based slash command transport (requires `discord` feature)

#![warn(missing_docs)]

mod aggregator;
mod commands;
pub mod format;
mod options;
mod outcome;
mod resolver;
pub mod views;

#[cfg(feature = "discord")]
pub mod discord;

pub use aggregator::{
    BEATMAP_SCORES_WINDOW, BestScore, DifficultyRange, Leaderboard, MAX_LIST_LIMIT,
    MAX_SEARCH_LIMIT, PlayStatus, RECENT_WINDOW, RankedScore, RecentPlay, ScoreAggregator,
    SearchHit, difficulty_range, select_best,
};
pub use commands::{
    DEFAULT_INDEX, DEFAULT_LIMIT, Invocation, OsuCommand, OsuCommandExecutor, clamp_option,
};
pub use options::{CommandOptions, OptionValue, ParseCommandError, parse_command};
pub use outcome::{CommandFailure, CommandResult, LinkTarget, Missing, ScoreScope};
pub use resolver::{IdentityResolver, IdentitySource, ResolvedIdentity, TargetArgs};
pub use views::{View, ViewField};
