//! Expected command outcomes that are not successes.

use osulink_error::{DatabaseError, OsuLinkError};

/// What a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    /// An osu! user
    User,
    /// A beatmap
    Beatmap,
}

/// Whose link record was missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// The user who ran the command
    Invoker,
    /// A mentioned chat user
    Other(String),
}

/// Which score query came back empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreScope {
    /// Personal bests
    Top,
    /// Recent plays
    Recent,
    /// A beatmap leaderboard
    Leaderboard,
    /// One player's plays on a beatmap, named when known
    Beatmap {
        /// Display name of the player
        player: Option<String>,
    },
}

/// A command that did not produce its normal result.
///
/// Every variant except [`CommandFailure::Internal`] is an expected outcome
/// with its own message; internal failures are logged and shown generically.
#[derive(Debug, derive_more::Display)]
pub enum CommandFailure {
    /// The user or beatmap does not exist (or could not be fetched)
    #[display("{_0:?} not found")]
    NotFound(Missing),
    /// The target chat user has no link record
    #[display("{_0:?} is not linked")]
    Unlinked(LinkTarget),
    /// The query succeeded but held no scores
    #[display("no scores ({_0:?})")]
    NoScores(ScoreScope),
    /// A search matched nothing
    #[display("no results")]
    NoResults,
    /// The requested recent play does not exist
    #[display("index {requested} out of range, {available} available")]
    IndexOutOfRange {
        /// 1-based index the user asked for
        requested: u8,
        /// How many plays exist
        available: usize,
    },
    /// The invocation itself was unusable
    #[display("usage: {_0}")]
    Usage(String),
    /// Something unexpected went wrong
    #[display("{_0}")]
    Internal(OsuLinkError),
}

impl std::error::Error for CommandFailure {}

impl From<OsuLinkError> for CommandFailure {
    fn from(err: OsuLinkError) -> Self {
        CommandFailure::Internal(err)
    }
}

impl From<DatabaseError> for CommandFailure {
    fn from(err: DatabaseError) -> Self {
        CommandFailure::Internal(err.into())
    }
}

/// Result of a resolver or aggregator call.
pub type CommandResult<T> = Result<T, CommandFailure>;
