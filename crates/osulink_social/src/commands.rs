//! Chat commands and their execution.
//!
//! Transports parse platform input into an [`Invocation`] and hand it to
//! [`OsuCommandExecutor::execute`], which always answers with one or two
//! [`View`]s. Expected failures become their own messages; anything
//! unexpected is logged and answered generically.

use crate::aggregator::{MAX_SEARCH_LIMIT, ScoreAggregator};
use crate::outcome::{CommandFailure, CommandResult, LinkTarget, ScoreScope};
use crate::resolver::{IdentityResolver, TargetArgs};
use crate::views::{self, View};
use osulink_core::{GameMode, UserRef};
use osulink_interface::{LinkStore, StatsGateway};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Default number of top plays and leaderboard entries.
pub const DEFAULT_LIMIT: u8 = 5;
/// Default recent play index.
pub const DEFAULT_INDEX: u8 = 1;

/// Clamp an optional integer option into `1..=max`, using `default` when absent.
pub fn clamp_option(value: Option<i64>, default: u8, max: u8) -> u8 {
    value
        .map(|v| v.clamp(1, i64::from(max)))
        .and_then(|v| u8::try_from(v).ok())
        .unwrap_or(default)
}

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsuCommand {
    /// Link the invoker to an osu! account
    Link {
        /// osu! username or id
        username: String,
        /// Default mode to store
        mode: Option<GameMode>,
    },
    /// Remove the invoker's link
    Unlink,
    /// Change the invoker's default mode
    Mode {
        /// New default mode
        mode: GameMode,
    },
    /// Show a profile
    Profile(TargetArgs),
    /// Show personal bests
    Top {
        /// Whose plays
        target: TargetArgs,
        /// How many, 1..=10
        limit: u8,
    },
    /// Show one recent play
    Recent {
        /// Whose play
        target: TargetArgs,
        /// Which one, 1..=10
        index: u8,
    },
    /// Show a player's best score on a beatmap
    Compare {
        /// Beatmap id
        beatmap_id: u32,
        /// Whose score
        target: TargetArgs,
    },
    /// Show a beatmap leaderboard
    Leaderboard {
        /// Beatmap id
        beatmap_id: u32,
        /// Ruleset, standard when absent
        mode: Option<GameMode>,
        /// How many entries, 1..=10
        limit: u8,
    },
    /// Show a beatmap or search for one
    Map {
        /// Beatmap id
        id: Option<u32>,
        /// Free text query
        search: Option<String>,
        /// Ruleset for search, standard when absent
        mode: Option<GameMode>,
    },
    /// Show the command reference
    Help,
}

impl OsuCommand {
    /// Every command name, in help order.
    pub const NAMES: [&'static str; 10] = [
        "link",
        "unlink",
        "mode",
        "profile",
        "top",
        "recent",
        "compare",
        "leaderboard",
        "map",
        "help",
    ];

    /// Slash command name.
    pub fn name(&self) -> &'static str {
        match self {
            OsuCommand::Link { .. } => "link",
            OsuCommand::Unlink => "unlink",
            OsuCommand::Mode { .. } => "mode",
            OsuCommand::Profile(_) => "profile",
            OsuCommand::Top { .. } => "top",
            OsuCommand::Recent { .. } => "recent",
            OsuCommand::Compare { .. } => "compare",
            OsuCommand::Leaderboard { .. } => "leaderboard",
            OsuCommand::Map { .. } => "map",
            OsuCommand::Help => "help",
        }
    }

    /// What the command was doing, for generic error messages.
    pub fn action(&self) -> &'static str {
        match self {
            OsuCommand::Link { .. } => "linking your account",
            OsuCommand::Unlink => "unlinking your account",
            OsuCommand::Mode { .. } => "updating your mode",
            OsuCommand::Profile(_) => "fetching the profile",
            OsuCommand::Top { .. } => "fetching top plays",
            OsuCommand::Recent { .. } => "fetching recent plays",
            OsuCommand::Compare { .. } => "comparing scores",
            OsuCommand::Leaderboard { .. } => "fetching the leaderboard",
            OsuCommand::Map { .. } => "fetching beatmap information",
            OsuCommand::Help => "showing help",
        }
    }
}

/// A command together with the chat user who sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Chat user id of the sender
    pub invoker: String,
    /// The command
    pub command: OsuCommand,
}

impl Invocation {
    /// Create an invocation.
    pub fn new(invoker: impl Into<String>, command: OsuCommand) -> Self {
        Self {
            invoker: invoker.into(),
            command,
        }
    }
}

/// Runs commands against a link store and a statistics gateway.
#[derive(Clone)]
pub struct OsuCommandExecutor {
    store: Arc<dyn LinkStore>,
    resolver: IdentityResolver,
    aggregator: ScoreAggregator,
}

impl std::fmt::Debug for OsuCommandExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsuCommandExecutor").finish_non_exhaustive()
    }
}

impl OsuCommandExecutor {
    /// Create an executor. Both collaborators are shared, never per request.
    pub fn new(store: Arc<dyn LinkStore>, gateway: Arc<dyn StatsGateway>) -> Self {
        Self {
            resolver: IdentityResolver::new(store.clone()),
            aggregator: ScoreAggregator::new(gateway),
            store,
        }
    }

    /// The resolver used for per-player commands.
    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    /// The aggregator used for score commands.
    pub fn aggregator(&self) -> &ScoreAggregator {
        &self.aggregator
    }

    /// Execute an invocation. Always returns at least one view.
    #[instrument(skip(self, invocation), fields(command = invocation.command.name(), invoker = %invocation.invoker))]
    pub async fn execute(&self, invocation: &Invocation) -> Vec<View> {
        match self.run(invocation).await {
            Ok(views) => views,
            Err(CommandFailure::Internal(e)) => {
                error!(error = %e, "Command failed unexpectedly");
                vec![views::failure_view(
                    &CommandFailure::Internal(e),
                    invocation.command.action(),
                )]
            }
            Err(failure) => {
                debug!(%failure, "Command finished without a result");
                vec![views::failure_view(&failure, invocation.command.action())]
            }
        }
    }

    async fn run(&self, invocation: &Invocation) -> CommandResult<Vec<View>> {
        let invoker = invocation.invoker.as_str();
        match &invocation.command {
            OsuCommand::Link { username, mode } => self.link(invoker, username, *mode).await,
            OsuCommand::Unlink => self.unlink(invoker).await,
            OsuCommand::Mode { mode } => self.set_mode(invoker, *mode).await,
            OsuCommand::Profile(target) => {
                let identity = self.resolver.resolve(invoker, target).await?;
                let user = self.aggregator.profile(&identity).await?;
                Ok(vec![views::user_view(&user)])
            }
            OsuCommand::Top { target, limit } => {
                let identity = self.resolver.resolve(invoker, target).await?;
                let scores = self.aggregator.top_plays(&identity, *limit).await?;
                let user_id = scores
                    .first()
                    .map(|s| s.user_id)
                    .ok_or(CommandFailure::NoScores(ScoreScope::Top))?;
                let player = self
                    .aggregator
                    .player(&UserRef::Id(user_id), *identity.mode())
                    .await?;
                Ok(views::top_plays_views(&player, &scores))
            }
            OsuCommand::Recent { target, index } => {
                let identity = self.resolver.resolve(invoker, target).await?;
                let play = self.aggregator.recent_play(&identity, *index).await?;
                let player = self
                    .aggregator
                    .player(&UserRef::Id(play.score().user_id), *identity.mode())
                    .await?;
                Ok(vec![views::recent_view(&player, &play)])
            }
            OsuCommand::Compare { beatmap_id, target } => {
                self.compare(invoker, *beatmap_id, target).await
            }
            OsuCommand::Leaderboard {
                beatmap_id,
                mode,
                limit,
            } => {
                let board = self
                    .aggregator
                    .leaderboard(*beatmap_id, mode.unwrap_or_default(), *limit)
                    .await?;
                Ok(vec![views::leaderboard_view(&board)])
            }
            OsuCommand::Map { id, search, mode } => self.map(*id, search.as_deref(), *mode).await,
            OsuCommand::Help => Ok(vec![views::help_view()]),
        }
    }

    async fn link(
        &self,
        invoker: &str,
        username: &str,
        mode: Option<GameMode>,
    ) -> CommandResult<Vec<View>> {
        let username = username.trim();
        if username.is_empty() {
            return Err(CommandFailure::Usage(
                "Please provide your osu! username.".to_string(),
            ));
        }
        let mode = mode.unwrap_or_default();
        let user = self.aggregator.player(&UserRef::parse(username), mode).await?;
        self.store.set(invoker, user.id, &user.username, mode).await?;
        info!(osu_user_id = user.id, %mode, "Linked account");
        Ok(vec![views::linked_view(&user, mode)])
    }

    async fn unlink(&self, invoker: &str) -> CommandResult<Vec<View>> {
        if !self.store.delete(invoker).await? {
            return Err(CommandFailure::Unlinked(LinkTarget::Invoker));
        }
        info!("Unlinked account");
        Ok(vec![views::unlinked_view()])
    }

    async fn set_mode(&self, invoker: &str, mode: GameMode) -> CommandResult<Vec<View>> {
        if !self.store.update_mode(invoker, mode).await? {
            return Err(CommandFailure::Unlinked(LinkTarget::Invoker));
        }
        info!(%mode, "Updated default mode");
        Ok(vec![views::mode_view(mode)])
    }

    async fn compare(
        &self,
        invoker: &str,
        beatmap_id: u32,
        target: &TargetArgs,
    ) -> CommandResult<Vec<View>> {
        let identity = self.resolver.resolve(invoker, target).await?;
        match self.aggregator.best_score_on_beatmap(beatmap_id, &identity).await {
            Ok(best) => {
                let player = match best.score().username() {
                    Some(name) => name.to_string(),
                    None => {
                        self.aggregator
                            .player(&UserRef::Id(best.score().user_id), *identity.mode())
                            .await?
                            .username
                    }
                };
                Ok(vec![views::compare_view(&best, &player)])
            }
            Err(CommandFailure::NoScores(ScoreScope::Beatmap { .. })) => {
                let player = self
                    .aggregator
                    .player(identity.external_ref(), *identity.mode())
                    .await
                    .ok()
                    .map(|user| user.username);
                Err(CommandFailure::NoScores(ScoreScope::Beatmap { player }))
            }
            Err(other) => Err(other),
        }
    }

    async fn map(
        &self,
        id: Option<u32>,
        search: Option<&str>,
        mode: Option<GameMode>,
    ) -> CommandResult<Vec<View>> {
        if let Some(id) = id {
            let beatmap = self.aggregator.beatmap(id).await?;
            return Ok(vec![views::beatmap_view(&beatmap)]);
        }
        match search.map(str::trim).filter(|q| !q.is_empty()) {
            Some(query) => {
                let mode = mode.unwrap_or_default();
                let hits = self
                    .aggregator
                    .beatmap_search(query, mode, MAX_SEARCH_LIMIT)
                    .await?;
                Ok(vec![views::search_view(query, mode, &hits)])
            }
            None => Err(CommandFailure::Usage(
                "Please provide either a beatmap ID or search query.".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::MAX_LIST_LIMIT;

    #[test]
    fn integer_options_are_clamped() {
        assert_eq!(clamp_option(None, DEFAULT_LIMIT, MAX_LIST_LIMIT), 5);
        assert_eq!(clamp_option(Some(0), DEFAULT_LIMIT, MAX_LIST_LIMIT), 1);
        assert_eq!(clamp_option(Some(-4), DEFAULT_LIMIT, MAX_LIST_LIMIT), 1);
        assert_eq!(clamp_option(Some(7), DEFAULT_LIMIT, MAX_LIST_LIMIT), 7);
        assert_eq!(clamp_option(Some(500), DEFAULT_LIMIT, MAX_LIST_LIMIT), 10);
    }

    #[test]
    fn names_match_commands() {
        let commands = [
            OsuCommand::Link {
                username: String::new(),
                mode: None,
            },
            OsuCommand::Unlink,
            OsuCommand::Mode {
                mode: GameMode::Taiko,
            },
            OsuCommand::Profile(TargetArgs::invoker()),
            OsuCommand::Top {
                target: TargetArgs::invoker(),
                limit: 1,
            },
            OsuCommand::Recent {
                target: TargetArgs::invoker(),
                index: 1,
            },
            OsuCommand::Compare {
                beatmap_id: 1,
                target: TargetArgs::invoker(),
            },
            OsuCommand::Leaderboard {
                beatmap_id: 1,
                mode: None,
                limit: 1,
            },
            OsuCommand::Map {
                id: None,
                search: None,
                mode: None,
            },
            OsuCommand::Help,
        ];
        let names: Vec<&str> = commands.iter().map(OsuCommand::name).collect();
        assert_eq!(names, OsuCommand::NAMES);
    }
}
