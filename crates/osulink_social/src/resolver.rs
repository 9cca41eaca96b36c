//! Turns a command's target arguments into one osu! identity.

use crate::outcome::{CommandFailure, CommandResult, LinkTarget};
use derive_getters::Getters;
use osulink_core::{GameMode, UserRef};
use osulink_interface::LinkStore;
use std::sync::Arc;
use tracing::{debug, instrument};

/// The `{username, user, mode}` triple shared by every per-player command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetArgs {
    /// osu! username or id as typed
    pub username: Option<String>,
    /// Mentioned chat user
    pub user: Option<String>,
    /// Explicit mode
    pub mode: Option<GameMode>,
}

impl TargetArgs {
    /// Arguments naming nobody: the invoker in their default mode.
    pub fn invoker() -> Self {
        Self::default()
    }

    /// Explicit osu! username or id.
    pub fn username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    /// A mentioned chat user.
    pub fn mention(chat_user_id: impl Into<String>) -> Self {
        Self {
            user: Some(chat_user_id.into()),
            ..Self::default()
        }
    }

    /// Same arguments with an explicit mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Where a resolved identity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    /// Typed by the invoker
    Explicit,
    /// Read from a link record
    Linked,
}

/// Canonical osu! identity and the mode every following call must use.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ResolvedIdentity {
    external_ref: UserRef,
    mode: GameMode,
    source: IdentitySource,
}

impl ResolvedIdentity {
    /// Build an identity directly.
    pub fn new(external_ref: UserRef, mode: GameMode, source: IdentitySource) -> Self {
        Self {
            external_ref,
            mode,
            source,
        }
    }
}

/// Resolves targets against the link store.
///
/// An explicit identifier always wins and never touches the store. Otherwise
/// the mentioned user, or the invoker, must have a link record; its default
/// mode applies unless a mode was given.
#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn LinkStore>,
}

impl IdentityResolver {
    /// Create a resolver over a link store.
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Resolve `args` on behalf of `invoker`.
    ///
    /// # Errors
    ///
    /// [`CommandFailure::Unlinked`] when the target chat user has no link,
    /// tagged with whether that was the invoker; [`CommandFailure::Internal`]
    /// when the store fails.
    #[instrument(skip(self))]
    pub async fn resolve(&self, invoker: &str, args: &TargetArgs) -> CommandResult<ResolvedIdentity> {
        if let Some(typed) = args
            .username
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            let identity = ResolvedIdentity::new(
                UserRef::parse(typed),
                args.mode.unwrap_or_default(),
                IdentitySource::Explicit,
            );
            debug!(external_ref = %identity.external_ref, "Resolved explicit identifier");
            return Ok(identity);
        }

        let (target, tag) = match args.user.as_deref() {
            Some(mentioned) => (mentioned, LinkTarget::Other(mentioned.to_string())),
            None => (invoker, LinkTarget::Invoker),
        };

        let record = self
            .store
            .get(target)
            .await?
            .ok_or(CommandFailure::Unlinked(tag))?;

        debug!(osu_user_id = record.osu_user_id(), "Resolved linked account");
        Ok(ResolvedIdentity::new(
            UserRef::Id(*record.osu_user_id()),
            args.mode.unwrap_or(*record.default_mode()),
            IdentitySource::Linked,
        ))
    }
}

impl std::fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityResolver").finish_non_exhaustive()
    }
}
