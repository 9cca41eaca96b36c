//! Discord-specific error types.

use std::fmt;

/// Discord error variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiscordErrorKind {
    /// Serenity API error (HTTP, gateway, rate limit).
    SerenityError(String),

    /// Connection to the Discord gateway failed.
    ConnectionFailed(String),

    /// Bot token is invalid or expired.
    InvalidToken,

    /// Slash command registration failed.
    RegistrationFailed(String),

    /// Interaction reply or defer failed.
    InteractionFailed(String),
}

impl fmt::Display for DiscordErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SerenityError(msg) => write!(f, "Serenity API error: {msg}"),
            Self::ConnectionFailed(msg) => write!(f, "Connection failed: {msg}"),
            Self::InvalidToken => write!(f, "Invalid or expired bot token"),
            Self::RegistrationFailed(msg) => write!(f, "Command registration failed: {msg}"),
            Self::InteractionFailed(msg) => write!(f, "Interaction failed: {msg}"),
        }
    }
}

/// Discord error with source location tracking.
///
/// # Example
/// ```
/// use osulink_social::discord::{DiscordError, DiscordErrorKind};
///
/// let err = DiscordError::new(DiscordErrorKind::InvalidToken);
/// assert!(err.to_string().contains("Invalid or expired bot token"));
/// ```
#[derive(Debug, Clone)]
pub struct DiscordError {
    /// What went wrong
    pub kind: DiscordErrorKind,
    /// Line where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl DiscordError {
    /// Create a new DiscordError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DiscordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl fmt::Display for DiscordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Discord Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for DiscordError {}

/// Result type for Discord operations.
pub type DiscordResult<T> = Result<T, DiscordError>;

impl From<serenity::Error> for DiscordError {
    #[track_caller]
    fn from(err: serenity::Error) -> Self {
        use serenity::Error as E;
        use serenity::gateway::GatewayError;
        let kind = match &err {
            E::Gateway(GatewayError::InvalidAuthentication) => DiscordErrorKind::InvalidToken,
            E::Gateway(e) => DiscordErrorKind::ConnectionFailed(e.to_string()),
            _ => DiscordErrorKind::SerenityError(err.to_string()),
        };
        DiscordError::new(kind)
    }
}

impl From<DiscordError> for osulink_error::OsuLinkError {
    fn from(err: DiscordError) -> Self {
        osulink_error::OsuLinkError::new(osulink_error::OsuLinkErrorKind::Platform(err.to_string()))
    }
}
