//! Error types for osulink.
//!
//! Each subsystem owns a location-tracked error (`kind`, `line`, `file`).
//! [`OsuLinkError`] wraps all of them so the binary and the command boundary
//! can propagate any failure with `?`.

#![warn(missing_docs)]

mod config;
mod database;
mod osu_api;

pub use config::{ConfigError, ConfigErrorKind};
pub use database::{DatabaseError, DatabaseErrorKind, DatabaseResult};
pub use osu_api::{OsuApiError, OsuApiErrorKind, OsuApiResult};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum OsuLinkErrorKind {
    /// Link store failure
    Database(DatabaseError),
    /// osu! API failure
    OsuApi(OsuApiError),
    /// Configuration error
    Config(ConfigError),
    /// Chat platform failure, carried as text so this crate stays transport-agnostic
    #[from(skip)]
    Platform(String),
}

impl std::fmt::Display for OsuLinkErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OsuLinkErrorKind::Database(e) => write!(f, "{}", e),
            OsuLinkErrorKind::OsuApi(e) => write!(f, "{}", e),
            OsuLinkErrorKind::Config(e) => write!(f, "{}", e),
            OsuLinkErrorKind::Platform(msg) => write!(f, "Platform error: {}", msg),
        }
    }
}

/// osulink error with kind discrimination.
#[derive(Debug)]
pub struct OsuLinkError(Box<OsuLinkErrorKind>);

impl OsuLinkError {
    /// Create a new error from a kind.
    pub fn new(kind: OsuLinkErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &OsuLinkErrorKind {
        &self.0
    }
}

impl std::fmt::Display for OsuLinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "osulink Error: {}", self.0)
    }
}

impl std::error::Error for OsuLinkError {}

impl<T> From<T> for OsuLinkError
where
    T: Into<OsuLinkErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for osulink operations.
pub type OsuLinkResult<T> = std::result::Result<T, OsuLinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_converts_into_crate_error() {
        let err: OsuLinkError =
            DatabaseError::new(DatabaseErrorKind::Connection("refused".into())).into();
        assert!(matches!(err.kind(), OsuLinkErrorKind::Database(_)));
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn location_is_recorded_at_creation_site() {
        let err = ConfigError::new(ConfigErrorKind::Invalid("bad".into()));
        assert!(err.file.ends_with("lib.rs"));
        assert!(err.line > 0);
    }

    #[test]
    fn missing_key_names_the_environment_variable() {
        let err = ConfigError::new(ConfigErrorKind::MissingKey("osu_client_secret".into()));
        assert_eq!(err.missing_key(), Some("osu_client_secret"));
        assert!(err.to_string().contains("OSU_CLIENT_SECRET"));

        let other = ConfigError::new(ConfigErrorKind::FileNotFound("bot.toml".into()));
        assert_eq!(other.missing_key(), None);
    }

    #[test]
    fn not_found_only_for_404() {
        let missing = OsuApiErrorKind::Status {
            status: 404,
            message: String::new(),
        };
        let throttled = OsuApiErrorKind::Status {
            status: 429,
            message: String::new(),
        };
        assert!(missing.is_not_found());
        assert!(!throttled.is_not_found());
        assert!(!OsuApiErrorKind::Http("timeout".into()).is_not_found());
    }
}
