//! Configuration error types.

/// Why configuration could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A key with no default was set by no source
    #[display("missing required key `{_0}`")]
    MissingKey(String),
    /// An explicitly named file does not exist
    #[display("configuration file not found: {_0}")]
    FileNotFound(String),
    /// A source could not be read or a value has the wrong type
    #[display("invalid configuration: {_0}")]
    Invalid(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use osulink_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingKey("discord_bot_token".into()));
/// assert_eq!(err.missing_key(), Some("discord_bot_token"));
/// assert!(err.to_string().contains("DISCORD_BOT_TOKEN"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// What went wrong
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The key that was missing, if that is the failure.
    pub fn missing_key(&self) -> Option<&str> {
        match &self.kind {
            ConfigErrorKind::MissingKey(key) => Some(key),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration Error: {}", self.kind)?;
        if let Some(key) = self.missing_key() {
            write!(f, " (set `{key}` in osulink.toml or {})", key.to_uppercase())?;
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}

impl std::error::Error for ConfigError {}
