//! Layered bot configuration.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use osulink_error::{ConfigError, ConfigErrorKind, OsuLinkResult};
use serde::Deserialize;
use std::path::Path;

/// File read when no `--config` is given; optional.
pub const DEFAULT_CONFIG_FILE: &str = "osulink.toml";

/// Keys with no built-in default.
const REQUIRED_KEYS: [&str; 3] = ["discord_bot_token", "osu_client_id", "osu_client_secret"];

/// Settings for the bot process.
///
/// Sources, lowest precedence first: built-in defaults, a TOML file,
/// environment variables (`DISCORD_BOT_TOKEN`, `OSU_CLIENT_ID`, ...).
#[derive(Clone, Deserialize, Getters)]
pub struct OsuLinkConfig {
    /// Discord bot token
    discord_bot_token: String,
    /// osu! OAuth client id
    osu_client_id: u32,
    /// osu! OAuth client secret
    osu_client_secret: String,
    /// SQLite database path
    database_url: String,
    /// Maximum pooled connections
    database_pool_size: u32,
    /// Register slash commands to this guild only
    #[serde(default)]
    dev_guild_id: Option<u64>,
    /// Register slash commands on startup
    register_commands: bool,
}

impl std::fmt::Debug for OsuLinkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsuLinkConfig")
            .field("discord_bot_token", &"<redacted>")
            .field("osu_client_id", &self.osu_client_id)
            .field("osu_client_secret", &"<redacted>")
            .field("database_url", &self.database_url)
            .field("database_pool_size", &self.database_pool_size)
            .field("dev_guild_id", &self.dev_guild_id)
            .field("register_commands", &self.register_commands)
            .finish()
    }
}

impl OsuLinkConfig {
    /// Load from `path` (or [`DEFAULT_CONFIG_FILE`] if present) and the process environment.
    ///
    /// A `.env` file in the working directory is loaded first.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an explicit file is missing, a source is
    /// malformed, or a required key is absent.
    #[tracing::instrument]
    pub fn load(path: Option<&Path>) -> OsuLinkResult<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            tracing::debug!(path = %env_file.display(), "Loaded environment file");
        }
        Self::from_sources(path, Environment::default().try_parsing(true))
    }

    /// Load from a file and an explicit environment source.
    ///
    /// # Errors
    ///
    /// Same as [`OsuLinkConfig::load`].
    pub fn from_sources(path: Option<&Path>, environment: Environment) -> OsuLinkResult<Self> {
        let file = match path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::new(ConfigErrorKind::FileNotFound(
                    path.display().to_string(),
                ))
                .into());
            }
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        let config = Config::builder()
            .set_default("database_url", "osulink.db")
            .and_then(|b| b.set_default("database_pool_size", 4))
            .and_then(|b| b.set_default("register_commands", true))
            .map_err(config_error)?
            .add_source(file)
            .add_source(environment)
            .build()
            .map_err(config_error)?;

        if let Some(key) = REQUIRED_KEYS
            .into_iter()
            .find(|key| matches!(config.get_string(key), Err(config::ConfigError::NotFound(_))))
        {
            return Err(ConfigError::new(ConfigErrorKind::MissingKey(key.to_string())).into());
        }

        let loaded: Self = config.try_deserialize().map_err(config_error)?;
        tracing::debug!(config = ?loaded, "Configuration loaded");
        Ok(loaded)
    }
}

#[track_caller]
fn config_error(e: config::ConfigError) -> ConfigError {
    ConfigError::new(ConfigErrorKind::Invalid(e.to_string()))
}
