//! Bot runner.

use crate::OsuLinkConfig;
use osulink_database::DatabaseLinkStore;
use osulink_error::OsuLinkResult;
use osulink_osu::{OsuClient, OsuClientConfig, OsuGateway};
use osulink_social::OsuCommandExecutor;
use osulink_social::discord::{OsuLinkBot, Registration};
use std::sync::Arc;

/// Handle the `run` command.
pub async fn handle_run_command(config: &OsuLinkConfig) -> OsuLinkResult<()> {
    tracing::info!(database = %config.database_url(), "Starting osulink");

    let store = DatabaseLinkStore::open(config.database_url(), *config.database_pool_size())?;
    let client = OsuClient::new(OsuClientConfig::new(
        *config.osu_client_id(),
        config.osu_client_secret(),
    ))?;
    let executor = OsuCommandExecutor::new(Arc::new(store), Arc::new(OsuGateway::new(client)));

    let registration = registration(*config.register_commands(), *config.dev_guild_id());
    tracing::debug!(?registration, "Command registration");

    let bot = OsuLinkBot::new(config.discord_bot_token(), executor, registration).await?;
    bot.start().await?;

    tracing::info!("osulink stopped");
    Ok(())
}

fn registration(enabled: bool, guild: Option<u64>) -> Registration {
    match (enabled, guild) {
        (false, _) => Registration::Skip,
        (true, Some(guild)) => Registration::Guild(guild),
        (true, None) => Registration::Global,
    }
}
