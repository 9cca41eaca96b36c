//! Slash command publishing.

use crate::OsuLinkConfig;
use osulink_error::OsuLinkResult;
use osulink_social::discord::{DiscordError, register_commands};
use serenity::http::Http;

/// Handle the `register` command.
///
/// `guild` overrides the configured development guild.
pub async fn handle_register_command(config: &OsuLinkConfig, guild: Option<u64>) -> OsuLinkResult<()> {
    let http = Http::new(config.discord_bot_token());
    let application = http
        .get_current_application_info()
        .await
        .map_err(DiscordError::from)?;
    http.set_application_id(application.id);

    let guild = guild.or(*config.dev_guild_id());
    let count = register_commands(&http, guild).await?;
    match guild {
        Some(guild) => println!("Registered {count} commands to guild {guild}"),
        None => println!("Registered {count} global commands"),
    }
    Ok(())
}
