//! Slash command definitions and registration.

use super::{DiscordError, DiscordErrorKind, DiscordResult};
use crate::aggregator::MAX_LIST_LIMIT;
use osulink_core::GameMode;
use serenity::all::{Command, CommandOptionType, CreateCommand, CreateCommandOption, GuildId, Http};
use tracing::{info, instrument};

fn mode_option(name: &str, description: &str, required: bool) -> CreateCommandOption {
    GameMode::ALL.iter().fold(
        CreateCommandOption::new(CommandOptionType::String, name, description).required(required),
        |option, mode| option.add_string_choice(mode.display_name(), mode.as_str()),
    )
}

fn bounded_integer(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, name, description)
        .required(false)
        .min_int_value(1)
        .max_int_value(MAX_LIST_LIMIT.into())
}

fn beatmap_option(name: &str, description: &str, required: bool) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, name, description)
        .required(required)
        .min_int_value(1)
}

fn target_options(command: CreateCommand, whose: &str) -> CreateCommand {
    command
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                format!("Discord user to view {whose} for"),
            )
            .required(false),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "username", "osu! username or user ID")
                .required(false),
        )
        .add_option(mode_option("mode", "Game mode", false))
}

/// Every slash command the bot answers.
pub fn command_definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("link")
            .description("Link your osu! account")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "username", "Your osu! username")
                    .required(true),
            )
            .add_option(mode_option("mode", "Default game mode", false)),
        CreateCommand::new("unlink").description("Unlink your osu! account"),
        CreateCommand::new("mode")
            .description("Change your default game mode")
            .add_option(mode_option("gamemode", "Game mode to set as default", true)),
        target_options(
            CreateCommand::new("profile").description("View an osu! profile"),
            "the profile",
        ),
        target_options(
            CreateCommand::new("top").description("View top plays"),
            "top plays",
        )
        .add_option(bounded_integer("limit", "Number of scores to show (1-10)")),
        target_options(
            CreateCommand::new("recent").description("View recent plays"),
            "recent plays",
        )
        .add_option(bounded_integer("index", "Which recent play to show (1-10)")),
        target_options(
            CreateCommand::new("compare")
                .description("Compare scores on a beatmap")
                .add_option(beatmap_option("beatmap", "Beatmap ID to compare scores on", true)),
            "scores",
        ),
        CreateCommand::new("leaderboard")
            .description("View the leaderboard of a beatmap")
            .add_option(beatmap_option("beatmap", "Beatmap ID to view leaderboard for", true))
            .add_option(mode_option("mode", "Game mode", false))
            .add_option(bounded_integer("limit", "Number of scores to show (1-10)")),
        CreateCommand::new("map")
            .description("Get information about a beatmap")
            .add_option(beatmap_option("id", "Beatmap ID", false))
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "search", "Search for beatmaps")
                    .required(false),
            )
            .add_option(mode_option("mode", "Game mode for search", false)),
        CreateCommand::new("help").description("Show all available commands"),
    ]
}

/// Publish the command set, to one guild when given, globally otherwise.
///
/// Guild commands appear immediately; global ones can take up to an hour.
#[instrument(skip(http))]
pub async fn register_commands(http: &Http, guild: Option<u64>) -> DiscordResult<usize> {
    let definitions = command_definitions();
    let registered = match guild {
        Some(id) => GuildId::new(id).set_commands(http, definitions).await,
        None => Command::set_global_commands(http, definitions).await,
    }
    .map_err(|e| DiscordError::new(DiscordErrorKind::RegistrationFailed(e.to_string())))?;

    info!(count = registered.len(), "Registered slash commands");
    Ok(registered.len())
}
