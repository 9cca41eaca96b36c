//! Gateway event handling.

use super::commands::register_commands;
use super::conversions::{command_options, view_to_embed};
use super::{DiscordError, DiscordErrorKind, DiscordResult};
use crate::commands::{Invocation, OsuCommandExecutor};
use crate::options::parse_command;
use crate::views;
use async_trait::async_trait;
use serenity::all::{
    Client, CommandInteraction, Context, CreateEmbed, EditInteractionResponse, EventHandler,
    GatewayIntents, Interaction, Ready,
};
use tracing::{debug, error, info, instrument, warn};

/// Where commands are published when the bot connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Leave registered commands alone
    Skip,
    /// Publish to one guild
    Guild(u64),
    /// Publish globally
    Global,
}

/// Event handler answering osulink slash commands.
pub struct OsuLinkHandler {
    executor: OsuCommandExecutor,
    registration: Registration,
}

impl OsuLinkHandler {
    /// Create a handler.
    pub fn new(executor: OsuCommandExecutor, registration: Registration) -> Self {
        Self {
            executor,
            registration,
        }
    }

    #[instrument(skip(self, ctx, command), fields(command = %command.data.name, invoker = %command.user.id))]
    async fn answer(&self, ctx: &Context, command: &CommandInteraction) -> DiscordResult<()> {
        command
            .defer(&ctx.http)
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::InteractionFailed(e.to_string())))?;

        let options = command_options(&command.data.options);
        let views = match parse_command(&command.data.name, &options) {
            Ok(parsed) => {
                let invocation = Invocation::new(command.user.id.get().to_string(), parsed);
                self.executor.execute(&invocation).await
            }
            Err(e) => {
                warn!(error = %e, "Rejected command options");
                vec![views::error_view(e.to_string())]
            }
        };

        let embeds: Vec<CreateEmbed> = views.iter().map(view_to_embed).collect();
        command
            .edit_response(&ctx.http, EditInteractionResponse::new().embeds(embeds))
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::InteractionFailed(e.to_string())))?;

        debug!(embeds = views.len(), "Replied");
        Ok(())
    }
}

#[async_trait]
impl EventHandler for OsuLinkHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, guilds = ready.guilds.len(), "Connected to Discord");

        let guild = match self.registration {
            Registration::Skip => return,
            Registration::Guild(id) => Some(id),
            Registration::Global => None,
        };
        if let Err(e) = register_commands(&ctx.http, guild).await {
            error!(error = %e, "Failed to register slash commands");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            if let Err(e) = self.answer(&ctx, &command).await {
                error!(error = %e, "Failed to answer command");
            }
        }
    }
}

/// A connected osulink bot.
pub struct OsuLinkBot {
    client: Client,
}

impl OsuLinkBot {
    /// Build a client for `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if serenity rejects the token or configuration.
    #[instrument(skip(token, executor))]
    pub async fn new(
        token: &str,
        executor: OsuCommandExecutor,
        registration: Registration,
    ) -> DiscordResult<Self> {
        let client = Client::builder(token, GatewayIntents::GUILDS)
            .event_handler(OsuLinkHandler::new(executor, registration))
            .await?;
        Ok(Self { client })
    }

    /// Run until the gateway closes or Ctrl+C is received.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway connection fails.
    pub async fn start(mut self) -> DiscordResult<()> {
        let shard_manager = self.client.shard_manager.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutting down");
                shard_manager.shutdown_all().await;
            }
        });

        info!("Starting Discord client");
        self.client.start().await?;
        Ok(())
    }
}
