//! Discord transport: slash command registration, option parsing and
//! embed rendering over serenity.

mod commands;
mod conversions;
mod error;
mod handler;

pub use commands::{command_definitions, register_commands};
pub use conversions::{command_options, view_to_embed};
pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use handler::{OsuLinkBot, OsuLinkHandler, Registration};
