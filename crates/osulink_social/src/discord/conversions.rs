//! Conversions between serenity types and platform-neutral ones.

use crate::options::{CommandOptions, OptionValue};
use crate::views::View;
use serenity::all::{CommandDataOption, CommandDataOptionValue, CreateEmbed, CreateEmbedFooter};
use tracing::warn;

/// Collect the option types osulink uses; anything else is skipped.
pub fn command_options(options: &[CommandDataOption]) -> CommandOptions {
    let mut out = CommandOptions::new();
    for option in options {
        let value = match &option.value {
            CommandDataOptionValue::String(s) => OptionValue::String(s.clone()),
            CommandDataOptionValue::Integer(i) => OptionValue::Integer(*i),
            CommandDataOptionValue::User(id) => OptionValue::User(id.get().to_string()),
            other => {
                warn!(name = %option.name, value = ?other, "Ignoring unsupported option");
                continue;
            }
        };
        out.insert(option.name.clone(), value);
    }
    out
}

/// Render a view as an embed.
pub fn view_to_embed(view: &View) -> CreateEmbed {
    let mut embed = CreateEmbed::new().colour(*view.colour());
    if let Some(title) = view.title() {
        embed = embed.title(title);
    }
    if let Some(description) = view.description() {
        embed = embed.description(description);
    }
    if let Some(url) = view.url() {
        embed = embed.url(url);
    }
    if let Some(thumbnail) = view.thumbnail() {
        embed = embed.thumbnail(thumbnail);
    }
    if let Some(image) = view.image() {
        embed = embed.image(image);
    }
    for field in view.fields() {
        embed = embed.field(field.name(), field.value(), *field.inline());
    }
    if let Some(footer) = view.footer() {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }
    embed
}
