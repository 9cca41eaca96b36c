//! CLI structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// osulink - osu! stats for Discord
#[derive(Parser, Debug)]
#[command(name = "osulink")]
#[command(about = "Discord bot for osu! profiles, scores and leaderboards")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to osulink.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Connect to Discord and answer commands until Ctrl+C
    Run,

    /// Publish slash command definitions
    Register {
        /// Register to this guild only instead of globally
        #[arg(long)]
        guild: Option<u64>,
    },

    /// Show stored account links
    Links {
        /// Print only the number of links
        #[arg(long)]
        count: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn register_takes_an_optional_guild() {
        let cli = Cli::try_parse_from(["osulink", "register", "--guild", "42"]).unwrap();
        assert_eq!(cli.command, Commands::Register { guild: Some(42) });

        let cli = Cli::try_parse_from(["osulink", "register"]).unwrap();
        assert_eq!(cli.command, Commands::Register { guild: None });
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["osulink", "links", "--count", "-c", "bot.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("bot.toml")));
        assert_eq!(cli.command, Commands::Links { count: true });
    }
}
