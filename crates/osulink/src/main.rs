//! osulink binary.

use clap::Parser;
use osulink::OsuLinkConfig;
use osulink::cli::{Cli, Commands, handle_links_command, handle_register_command, handle_run_command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = OsuLinkConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run => handle_run_command(&config).await?,
        Commands::Register { guild } => handle_register_command(&config, guild).await?,
        Commands::Links { count } => handle_links_command(&config, count).await?,
    }

    Ok(())
}
