//! osulink binary support: configuration loading and CLI command handlers.

#![warn(missing_docs)]

pub mod cli;
mod config;

pub use config::{DEFAULT_CONFIG_FILE, OsuLinkConfig};
