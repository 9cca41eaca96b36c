//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the osulink binary.

mod commands;
mod links;
mod register;
mod run;

pub use commands::{Cli, Commands};
pub use links::handle_links_command;
pub use register::handle_register_command;
pub use run::handle_run_command;
