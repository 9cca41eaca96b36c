//! Transport-neutral command option parsing.

use crate::aggregator::MAX_LIST_LIMIT;
use crate::commands::{DEFAULT_INDEX, DEFAULT_LIMIT, OsuCommand, clamp_option};
use crate::resolver::TargetArgs;
use osulink_core::GameMode;
use std::collections::HashMap;

/// A single option value as the chat platform delivered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Free text or a choice
    String(String),
    /// Integer
    Integer(i64),
    /// Mentioned chat user id
    User(String),
}

/// Why an invocation could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseCommandError {
    /// Not one of ours
    #[display("unknown command: {_0}")]
    UnknownCommand(String),
    /// A required option was absent
    #[display("missing required option `{_0}`")]
    MissingOption(&'static str),
    /// An option had the wrong type or an unusable value
    #[display("invalid option `{name}`: {reason}")]
    InvalidOption {
        /// Option name
        name: &'static str,
        /// What was wrong
        reason: String,
    },
}

impl std::error::Error for ParseCommandError {}

/// Named options of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    values: HashMap<String, OptionValue>,
}

impl CommandOptions {
    /// No options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option, replacing any previous value of the same name.
    pub fn with(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Add an option in place.
    pub fn insert(&mut self, name: impl Into<String>, value: OptionValue) {
        self.values.insert(name.into(), value);
    }

    fn string(&self, name: &'static str) -> Result<Option<&str>, ParseCommandError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(OptionValue::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(wrong_type(name, "text", other)),
        }
    }

    fn integer(&self, name: &'static str) -> Result<Option<i64>, ParseCommandError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(OptionValue::Integer(i)) => Ok(Some(*i)),
            Some(other) => Err(wrong_type(name, "an integer", other)),
        }
    }

    fn user(&self, name: &'static str) -> Result<Option<&str>, ParseCommandError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(OptionValue::User(id)) => Ok(Some(id.as_str())),
            Some(other) => Err(wrong_type(name, "a user", other)),
        }
    }

    fn mode(&self, name: &'static str) -> Result<Option<GameMode>, ParseCommandError> {
        self.string(name)?
            .map(|raw| {
                raw.parse::<GameMode>()
                    .map_err(|e| ParseCommandError::InvalidOption {
                        name,
                        reason: e.to_string(),
                    })
            })
            .transpose()
    }

    fn beatmap_id(&self, name: &'static str) -> Result<Option<u32>, ParseCommandError> {
        self.integer(name)?
            .map(|raw| {
                u32::try_from(raw).map_err(|_| ParseCommandError::InvalidOption {
                    name,
                    reason: format!("{raw} is not a beatmap id"),
                })
            })
            .transpose()
    }

    fn target(&self) -> Result<TargetArgs, ParseCommandError> {
        Ok(TargetArgs {
            username: self.string("username")?.map(str::to_string),
            user: self.user("user")?.map(str::to_string),
            mode: self.mode("mode")?,
        })
    }
}

fn wrong_type(name: &'static str, expected: &str, got: &OptionValue) -> ParseCommandError {
    ParseCommandError::InvalidOption {
        name,
        reason: format!("expected {expected}, got {got:?}"),
    }
}

/// Build a command from its name and options.
///
/// Integer options outside their range are clamped, not rejected.
pub fn parse_command(name: &str, options: &CommandOptions) -> Result<OsuCommand, ParseCommandError> {
    let command = match name {
        "link" => OsuCommand::Link {
            username: options
                .string("username")?
                .ok_or(ParseCommandError::MissingOption("username"))?
                .to_string(),
            mode: options.mode("mode")?,
        },
        "unlink" => OsuCommand::Unlink,
        "mode" => OsuCommand::Mode {
            mode: options
                .mode("gamemode")?
                .ok_or(ParseCommandError::MissingOption("gamemode"))?,
        },
        "profile" => OsuCommand::Profile(options.target()?),
        "top" => OsuCommand::Top {
            target: options.target()?,
            limit: clamp_option(options.integer("limit")?, DEFAULT_LIMIT, MAX_LIST_LIMIT),
        },
        "recent" => OsuCommand::Recent {
            target: options.target()?,
            index: clamp_option(options.integer("index")?, DEFAULT_INDEX, MAX_LIST_LIMIT),
        },
        "compare" => OsuCommand::Compare {
            beatmap_id: options
                .beatmap_id("beatmap")?
                .ok_or(ParseCommandError::MissingOption("beatmap"))?,
            target: options.target()?,
        },
        "leaderboard" => OsuCommand::Leaderboard {
            beatmap_id: options
                .beatmap_id("beatmap")?
                .ok_or(ParseCommandError::MissingOption("beatmap"))?,
            mode: options.mode("mode")?,
            limit: clamp_option(options.integer("limit")?, DEFAULT_LIMIT, MAX_LIST_LIMIT),
        },
        "map" => OsuCommand::Map {
            id: options.beatmap_id("id")?,
            search: options.string("search")?.map(str::to_string),
            mode: options.mode("mode")?,
        },
        "help" => OsuCommand::Help,
        other => return Err(ParseCommandError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_defaults_and_clamps() {
        let cmd = parse_command("top", &CommandOptions::new()).unwrap();
        assert_eq!(
            cmd,
            OsuCommand::Top {
                target: TargetArgs::invoker(),
                limit: DEFAULT_LIMIT
            }
        );

        let opts = CommandOptions::new().with("limit", OptionValue::Integer(42));
        let OsuCommand::Top { limit, .. } = parse_command("top", &opts).unwrap() else {
            panic!("expected top");
        };
        assert_eq!(limit, 10);
    }

    #[test]
    fn target_options_are_collected() {
        let opts = CommandOptions::new()
            .with("username", OptionValue::String("peppy".into()))
            .with("user", OptionValue::User("99".into()))
            .with("mode", OptionValue::String("fruits".into()));
        let cmd = parse_command("profile", &opts).unwrap();
        assert_eq!(
            cmd,
            OsuCommand::Profile(TargetArgs {
                username: Some("peppy".into()),
                user: Some("99".into()),
                mode: Some(GameMode::Catch),
            })
        );
    }

    #[test]
    fn required_options_are_enforced() {
        assert_eq!(
            parse_command("compare", &CommandOptions::new()),
            Err(ParseCommandError::MissingOption("beatmap"))
        );
        assert_eq!(
            parse_command("mode", &CommandOptions::new()),
            Err(ParseCommandError::MissingOption("gamemode"))
        );
    }

    #[test]
    fn bad_values_are_rejected() {
        let opts = CommandOptions::new().with("beatmap", OptionValue::Integer(-1));
        assert!(matches!(
            parse_command("leaderboard", &opts),
            Err(ParseCommandError::InvalidOption { name: "beatmap", .. })
        ));

        let opts = CommandOptions::new().with("gamemode", OptionValue::String("ctb".into()));
        assert!(parse_command("mode", &opts).is_err());

        let opts = CommandOptions::new().with("user", OptionValue::String("x".into()));
        assert!(parse_command("profile", &opts).is_err());
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse_command("roll", &CommandOptions::new()),
            Err(ParseCommandError::UnknownCommand("roll".into()))
        );
    }
}
