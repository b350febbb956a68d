//! JSON schema definitions that build a [`Registry`].

use crate::schema::Registry;
use crate::token;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur during schema parsing and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate command name: '{0}'")]
    DuplicateCommand(String),

    #[error("duplicate flag name '{1}' on command '{0}'")]
    DuplicateFlag(String, String),

    #[error("duplicate argument name '{1}' on command '{0}'")]
    DuplicateArg(String, String),

    #[error("duplicate short flag '-{1}' on command '{0}'")]
    DuplicateShort(String, char),

    #[error("invalid short flag '{0}': must be a single character")]
    InvalidShortFlag(String),

    #[error("variadic argument '{1}' on command '{0}' must be the last argument")]
    VariadicNotLast(String, String),
}

/// Configuration for a single flag.
#[derive(Debug, Clone, Deserialize)]
pub struct FlagConfig {
    /// Long name; a boolean flag named `no-<name>` is inverted
    pub name: String,
    /// Short name (e.g. "v" for -v)
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub boolean: bool,
    #[serde(default)]
    pub default: String,
}

/// Configuration for a positional argument.
#[derive(Debug, Clone, Deserialize)]
pub struct ArgConfig {
    /// Argument name; a trailing `...` makes it variadic
    pub name: String,
    #[serde(default)]
    pub default: String,
}

/// Configuration for a command.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandConfig {
    /// Command name; empty or omitted for the root command
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub args: Vec<ArgConfig>,
    #[serde(default)]
    pub flags: Vec<FlagConfig>,
}

/// Top-level schema definition.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub commands: Vec<CommandConfig>,
}

impl SchemaConfig {
    /// Parse a JSON string into a SchemaConfig.
    pub fn from_json(json: &str) -> Result<SchemaConfig, ConfigError> {
        let config: SchemaConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Validate the schema.
    ///
    /// Registration itself silently ignores duplicates; a declarative schema
    /// rejects them instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();

        for command in &self.commands {
            let name = command.name.trim();
            if !names.insert(name) {
                return Err(ConfigError::DuplicateCommand(name.to_string()));
            }
            Self::validate_args(command)?;
            Self::validate_flags(command)?;
        }

        Ok(())
    }

    fn validate_args(command: &CommandConfig) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        let last = command.args.len().saturating_sub(1);

        for (index, arg) in command.args.iter().enumerate() {
            let raw = arg.name.trim();
            let name = token::variadic_arg_name(raw).unwrap_or(raw);

            if !names.insert(name) {
                return Err(ConfigError::DuplicateArg(
                    command.name.clone(),
                    name.to_string(),
                ));
            }
            if index != last && token::variadic_arg_name(raw).is_some() {
                return Err(ConfigError::VariadicNotLast(
                    command.name.clone(),
                    name.to_string(),
                ));
            }
        }

        Ok(())
    }

    fn validate_flags(command: &CommandConfig) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        let mut shorts = HashSet::new();

        for flag in &command.flags {
            let raw = flag.name.trim();
            let name = if flag.boolean {
                raw.strip_prefix("no-").unwrap_or(raw)
            } else {
                raw
            };
            if !names.insert(name) {
                return Err(ConfigError::DuplicateFlag(
                    command.name.clone(),
                    name.to_string(),
                ));
            }

            let short = flag.short.trim();
            if short.chars().count() > 1 {
                return Err(ConfigError::InvalidShortFlag(short.to_string()));
            }
            if let Some(c) = short.chars().next() {
                if !shorts.insert(c) {
                    return Err(ConfigError::DuplicateShort(command.name.clone(), c));
                }
            }
        }

        Ok(())
    }

    /// Register every command, argument and flag into a new registry.
    pub fn build(&self) -> Registry {
        let mut registry = Registry::new();

        for command in &self.commands {
            let (cmd, _) = registry.register(&command.name);
            for arg in &command.args {
                cmd.add_arg(&arg.name, &arg.default);
            }
            for flag in &command.flags {
                cmd.add_flag(&flag.name, &flag.short, flag.boolean, &flag.default);
            }
        }

        registry
    }
}
