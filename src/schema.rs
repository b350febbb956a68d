//! Command, flag and argument descriptors.
//!
//! A [`Registry`] is built once by the caller and then only read by
//! [`Registry::parse`]. Descriptors hold metadata only; parsed values live in
//! [`crate::Matches`].

use crate::token;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// A registered flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
    /// Long name, without dashes and without the `no-` prefix.
    pub name: String,
    /// Single character short name (e.g. 'v' for -v)
    pub short: Option<char>,
    /// Presence alone sets the value; no value token is consumed.
    pub boolean: bool,
    /// Boolean flag declared as `no-<name>`, only addressable as `--no-<name>`.
    pub inverted: bool,
    /// Informational default, never applied to the parsed value.
    pub default: String,
}

impl Flag {
    /// The value a boolean flag takes when it appears on the command line.
    pub fn presence_value(&self) -> &'static str {
        if self.inverted {
            "false"
        } else {
            "true"
        }
    }
}

/// A registered positional argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arg {
    pub name: String,
    /// Accumulates every excess positional token, comma-joined.
    pub variadic: bool,
    pub default: String,
}

/// The schema of one command: its flags and its positional arguments.
#[derive(Debug, Clone, Default)]
pub struct Command {
    name: String,
    flags: IndexMap<String, Flag>,
    short_flags: HashMap<char, String>,
    args: IndexMap<String, Arg>,
}

impl Command {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Name of the command; empty for the root command.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Register a positional argument.
    ///
    /// A trailing `...` marks the argument variadic. Registering an existing
    /// name returns the existing descriptor and `true`.
    pub fn add_arg(&mut self, name: &str, default: &str) -> (&Arg, bool) {
        let name = name.trim();
        let (name, variadic) = match token::variadic_arg_name(name) {
            Some(stripped) => (stripped, true),
            None => (name, false),
        };

        if self.args.contains_key(name) {
            return (&self.args[name], true);
        }

        // Only the last argument may be variadic.
        if let Some((_, last)) = self.args.last_mut() {
            last.variadic = false;
        }

        let arg = Arg {
            name: name.to_string(),
            variadic,
            default: default.to_string(),
        };
        let (index, _) = self.args.insert_full(name.to_string(), arg);
        (&self.args[index], false)
    }

    /// Register a flag.
    ///
    /// A boolean flag named `no-<name>` becomes the inverted flag `<name>`
    /// with default `"true"` and no short name. Other boolean flags default
    /// to `"false"`. Only the first character of `short` is kept.
    pub fn add_flag(
        &mut self,
        name: &str,
        short: &str,
        boolean: bool,
        default: &str,
    ) -> (&Flag, bool) {
        let name = name.trim();
        let inverted_name = if boolean { name.strip_prefix("no-") } else { None };

        let flag = match inverted_name {
            Some(stripped) => Flag {
                name: stripped.to_string(),
                short: None,
                boolean: true,
                inverted: true,
                default: "true".to_string(),
            },
            None => Flag {
                name: name.to_string(),
                short: short.trim().chars().next(),
                boolean,
                inverted: false,
                default: if boolean {
                    "false".to_string()
                } else {
                    default.to_string()
                },
            },
        };

        if self.flags.contains_key(&flag.name) {
            return (&self.flags[&flag.name], true);
        }

        let mut flag = flag;
        if let Some(short) = flag.short {
            if self.short_flags.contains_key(&short) {
                flag.short = None;
            } else {
                self.short_flags.insert(short, flag.name.clone());
            }
        }

        let (index, _) = self.flags.insert_full(flag.name.clone(), flag);
        (&self.flags[index], false)
    }

    /// Look up a flag by its long name.
    pub fn flag(&self, name: &str) -> Option<&Flag> {
        self.flags.get(name)
    }

    /// Look up a flag by its short name.
    pub fn short_flag(&self, short: char) -> Option<&Flag> {
        self.short_flags
            .get(&short)
            .and_then(|name| self.flags.get(name))
    }

    pub fn arg(&self, name: &str) -> Option<&Arg> {
        self.args.get(name)
    }

    /// Flags in registration order.
    pub fn flags(&self) -> impl Iterator<Item = &Flag> {
        self.flags.values()
    }

    /// Arguments in registration order, which is also the positional order.
    pub fn args(&self) -> impl Iterator<Item = &Arg> {
        self.args.values()
    }

    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }
}

/// All registered commands, keyed by name. The root command is keyed by `""`.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: IndexMap<String, Command>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, or return the existing one with `true`.
    ///
    /// An empty name registers the root command.
    pub fn register(&mut self, name: &str) -> (&mut Command, bool) {
        let name = name.trim();
        let existed = self.commands.contains_key(name);
        let command = self
            .commands
            .entry(name.to_string())
            .or_insert_with(|| Command::new(name.to_string()));
        (command, existed)
    }

    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn root(&self) -> Option<&Command> {
        self.commands.get("")
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }
}
