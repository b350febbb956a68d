//! The result of one successful parse.

use crate::schema::{Arg, Command, Flag};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::str::FromStr;

/// Values parsed for the selected command.
///
/// Every registered flag and argument has an entry; an empty string means the
/// command line did not set it. Defaults are never filled in implicitly, use
/// [`Matches::flag_or_default`] and [`Matches::arg_or_default`] for that.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    command: &'a Command,
    flags: IndexMap<&'a str, String>,
    args: IndexMap<&'a str, String>,
    present: HashSet<&'a str>,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(command: &'a Command) -> Self {
        Self {
            command,
            flags: command
                .flags()
                .map(|f| (f.name.as_str(), String::new()))
                .collect(),
            args: command
                .args()
                .map(|a| (a.name.as_str(), String::new()))
                .collect(),
            present: HashSet::new(),
        }
    }

    /// The selected command's descriptor.
    pub fn command(&self) -> &'a Command {
        self.command
    }

    /// Name of the selected command; empty for the root command.
    pub fn name(&self) -> &'a str {
        self.command.name()
    }

    /// Raw value of a flag, `None` if the flag is not registered.
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(String::as_str)
    }

    /// Raw value of an argument, `None` if the argument is not registered.
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args.get(name).map(String::as_str)
    }

    /// The flag's value, or its registered default when unset.
    pub fn flag_or_default(&self, name: &str) -> Option<&str> {
        let value = self.flag(name)?;
        if value.is_empty() {
            return self.command.flag(name).map(|f| f.default.as_str());
        }
        Some(value)
    }

    /// The argument's value, or its registered default when unset.
    pub fn arg_or_default(&self, name: &str) -> Option<&str> {
        let value = self.arg(name)?;
        if value.is_empty() {
            return self.command.arg(name).map(|a| a.default.as_str());
        }
        Some(value)
    }

    /// Whether the flag appeared on the command line, with or without a value.
    pub fn is_present(&self, name: &str) -> bool {
        self.present.contains(name)
    }

    /// The individual values collected by a variadic argument.
    pub fn variadic_values(&self, name: &str) -> Vec<&str> {
        match self.arg(name) {
            Some(value) if !value.is_empty() => value.split(',').collect(),
            _ => Vec::new(),
        }
    }

    /// Parse a flag value into `T`. Unset and unregistered flags yield `Ok(None)`.
    pub fn flag_as<T: FromStr>(&self, name: &str) -> Result<Option<T>, T::Err> {
        typed(self.flag(name))
    }

    /// Parse an argument value into `T`. Unset and unregistered arguments yield `Ok(None)`.
    pub fn arg_as<T: FromStr>(&self, name: &str) -> Result<Option<T>, T::Err> {
        typed(self.arg(name))
    }

    /// Flags with their values, in registration order.
    pub fn flags(&self) -> impl Iterator<Item = (&'a Flag, &str)> + '_ {
        self.command
            .flags()
            .map(move |f| (f, self.flag(&f.name).unwrap_or_default()))
    }

    /// Arguments with their values, in positional order.
    pub fn args(&self) -> impl Iterator<Item = (&'a Arg, &str)> + '_ {
        self.command
            .args()
            .map(move |a| (a, self.arg(&a.name).unwrap_or_default()))
    }

    pub(crate) fn set_flag(&mut self, flag: &'a Flag, value: Option<String>) {
        self.present.insert(flag.name.as_str());
        if let Some(value) = value {
            self.flags.insert(flag.name.as_str(), value);
        }
    }

    /// Assign a positional token to the first unfilled argument, or append it
    /// to the trailing variadic argument.
    pub(crate) fn push_positional(&mut self, token: &str) {
        let last = self.args.len().saturating_sub(1);
        let variadic = self.command.args().last().is_some_and(|a| a.variadic);

        for (index, value) in self.args.values_mut().enumerate() {
            if index == last && variadic {
                if !value.is_empty() {
                    value.push(',');
                }
                value.push_str(token);
                return;
            }
            if value.is_empty() {
                value.push_str(token);
                return;
            }
        }
    }
}

fn typed<T: FromStr>(value: Option<&str>) -> Result<Option<T>, T::Err> {
    value
        .filter(|v| !v.is_empty())
        .map(str::parse::<T>)
        .transpose()
}
