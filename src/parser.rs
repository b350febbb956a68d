//! Matching command line tokens against a [`Registry`].

use crate::matches::Matches;
use crate::schema::{Command, Flag, Registry};
use crate::token;
use thiserror::Error;

/// Errors that can occur during parsing. Each carries the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}' found in the arguments")]
    UnknownCommand(String),

    #[error("unknown flag {0} found in the arguments")]
    UnknownFlag(String),

    #[error("unsupported flag {0} found in the arguments")]
    UnsupportedFlag(String),
}

/// Result of parsing a token sequence.
pub type ParseResult<'a> = Result<Matches<'a>, ParseError>;

impl Registry {
    /// Parse command line tokens (without the program name).
    ///
    /// The registry is only read; every call returns fresh [`Matches`].
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> ParseResult<'_> {
        parse_args(self, tokens)
    }
}

/// Parse command line tokens against the registry.
pub fn parse_args<'a, S: AsRef<str>>(registry: &'a Registry, tokens: &[S]) -> ParseResult<'a> {
    let (name, rest) = select_command(registry, tokens);
    let command = registry
        .command(name)
        .ok_or_else(|| ParseError::UnknownCommand(name.to_string()))?;

    let tokens = token::normalize(rest);
    if let Some(bad) = tokens.iter().find(|t| token::is_unsupported_flag(t)) {
        return Err(ParseError::UnsupportedFlag(bad.clone()));
    }

    Parser::new(command).parse(&tokens)
}

/// Decide which command the tokens address.
///
/// The root command is chosen for an empty token list, a leading flag, or a
/// leading word that is not a command name while the root takes arguments.
/// Otherwise the first token names the command and is consumed.
fn select_command<'t, S: AsRef<str>>(registry: &Registry, tokens: &'t [S]) -> (&'t str, &'t [S]) {
    let Some((first, rest)) = tokens.split_first() else {
        return ("", tokens);
    };
    let first = first.as_ref();

    if token::is_flag(first) {
        return ("", tokens);
    }

    let root_takes_args = registry.root().is_some_and(Command::has_args);
    if root_takes_args && registry.command(first).is_none() {
        return ("", tokens);
    }

    (first, rest)
}

/// Internal parser state.
struct Parser<'a> {
    command: &'a Command,
    matches: Matches<'a>,
}

impl<'a> Parser<'a> {
    fn new(command: &'a Command) -> Self {
        Self {
            command,
            matches: Matches::new(command),
        }
    }

    fn parse(mut self, tokens: &[String]) -> ParseResult<'a> {
        let mut tokens = tokens.iter().peekable();

        while let Some(tok) = tokens.next() {
            if tok.is_empty() {
                continue;
            }

            if !token::is_flag(tok) {
                self.matches.push_positional(tok);
                continue;
            }

            let flag = self.resolve_flag(tok)?;
            if flag.boolean {
                self.matches
                    .set_flag(flag, Some(flag.presence_value().to_string()));
                continue;
            }

            // A value flag takes the next token unless it is empty or a flag.
            let value = tokens
                .next_if(|next| !next.is_empty() && !token::is_flag(next))
                .cloned();
            self.matches.set_flag(flag, value);
        }

        Ok(self.matches)
    }

    fn resolve_flag(&self, tok: &str) -> Result<&'a Flag, ParseError> {
        let unknown = || ParseError::UnknownFlag(tok.to_string());

        if token::is_short_flag(tok) {
            let short = tok.chars().nth(1).ok_or_else(unknown)?;
            return self.command.short_flag(short).ok_or_else(unknown);
        }

        if let Some(name) = token::inverted_flag_name(tok) {
            return self
                .command
                .flag(name)
                .filter(|f| f.inverted)
                .ok_or_else(unknown);
        }

        self.command
            .flag(tok.trim_start_matches('-'))
            .filter(|f| !f.inverted)
            .ok_or_else(unknown)
    }
}
