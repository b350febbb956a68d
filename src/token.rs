//! Classification of single command line tokens.
//!
//! Every function here looks at one token in isolation; none of them know
//! anything about registered commands or flags.

/// Prefix that addresses an inverted boolean flag (`--no-clean`).
pub const INVERTED_PREFIX: &str = "--no-";

/// Suffix that marks an argument as variadic at registration (`files...`).
pub const VARIADIC_SUFFIX: &str = "...";

fn char_len(token: &str) -> usize {
    token.chars().count()
}

/// A token is flag-shaped when it starts with `-` and has at least two characters.
pub fn is_flag(token: &str) -> bool {
    char_len(token) >= 2 && token.starts_with('-')
}

/// `-v`, but not `--` and not `-verbose`.
pub fn is_short_flag(token: &str) -> bool {
    is_flag(token) && char_len(token) == 2 && !token.starts_with("--")
}

/// Returns the flag name behind a `--no-` token, if the token has that shape.
pub fn inverted_flag_name(token: &str) -> Option<&str> {
    if !is_flag(token) {
        return None;
    }
    token.strip_prefix(INVERTED_PREFIX)
}

/// Returns the argument name without its `...` suffix for variadic declarations.
///
/// Only meaningful for names passed to registration, never for runtime tokens.
pub fn variadic_arg_name(name: &str) -> Option<&str> {
    if is_flag(name) {
        return None;
    }
    name.strip_suffix(VARIADIC_SUFFIX)
}

/// Whether a flag-shaped token has a malformed dash structure.
///
/// Two-character flags must use exactly one dash; longer flags must use
/// exactly two. Tokens that are not flag-shaped are never unsupported.
pub fn is_unsupported_flag(token: &str) -> bool {
    if !is_flag(token) {
        return false;
    }

    if char_len(token) == 2 {
        return token.starts_with("--");
    }

    !token.starts_with("--") || token.starts_with("---")
}

/// Splits flag-shaped tokens on `=` and drops the empty fragments.
///
/// `--version=2.0.0` becomes `--version`, `2.0.0`. Non-flag tokens pass
/// through untouched, so positional values may contain `=`.
pub fn normalize<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut normalized = Vec::with_capacity(tokens.len());

    for token in tokens {
        let token = token.as_ref();
        if is_flag(token) && token.contains('=') {
            normalized.extend(
                token
                    .split('=')
                    .filter(|fragment| !fragment.is_empty())
                    .map(str::to_string),
            );
        } else {
            normalized.push(token.to_string());
        }
    }

    normalized
}
