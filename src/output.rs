//! Rendering parse results for display.

use crate::matches::Matches;
use crate::schema::{Arg, Flag};
use serde::Serialize;

/// A flag together with its parsed value.
#[derive(Debug, Serialize)]
pub struct FlagReport<'a> {
    #[serde(flatten)]
    pub flag: &'a Flag,
    pub value: &'a str,
    pub present: bool,
}

/// An argument together with its parsed value.
#[derive(Debug, Serialize)]
pub struct ArgReport<'a> {
    #[serde(flatten)]
    pub arg: &'a Arg,
    pub value: &'a str,
}

/// Serializable view of a [`Matches`].
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub command: &'a str,
    pub args: Vec<ArgReport<'a>>,
    pub flags: Vec<FlagReport<'a>>,
}

impl<'a> Report<'a> {
    pub fn new(matches: &'a Matches<'a>) -> Self {
        Self {
            command: matches.name(),
            args: matches
                .args()
                .map(|(arg, value)| ArgReport { arg, value })
                .collect(),
            flags: matches
                .flags()
                .map(|(flag, value)| FlagReport {
                    flag,
                    value,
                    present: matches.is_present(&flag.name),
                })
                .collect(),
        }
    }
}

fn format_arg(arg: &Arg, value: &str) -> String {
    format!(
        "Arg {{ name: {:?}, variadic: {}, default: {:?}, value: {:?} }}",
        arg.name, arg.variadic, arg.default, value
    )
}

fn format_flag(flag: &Flag, value: &str) -> String {
    let short = flag.short.map(String::from).unwrap_or_default();
    format!(
        "Flag {{ name: {:?}, short: {:?}, boolean: {}, inverted: {}, default: {:?}, value: {:?} }}",
        flag.name, short, flag.boolean, flag.inverted, flag.default, value
    )
}

/// Render one line for the command, each argument and each flag.
///
/// ```text
/// sub-command => "info"
/// argument-value => Arg { name: "category", variadic: false, default: "manager", value: "student" }
/// flag-value => Flag { name: "clean", short: "", boolean: true, inverted: true, default: "true", value: "false" }
/// ```
pub fn render_lines(matches: &Matches) -> String {
    let mut output = format!("sub-command => {:?}\n", matches.name());

    for (arg, value) in matches.args() {
        output.push_str(&format!("argument-value => {}\n", format_arg(arg, value)));
    }
    for (flag, value) in matches.flags() {
        output.push_str(&format!("flag-value => {}\n", format_flag(flag, value)));
    }

    output
}

/// Render the parse result as pretty-printed JSON.
pub fn render_json(matches: &Matches) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Report::new(matches))
}
