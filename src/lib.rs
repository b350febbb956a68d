//! clapper - getopt(3)-style command line parsing.
//!
//! Register a root command (named `""`) and any number of sub-commands, each
//! with flags and positional arguments, then parse the process arguments:
//!
//! ```
//! use clapper::Registry;
//!
//! let mut registry = Registry::new();
//! let (info, _) = registry.register("info");
//! info.add_arg("category", "manager");
//! info.add_arg("subjects...", "");
//! info.add_flag("verbose", "v", true, "");
//! info.add_flag("no-clean", "", true, "");
//!
//! let matches = registry
//!     .parse(&["info", "student", "-v", "--no-clean", "math", "physics"])
//!     .unwrap();
//! assert_eq!(matches.name(), "info");
//! assert_eq!(matches.arg("category"), Some("student"));
//! assert_eq!(matches.arg("subjects"), Some("math,physics"));
//! assert_eq!(matches.flag("verbose"), Some("true"));
//! assert_eq!(matches.flag("clean"), Some("false"));
//! ```

pub mod config;
pub mod matches;
pub mod output;
pub mod parser;
pub mod schema;
pub mod token;

pub use config::{ArgConfig, CommandConfig, ConfigError, FlagConfig, SchemaConfig};
pub use matches::Matches;
pub use output::{render_json, render_lines, Report};
pub use parser::{parse_args, ParseError, ParseResult};
pub use schema::{Arg, Command, Flag, Registry};
