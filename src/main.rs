//! clapper - getopt-style argument parsing from a declarative schema.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clapper::{render_json, render_lines, Matches, Registry, SchemaConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

/// Parse command line tokens against a command schema.
#[derive(Parser, Debug)]
#[command(name = "clapper", version, about, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse tokens against a JSON schema
    Parse {
        /// JSON schema describing the commands
        #[arg(long, required_unless_present = "schema_file", conflicts_with = "schema_file")]
        schema: Option<String>,

        /// Read the JSON schema from a file
        #[arg(long)]
        schema_file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Tokens to parse
        #[arg(last = true)]
        tokens: Vec<String>,
    },

    /// Parse tokens against the built-in demo schema
    Demo {
        /// Leave the root command unregistered
        #[arg(long)]
        no_root: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Tokens to parse
        #[arg(last = true)]
        tokens: Vec<String>,
    },
}

/// Exit status for tokens that do not match the schema.
const PARSE_FAILURE: u8 = 2;

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            schema,
            schema_file,
            json,
            tokens,
        } => {
            let schema = match (schema, schema_file) {
                (Some(schema), _) => schema,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read schema file {}", path.display()))?,
                (None, None) => anyhow::bail!("either --schema or --schema-file is required"),
            };

            let cfg = SchemaConfig::from_json(&schema).context("failed to parse schema JSON")?;
            cfg.validate().context("invalid schema")?;
            tracing::debug!(commands = cfg.commands.len(), "loaded schema");

            let registry = cfg.build();
            report(&registry, &tokens, json)
        }
        Commands::Demo {
            no_root,
            json,
            tokens,
        } => {
            let registry = demo_registry(!no_root);
            report(&registry, &tokens, json)
        }
    }
}

fn report(registry: &Registry, tokens: &[String], json: bool) -> Result<ExitCode> {
    match registry.parse(tokens) {
        Ok(matches) => {
            tracing::debug!(command = matches.name(), "parsed tokens");
            print!("{}", render(&matches, json)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(%err, "parse failed");
            println!("error => {:?}", err);
            Ok(ExitCode::from(PARSE_FAILURE))
        }
    }
}

fn render(matches: &Matches, json: bool) -> Result<String> {
    if json {
        let mut out = render_json(matches).context("failed to serialize parse result")?;
        out.push('\n');
        return Ok(out);
    }
    Ok(render_lines(matches))
}

/// Root command with an `output` argument, plus the `info` and `ghost` sub-commands.
fn demo_registry(with_root: bool) -> Registry {
    let mut registry = Registry::new();

    if with_root {
        let (root, _) = registry.register("");
        root.add_arg("output", "");
        root.add_flag("force", "f", true, "");
        root.add_flag("verbose", "v", true, "");
        root.add_flag("version", "V", false, "");
        root.add_flag("dir", "", false, "/var/users");
    }

    let (info, _) = registry.register("info");
    info.add_arg("category", "manager");
    info.add_arg("username", "");
    info.add_arg("subjects...", "");
    info.add_flag("verbose", "v", true, "");
    info.add_flag("version", "V", false, "1.0.1");
    info.add_flag("output", "o", false, "./");
    info.add_flag("no-clean", "", true, "");

    registry.register("ghost");

    registry
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
