use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use url::Url;

use crate::deep_link::{query_parameters, DeepLinkBuilder, PathPattern};
use crate::runtime_config::RouterConfig;
use crate::telemetry::{init_logging, LogConfig};

/// Command-line interface for navrouter
///
/// Utilities for working with deep links and router configuration outside an
/// application.
#[derive(Parser)]
#[command(name = "navrouter")]
#[command(about = "navrouter deep-link and configuration tools", long_about = None)]
pub struct Cli {
    /// Emit logs (configured through NAVROUTER_LOG_* / RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Match a URL path against path patterns
    ///
    /// Patterns are tried in order; the first match is printed as JSON with
    /// its path parameters merged with the URL's query parameters.
    Match {
        /// Path pattern such as `/user/:id` (repeatable, tried in order)
        #[arg(short, long = "pattern", required = true)]
        patterns: Vec<String>,

        /// URL to match
        url: String,
    },
    /// Build a deep-link URL
    Build {
        /// URL scheme (e.g. `myapp` or `https`)
        #[arg(long)]
        scheme: String,

        /// Optional host
        #[arg(long)]
        host: Option<String>,

        /// URL path
        #[arg(long)]
        path: String,

        /// Query parameter as `key=value` (repeatable)
        #[arg(short, long = "query", value_parser = parse_key_val)]
        query: Vec<(String, String)>,
    },
    /// Print the effective router configuration as JSON
    Config {
        /// TOML file to load instead of the environment
        #[arg(short, long, env = "NAVROUTER_CONFIG")]
        file: Option<PathBuf>,
    },
}

pub(crate) fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parse the process arguments and execute the command, writing to stdout.
///
/// # Errors
///
/// Returns an error if:
/// - The URL cannot be parsed or no pattern matches it
/// - The deep link cannot be built
/// - The configuration file cannot be read or is invalid
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        init_logging(&LogConfig::from_env())?;
    }
    let stdout = std::io::stdout();
    execute(&cli.command, &mut stdout.lock())
}

/// Execute `command`, writing its output to `out`.
pub fn execute(command: &Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Match { patterns, url } => {
            let url = Url::parse(url).with_context(|| format!("Invalid URL: {url}"))?;
            let path = url.path();
            let (pattern, mut params) = patterns
                .iter()
                .map(|raw| PathPattern::compile(raw))
                .find_map(|pattern| {
                    let params = pattern.match_path(path)?;
                    Some((pattern, params))
                })
                .ok_or_else(|| anyhow!("No pattern matches path `{path}`"))?;
            if let Some(query) = query_parameters(&url) {
                params.extend(query);
            }
            tracing::debug!(pattern = %pattern, path = %path, "Pattern matched");

            let params: BTreeMap<_, _> = params.into_iter().collect();
            let body = json!({ "pattern": pattern.as_str(), "params": params });
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        }
        Commands::Build {
            scheme,
            host,
            path,
            query,
        } => {
            let mut builder = DeepLinkBuilder::new(scheme.as_str());
            if let Some(host) = host {
                builder = builder.with_host(host.as_str());
            }
            let pairs = query.iter().map(|(k, v)| (k.as_str(), v.as_str()));
            let url = builder.build_with_query(path, pairs)?;
            writeln!(out, "{url}")?;
        }
        Commands::Config { file } => {
            let config = match file {
                Some(path) => RouterConfig::from_file(path)?,
                None => RouterConfig::from_env(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        }
    }
    Ok(())
}
