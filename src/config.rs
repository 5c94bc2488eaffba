//! Configuration management for the server resolver.
//!
//! Handles:
//! - Command-line argument parsing
//! - Go-style single-dash flags (`-name foo`)
//! - Default servers file location

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::combine::CombineMode;
use crate::error::LookupError;
use crate::format::DEFAULT_FORMAT;
use crate::matching::Criterion;
use crate::servers::DEFAULT_SERVERS_FILE;

/// Command-line arguments for the server resolver
#[derive(Debug, Parser)]
#[command(name = "q2resolve")]
#[command(about = "Look up Quake 2 servers by name, group or address")]
#[command(version)]
pub struct Args {
    /// Servers file to read instead of ~/.q2servers.config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output template
    #[arg(
        long,
        default_value = DEFAULT_FORMAT,
        allow_hyphen_values = true,
        help = "Output template (%n name, %a address, %h host, %p port, %s ssh host, %l log file, %g groups)"
    )]
    pub format: String,

    /// Regex pattern for the server name
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub name: Option<String>,

    /// Regex pattern for the server groups
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub group: Option<String>,

    /// Regex pattern for the server address
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub address: Option<String>,

    /// Match servers satisfying any criterion instead of all of them
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub union: bool,

    /// Log level for diagnostics
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Flags that take a value, as spelled without dashes
const VALUE_FLAGS: &[&str] = &["config", "format", "name", "group", "address", "log-level"];

/// Flags without a value
const SWITCH_FLAGS: &[&str] = &["union", "help", "version"];

/// Resolved, read-only configuration for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Explicit servers file, if one was given
    pub servers_file: Option<PathBuf>,
    pub format: String,
    pub name: Option<String>,
    pub group: Option<String>,
    pub address: Option<String>,
    pub union: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            servers_file: None,
            format: DEFAULT_FORMAT.to_string(),
            name: None,
            group: None,
            address: None,
            union: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Self {
        Config {
            servers_file: args.config,
            format: args.format,
            name: non_empty(args.name),
            group: non_empty(args.group),
            address: non_empty(args.address),
            union: args.union,
            log_level: args.log_level,
        }
    }

    /// The servers file to read: the explicit one or `~/.q2servers.config`
    pub fn servers_file(&self) -> Result<PathBuf, LookupError> {
        match &self.servers_file {
            Some(path) => Ok(path.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(DEFAULT_SERVERS_FILE))
                .ok_or(LookupError::HomeDirUnavailable),
        }
    }

    /// Requested criteria with their patterns, in name, group, address order
    pub fn criteria(&self) -> Vec<(Criterion, &str)> {
        Criterion::ALL
            .into_iter()
            .filter_map(|criterion| {
                let pattern = match criterion {
                    Criterion::Name => self.name.as_deref(),
                    Criterion::Group => self.group.as_deref(),
                    Criterion::Address => self.address.as_deref(),
                };
                pattern.map(|p| (criterion, p))
            })
            .collect()
    }

    pub fn combine_mode(&self) -> CombineMode {
        CombineMode::from_union_flag(self.union)
    }
}

fn non_empty(pattern: Option<String>) -> Option<String> {
    pattern.filter(|p| !p.is_empty())
}

/// Rewrite Go-style `-flag` arguments to `--flag`.
///
/// Only known flag names are rewritten, values following a flag are left
/// alone and everything after a bare `--` is passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut args = args.into_iter().map(Into::into);

    if let Some(program) = args.next() {
        out.push(program);
    }

    let mut expect_value = false;
    let mut passthrough = false;
    for arg in args {
        if passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let long = text.strip_prefix("--").or_else(|| text.strip_prefix('-'));
        let Some(long) = long else {
            out.push(arg);
            continue;
        };

        let (flag, inline_value) = match long.split_once('=') {
            Some((flag, _)) => (flag, true),
            None => (long, false),
        };

        if VALUE_FLAGS.contains(&flag) {
            expect_value = !inline_value;
            out.push(OsString::from(format!("--{long}")));
        } else if SWITCH_FLAGS.contains(&flag) {
            out.push(OsString::from(format!("--{long}")));
        } else {
            out.push(arg);
        }
    }

    out
}
