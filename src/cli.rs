// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line arguments for `sd-cmd`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sd-cmd",
    version,
    about = "Fetch and run commands published to a Screwdriver command registry.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SD_CMD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Execute a published command: `sd-cmd exec ns/name@version [args...]`.
    Exec(ForwardedArgs),

    /// Publish a command to the registry.
    Publish(ForwardedArgs),

    /// Promote a command version to a tag.
    Promote(ForwardedArgs),

    /// Validate a command definition file.
    Validate(ForwardedArgs),

    /// Default path: `sd-cmd ns/name@version [args...]` behaves like `exec`.
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Raw arguments handed through to a subcommand untouched.
///
/// `trailing_var_arg` + `allow_hyphen_values` keep flags meant for the
/// executed command (e.g. `--fix`) out of clap's hands.
#[derive(Debug, Clone, Args)]
pub struct ForwardedArgs {
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "REFERENCE [ARGS]..."
    )]
    pub args: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
