// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod reference;
pub mod registry;

use tracing::info;

use crate::cli::{CliArgs, Command};
use crate::config::Config;
use crate::errors::{Result, SdCmdError};
use crate::registry::HttpRegistry;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - configuration from the environment
/// - the registry client
/// - executor construction and the run itself
///
/// `sd-cmd ns/name@version ...` with no subcommand takes the `exec` path.
pub async fn run(args: CliArgs) -> Result<()> {
    let config = Config::from_env();

    match args.command {
        Command::Exec(forwarded) => run_exec(&config, forwarded.args).await,
        Command::External(argv) => run_exec(&config, argv).await,
        Command::Publish(_) => Err(SdCmdError::Unimplemented("publish")),
        Command::Promote(_) => Err(SdCmdError::Unimplemented("promote")),
        Command::Validate(_) => Err(SdCmdError::Unimplemented("validate")),
    }
}

async fn run_exec(config: &Config, raw_args: Vec<String>) -> Result<()> {
    let registry = HttpRegistry::new(config.api_url.clone(), config.api_token.clone());
    let mut executor = exec::new(&registry, config, &raw_args).await?;
    executor.run().await?;
    info!("command finished successfully");
    Ok(())
}
