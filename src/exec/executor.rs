// src/exec/executor.rs

//! Executor construction: reference parsing, log session setup, registry
//! resolution, and format dispatch.

use std::future::Future;
use std::pin::Pin;

use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::{Result, SdCmdError};
use crate::exec::binary::BinaryCommand;
use crate::exec::log_session::LogSession;
use crate::reference;
use crate::registry::{CommandFormat, Registry};

/// Single-method capability produced by [`new`].
///
/// Production code gets a [`BinaryCommand`]; a future format plugs in by
/// returning a different implementation from the dispatch below.
pub trait Executor: Send {
    fn run(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Resolve `raw_args` into a ready-to-run executor.
///
/// The log session is created before the registry is contacted, so
/// resolution failures land in the invocation log as well. No step retries;
/// every failure surfaces to the caller unchanged.
pub async fn new(
    registry: &dyn Registry,
    config: &Config,
    raw_args: &[String],
) -> Result<Box<dyn Executor>> {
    let reference = reference::parse_args(raw_args)?;

    let mut session = LogSession::create(&config.artifacts_dir, &reference).await?;

    let spec = match registry
        .get_command(&reference.namespace, &reference.name, &reference.version)
        .await
    {
        Ok(spec) => spec,
        Err(err) => {
            if let Err(write_err) = session.error(&err.to_string()).await {
                warn!(error = %write_err, "failed to record resolution failure in command log");
            }
            return Err(err);
        }
    };

    debug!(format = spec.format.label(), "resolved command specification");

    match spec.format {
        CommandFormat::Binary { ref binary } => {
            let forwarded = reference.forwarded_args(raw_args).to_vec();
            Ok(Box::new(BinaryCommand::new(
                binary.path.clone(),
                forwarded,
                session,
            )))
        }
        ref other => Err(SdCmdError::UnsupportedFormat {
            format: other.label(),
        }),
    }
}
