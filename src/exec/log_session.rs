// src/exec/log_session.rs

//! Per-invocation command log.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

use crate::errors::{Result, SdCmdError};
use crate::reference::CommandRef;

/// One append-only log file for one command invocation.
///
/// The file lives at
/// `<artifacts>/.sd/commands/<namespace>/<name>/<version>/<unix-seconds>.log`.
/// Two invocations of the same command within the same second land in the
/// same file; append mode keeps both outputs intact.
///
/// Writes must come from a single writer at a time; the runner enforces this
/// by funnelling all captured output through one writer loop, so the session
/// itself carries no lock.
pub struct LogSession {
    path: PathBuf,
    file: File,
}

impl LogSession {
    /// Create the log directory and open a fresh append-only log file keyed
    /// by the command reference and the current Unix timestamp.
    pub async fn create(artifacts_dir: &Path, reference: &CommandRef) -> Result<Self> {
        let dir = artifacts_dir
            .join(".sd")
            .join("commands")
            .join(&reference.namespace)
            .join(&reference.name)
            .join(&reference.version);
        fs::create_dir_all(&dir)
            .await
            .map_err(|source| SdCmdError::LogInit {
                path: dir.clone(),
                source,
            })?;

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let path = dir.join(format!("{stamp}.log"));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|source| SdCmdError::LogInit {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "command log initialised");
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line at debug level, mirrored to `tracing`.
    pub async fn debug(&mut self, line: &str) -> std::io::Result<()> {
        debug!("{line}");
        self.write_line(line).await
    }

    /// Append one error line; used when resolution fails after the session
    /// has already been created.
    pub async fn error(&mut self, line: &str) -> std::io::Result<()> {
        error!("{line}");
        self.write_line(&format!("ERROR: {line}")).await
    }

    async fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.file.write_all(line.as_bytes()).await?;
        self.file.write_all(b"\n").await?;
        self.file.flush().await
    }
}
