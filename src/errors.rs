// src/errors.rs

//! Crate-wide error type and helpers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdCmdError {
    #[error("invalid command reference: {0}")]
    MalformedReference(String),

    #[error("failed to initialise command log at {path}: {source}")]
    LogInit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("command {namespace}/{name}@{version} not found in the registry")]
    CommandNotFound {
        namespace: String,
        name: String,
        version: String,
    },

    #[error("registry request failed: {0}")]
    Registry(#[from] reqwest::Error),

    #[error("unexpected registry response: {0}")]
    RegistryResponse(String),

    #[error("failed to open {stream} pipe for command process")]
    PipeSetup { stream: &'static str },

    #[error("failed to start command '{path}': {source}")]
    CommandStart {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("command exited with status {code}")]
    CommandFailed { code: i32 },

    #[error("{format} commands are not supported yet")]
    UnsupportedFormat { format: &'static str },

    #[error("{0} is not implemented yet")]
    Unimplemented(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SdCmdError {
    /// Exit status the host process should terminate with for this error.
    ///
    /// A failed command propagates the child's own exit status; every other
    /// failure maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            SdCmdError::CommandFailed { code } => *code,
            _ => 1,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, SdCmdError>;
