// src/registry/model.rs

//! Wire model for registry-resolved command specifications.

use std::path::PathBuf;

use serde::Deserialize;

/// Registry-resolved description of how to execute a published command.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandSpec {
    pub namespace: String,
    pub name: String,
    pub version: String,

    #[serde(flatten)]
    pub format: CommandFormat,
}

/// Execution format of a command, with its format-specific location data.
///
/// A closed set: new formats get a new variant and a new dispatch arm in the
/// executor without touching the existing ones. `Unknown` absorbs format
/// tags this build does not know about.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum CommandFormat {
    Binary { binary: BinaryLocation },
    Habitat,
    Docker,
    #[serde(other)]
    Unknown,
}

impl CommandFormat {
    pub fn label(&self) -> &'static str {
        match self {
            CommandFormat::Binary { .. } => "binary",
            CommandFormat::Habitat => "habitat",
            CommandFormat::Docker => "docker",
            CommandFormat::Unknown => "unknown",
        }
    }
}

/// Location data for `binary`-format commands.
#[derive(Debug, Clone, Deserialize)]
pub struct BinaryLocation {
    /// Path of the resolved executable on the local filesystem.
    pub path: PathBuf,
}
