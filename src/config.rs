// src/config.rs

//! Runtime configuration from Screwdriver-injected environment variables.
//!
//! The tool is configured entirely by its CI environment; there is no config
//! file. The loaded `Config` value is threaded explicitly through `run` and
//! the executor instead of living in a global.

use std::env;
use std::path::PathBuf;

pub const ARTIFACTS_DIR_ENV: &str = "SD_ARTIFACTS_DIR";
pub const API_URL_ENV: &str = "SD_API_URL";
pub const TOKEN_ENV: &str = "SD_TOKEN";

const DEFAULT_API_URL: &str = "https://api.screwdriver.cd/v4/";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory for build artifacts; command logs land under
    /// `<artifacts_dir>/.sd/commands/`.
    pub artifacts_dir: PathBuf,

    /// Base URL of the command registry API.
    pub api_url: String,

    /// Bearer token for registry requests. May be empty for anonymous access.
    pub api_token: String,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        let artifacts_dir = env::var_os(ARTIFACTS_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let api_url = env::var(API_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_token = env::var(TOKEN_ENV).unwrap_or_default();

        Self {
            artifacts_dir,
            api_url,
            api_token,
        }
    }
}
