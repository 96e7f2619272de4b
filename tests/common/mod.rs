#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use sd_cmd::config::Config;
use sd_cmd::errors::Result;
use sd_cmd::exec;
use sd_cmd_test_utils::fake_registry::FakeRegistry;

/// Config pointing at a scratch artifacts dir; the registry URL is never
/// contacted because tests use `FakeRegistry`.
pub fn test_config(artifacts_dir: &Path) -> Config {
    Config {
        artifacts_dir: artifacts_dir.to_path_buf(),
        api_url: "http://registry.invalid/v4/".to_string(),
        api_token: String::new(),
    }
}

/// Directory the log session writes into for one command reference.
pub fn log_dir(artifacts_dir: &Path, namespace: &str, name: &str, version: &str) -> PathBuf {
    artifacts_dir
        .join(".sd")
        .join("commands")
        .join(namespace)
        .join(name)
        .join(version)
}

/// Concatenated contents of every log file under `dir`, oldest first.
pub fn read_logs(dir: &Path) -> String {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .expect("log dir should exist")
        .map(|entry| entry.expect("dir entry").path())
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|p| fs::read_to_string(p).expect("log file should be readable"))
        .collect::<Vec<_>>()
        .join("")
}

/// Number of log files under `dir`.
pub fn log_file_count(dir: &Path) -> usize {
    fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

/// Build an executor for `raw` and run it to completion.
pub async fn dispatch_and_run(
    registry: &FakeRegistry,
    config: &Config,
    raw: &[&str],
) -> Result<()> {
    let raw: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
    let mut executor = exec::new(registry, config, &raw).await?;
    executor.run().await
}
