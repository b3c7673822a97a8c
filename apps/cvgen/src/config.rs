use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults suit a local run.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub snapshot_path: PathBuf,
    pub fetch_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let fetch_timeout_secs = optional_env("CVGEN_FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("CVGEN_FETCH_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            output_dir: optional_env("CVGEN_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            snapshot_path: optional_env("CVGEN_SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".cvgen/snapshot.json")),
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
