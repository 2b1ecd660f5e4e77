use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

/// Top-level store configuration, loaded from TOML.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub latency: LatencyConfig,
}

/// Simulated remote latency per operation, in milliseconds.
///
/// Defaults mirror the stand-in delays the mock backend has always used.
/// Zero is legal and means the call resolves on the next poll; tests rely
/// on that.
#[derive(Debug, Clone, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_fetch_ms")]
    pub fetch_ms: u64,
    #[serde(default = "default_create_ms")]
    pub create_ms: u64,
    #[serde(default = "default_update_ms")]
    pub update_ms: u64,
    #[serde(default = "default_delete_ms")]
    pub delete_ms: u64,
}

fn default_fetch_ms() -> u64 { 1000 }
fn default_create_ms() -> u64 { 800 }
fn default_update_ms() -> u64 { 600 }
fn default_delete_ms() -> u64 { 500 }

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            fetch_ms: default_fetch_ms(),
            create_ms: default_create_ms(),
            update_ms: default_update_ms(),
            delete_ms: default_delete_ms(),
        }
    }
}

impl LatencyConfig {
    /// All delays zeroed; operations still suspend but resolve immediately.
    pub fn instant() -> Self {
        Self { fetch_ms: 0, create_ms: 0, update_ms: 0, delete_ms: 0 }
    }

    pub fn fetch(&self) -> Duration {
        Duration::from_millis(self.fetch_ms)
    }

    pub fn create(&self) -> Duration {
        Duration::from_millis(self.create_ms)
    }

    pub fn update(&self) -> Duration {
        Duration::from_millis(self.update_ms)
    }

    pub fn delete(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }
}

/// Load configuration from `CONFIG_PATH`, falling back to `config.toml`.
/// A missing file yields the defaults rather than an error.
pub fn load_default() -> Result<StoreConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !std::path::Path::new(&path).exists() {
        return Ok(StoreConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<StoreConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: StoreConfig = toml::from_str(&content)?;
    Ok(cfg)
}
