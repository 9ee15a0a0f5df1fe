//! Process configuration: backend mode, remote address, storage medium,
//! simulated latency, eviction policy and logging.
//!
//! ```toml
//! mode = "local"
//!
//! [remote]
//! api_url = "http://localhost:5000/api"
//! timeout_ms = 10000
//!
//! [storage]
//! dir = "/var/lib/shopvault"
//! capacity = 5242880
//!
//! [latency]
//! list_ms = 300
//! create_ms = 500
//!
//! [eviction]
//! priority = ["mv_session_recordings", "mv_analytics_events"]
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use crate::medium::DEFAULT_CAPACITY;
use crate::repository::{Latency, Mode};
use crate::store::EvictionPolicy;

pub const ENV_MODE: &str = "SHOPVAULT_MODE";
pub const ENV_API_URL: &str = "SHOPVAULT_API_URL";
pub const ENV_STORAGE_DIR: &str = "SHOPVAULT_STORAGE_DIR";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: Mode,
    pub remote: RemoteConfig,
    pub storage: StorageConfig,
    pub latency: LatencyConfig,
    pub eviction: EvictionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub api_url: String,
    pub timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000/api".into(),
            timeout_ms: 10_000,
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for a file-backed medium; in-memory when unset.
    pub dir: Option<PathBuf>,
    /// Quota in UTF-16 code units.
    pub capacity: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub list_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_ms: 300,
            create_ms: 500,
            update_ms: 300,
            delete_ms: 300,
        }
    }
}

impl LatencyConfig {
    pub fn latency(&self) -> Latency {
        Latency {
            list: Duration::from_millis(self.list_ms),
            create: Duration::from_millis(self.create_ms),
            update: Duration::from_millis(self.update_ms),
            delete: Duration::from_millis(self.delete_ms),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EvictionConfig {
    pub priority: Vec<String>,
}

impl Default for EvictionConfig {
    fn default() -> Self {
        Self {
            priority: EvictionPolicy::default().priority().to_vec(),
        }
    }
}

impl EvictionConfig {
    pub fn policy(&self) -> EvictionPolicy {
        EvictionPolicy::new(self.priority.iter().cloned())
    }
}

impl Config {
    /// Load and validate a TOML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate TOML config text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by the process environment (and a `.env` file if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let mut config = Self::default();
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `SHOPVAULT_*` overrides using `lookup` to resolve variables.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup(ENV_MODE) {
            self.mode = mode.parse().map_err(|reason| ConfigError::InvalidValue {
                field: "mode",
                reason,
            })?;
        }
        if let Some(url) = lookup(ENV_API_URL) {
            self.remote.api_url = url;
        }
        if let Some(dir) = lookup(ENV_STORAGE_DIR) {
            self.storage.dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.remote.api_url;
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "remote.api_url",
                reason: "cannot be empty".into(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "remote.api_url",
                reason: format!("expected an http(s) address, got {}", url),
            });
        }
        if self.storage.capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "storage.capacity",
                reason: "must be greater than zero".into(),
            });
        }
        self.logging
            .validate()
            .map_err(|reason| ConfigError::InvalidValue {
                field: "logging",
                reason,
            })?;
        if self.eviction.priority.iter().any(|key| key.is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "eviction.priority",
                reason: "keys cannot be empty".into(),
            });
        }
        Ok(())
    }
}
