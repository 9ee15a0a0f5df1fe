//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber. `RUST_LOG` overrides `level`.
    ///
    /// Does nothing if a global subscriber is already installed.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| self.filter())
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = match self.format.as_str() {
            "json" => fmt().json().with_env_filter(filter).try_init(),
            _ => fmt().with_env_filter(filter).try_init(),
        };
    }

    /// Filter built from `level`, e.g. `info` or `shopvault=debug,warn`.
    pub fn filter(&self) -> Result<EnvFilter, String> {
        EnvFilter::try_new(&self.level).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        self.filter()?;
        match self.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(format!("unknown log format {:?}, expected json or pretty", other)),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
