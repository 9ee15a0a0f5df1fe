use serde::{Deserialize, Serialize};
use shopvault_macros::Record;

use super::Seeded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

/// Administrative audit entry. Telemetry: first in line for eviction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "mv_system_logs", endpoint = "logs", prefix = "log")]
pub struct SystemLog {
    #[serde(default)]
    pub id: u64,
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    #[serde(default)]
    pub user: Option<String>,
}

impl SystemLog {
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            timestamp: chrono::Utc::now().to_rfc3339(),
            level,
            message: message.into(),
            user: None,
        }
    }
}

impl Seeded for SystemLog {
    fn defaults() -> Vec<Self> {
        Vec::new()
    }
}
