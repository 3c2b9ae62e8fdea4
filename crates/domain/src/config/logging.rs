use serde::{Deserialize, Serialize};

pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,

    Json,
}

impl LoggingConfig {
    pub fn is_valid_level(&self) -> bool {
        LOG_LEVELS
            .iter()
            .any(|level| level.eq_ignore_ascii_case(self.level.trim()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// Stdout carries the resolution trace.
fn default_log_level() -> String {
    "warn".to_string()
}
