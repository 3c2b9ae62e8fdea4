use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::errors::ConfigError;
use super::logging::{LoggingConfig, LOG_LEVELS};
use super::resolver::{ResolverConfig, TransportFailurePolicy};

const LOCAL_CONFIG_PATH: &str = "ferrous-resolve.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-resolve/config.toml";

/// Main configuration structure for ferrous-resolve
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-resolve.toml in current directory
    /// 3. /etc/ferrous-resolve/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.bootstrap_server {
            self.resolver.bootstrap_server = server;
        }
        if let Some(port) = overrides.port {
            self.resolver.port = port;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(max_hops) = overrides.max_hops {
            self.resolver.max_hops = max_hops;
        }
        if overrides.abort_on_transport_error {
            self.resolver.transport_failure = TransportFailurePolicy::Abort;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let server = self.resolver.bootstrap_server;
        if server.is_unspecified() || server.is_broadcast() || server.is_multicast() {
            return Err(ConfigError::Validation(format!(
                "Bootstrap server {} is not a unicast address",
                server
            )));
        }

        if self.resolver.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if !self.logging.is_valid_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}', expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub bootstrap_server: Option<Ipv4Addr>,
    pub port: Option<u16>,
    pub query_timeout_ms: Option<u64>,
    pub max_hops: Option<u32>,
    pub abort_on_transport_error: bool,
    pub log_level: Option<String>,
}
