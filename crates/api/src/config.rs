//! Process configuration, read from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use prodapi_observability::LogFormat;
use thiserror::Error;

pub const ENV_BIND_ADDR: &str = "PRODAPI_BIND_ADDR";
pub const ENV_LOG_FORMAT: &str = "PRODAPI_LOG_FORMAT";
pub const ENV_SEED: &str = "PRODAPI_SEED";
pub const ENV_SHUTDOWN_GRACE_SECS: &str = "PRODAPI_SHUTDOWN_GRACE_SECS";

const MAX_SHUTDOWN_GRACE_SECS: u64 = 300;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// Load the demo catalog at startup.
    pub seed: bool,
    /// How long in-flight requests may keep running after a shutdown signal.
    pub shutdown_grace: Duration,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for `{key}`: `{value}`")]
    InvalidValue { key: &'static str, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 9090)),
            log_format: LogFormat::Json,
            seed: true,
            shutdown_grace: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = read(ENV_BIND_ADDR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|_| invalid(ENV_BIND_ADDR, &value))?;
        }

        if let Some(value) = read(ENV_LOG_FORMAT) {
            config.log_format = value
                .trim()
                .parse()
                .map_err(|_| invalid(ENV_LOG_FORMAT, &value))?;
        }

        if let Some(value) = read(ENV_SEED) {
            config.seed = parse_bool(ENV_SEED, &value)?;
        }

        if let Some(value) = read(ENV_SHUTDOWN_GRACE_SECS) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid(ENV_SHUTDOWN_GRACE_SECS, &value))?;
            config.shutdown_grace = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let secs = self.shutdown_grace.as_secs();
        if secs == 0 || secs > MAX_SHUTDOWN_GRACE_SECS {
            return Err(ConfigError::Validation(format!(
                "{ENV_SHUTDOWN_GRACE_SECS} must be in range 1..={MAX_SHUTDOWN_GRACE_SECS}"
            )));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}
