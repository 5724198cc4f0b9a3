use crate::error::ExporterError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CollectorConfig {
    /// Management tool executable, resolved through `PATH` unless absolute
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    /// Drop series for drives and controllers that vanished from ssacli output
    #[serde(default)]
    pub prune_stale_drives: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            port: default_port(),
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            poll_interval_seconds: default_poll_interval(),
            prune_stale_drives: false,
        }
    }
}

impl CollectorConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }
}

fn default_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9101
}

fn default_command() -> String {
    "ssacli".to_string()
}

fn default_poll_interval() -> u64 {
    5
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        // Load environment variables from .env if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SSACLI_EXPORTER").separator("__"))
            .build()
            .context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ExporterError> {
        if self.collector.command.trim().is_empty() {
            return Err(ExporterError::Config(
                "collector.command must not be empty".to_string(),
            ));
        }
        if self.collector.poll_interval_seconds == 0 {
            return Err(ExporterError::Config(
                "collector.poll_interval_seconds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
