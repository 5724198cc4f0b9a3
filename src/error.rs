use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("Failed to launch {command}: {source}")]
    CommandLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("HTTP server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, ExporterError>;
