//! ssacli Command Runner
//!
//! The only part of the exporter that crosses the process boundary. Each call
//! spawns the management tool once, waits for it to exit, and hands back its
//! standard output. There is no timeout and no retry: a failed call means
//! "no data this cycle" for whatever the caller was collecting.
//!
//! # Example
//!
//! ```no_run
//! use ssacli_exporter::ssacli::{controller_list_args, CommandRunner, SsacliRunner};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let runner = SsacliRunner::new("ssacli");
//! let output = runner.run(&controller_list_args()).await?;
//! println!("{output}");
//! # Ok(())
//! # }
//! ```

use super::types::ControllerSlot;
use crate::error::{ExporterError, Result};
use std::future::Future;
use tokio::process::Command;
use tracing::debug;

/// Executes the management tool with an argument list
///
/// Implemented by [`SsacliRunner`] for real hosts; tests substitute canned output.
pub trait CommandRunner: Send + Sync {
    fn run(&self, args: &[String]) -> impl Future<Output = Result<String>> + Send;
}

/// Arguments for controller discovery: `ctrl all show`
pub fn controller_list_args() -> Vec<String> {
    ["ctrl", "all", "show"].map(String::from).to_vec()
}

/// Arguments for one controller's logical drives: `ctrl slot=N ld all show`
pub fn logical_drive_args(slot: ControllerSlot) -> Vec<String> {
    vec![
        "ctrl".to_string(),
        format!("slot={slot}"),
        "ld".to_string(),
        "all".to_string(),
        "show".to_string(),
    ]
}

/// Runs the real `ssacli` binary
#[derive(Debug, Clone)]
pub struct SsacliRunner {
    program: String,
}

impl SsacliRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CommandRunner for SsacliRunner {
    async fn run(&self, args: &[String]) -> Result<String> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!("Running {}", command);

        let output = Command::new(&self.program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ExporterError::CommandLaunch {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExporterError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
