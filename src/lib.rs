//! HPE Smart Array Prometheus Exporter
//!
//! Polls `ssacli` for controller and logical drive health and exposes the
//! results in Prometheus format.
//!
//! # Overview
//!
//! A background loop runs `ssacli ctrl all show` to discover controllers, then
//! `ssacli ctrl slot=N ld all show` for each one. The text output is parsed
//! into typed records, normalized into gauge values, and published into a
//! shared store that `/metrics` renders on demand.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ctrl all show    ┌──────────────┐
//! │  ssacli  │ ◄────────────────  │   Exporter   │
//! │          │   ld all show      │              │
//! └──────────┘                    │  ┌────────┐  │      HTTP      ┌────────────┐
//!                                 │  │ Parser │  │ ◄────────────► │ Prometheus │
//!                                 │  └────────┘  │   /metrics     └────────────┘
//!                                 │  ┌────────┐  │
//!                                 │  │Metrics │  │
//!                                 │  └────────┘  │
//!                                 └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`ssacli`] - Command runner, output parser, and unit normalization
//! - [`collectors`] - One poll cycle: discovery and per-controller collection
//! - [`metrics`] - Prometheus metric store
//! - [`scheduler`] - Fixed-interval collection loop
//! - [`server`] - HTTP server and startup
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use ssacli_exporter::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/Default.toml")?;
//!     server::start(config).await?;
//!     Ok(())
//! }
//! ```

pub mod collectors;
pub mod config;
pub mod error;
pub mod metrics;
pub mod scheduler;
pub mod server;
pub mod ssacli;
