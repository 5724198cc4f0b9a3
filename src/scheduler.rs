//! Collection Loop
//!
//! Drives [`collect_cycle`] on a fixed interval. The next sleep starts only
//! after the current cycle returns, so cycles never overlap and a slow ssacli
//! call pushes the following poll back. A cycle in flight is never cancelled;
//! shutdown is observed between cycles and during the sleep.

use crate::collectors::{collect_cycle, CollectionContext};
use crate::config::CollectorConfig;
use crate::metrics::MetricsStore;
use crate::ssacli::CommandRunner;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, info};

/// Owns everything a collection cycle borrows
pub struct Scheduler<R> {
    runner: R,
    metrics: MetricsStore,
    config: CollectorConfig,
}

impl<R: CommandRunner> Scheduler<R> {
    pub fn new(runner: R, metrics: MetricsStore, config: CollectorConfig) -> Self {
        Self {
            runner,
            metrics,
            config,
        }
    }

    pub fn context(&self) -> CollectionContext<'_, R> {
        CollectionContext {
            runner: &self.runner,
            metrics: &self.metrics,
            config: &self.config,
        }
    }

    /// Runs a single poll cycle to completion.
    pub async fn run_once(&self) {
        collect_cycle(&self.context()).await;
    }

    /// Polls until `shutdown` carries `true` or its sender is dropped.
    ///
    /// Returns the number of completed cycles.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> u64 {
        let interval = self.config.poll_interval();
        info!("Polling ssacli every {:?}", interval);
        run_collection_loop(interval, &mut shutdown, || self.run_once()).await
    }
}

/// Calls `cycle`, sleeps `interval`, repeats until shutdown is signalled.
pub async fn run_collection_loop<F, Fut>(
    interval: Duration,
    shutdown: &mut watch::Receiver<bool>,
    mut cycle: F,
) -> u64
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    let mut cycles = 0;

    loop {
        if *shutdown.borrow() {
            break;
        }

        cycle().await;
        cycles += 1;

        // Dropped sender stops the loop
        let sender_gone = tokio::select! {
            _ = sleep(interval) => false,
            changed = shutdown.changed() => changed.is_err(),
        };
        if sender_gone {
            break;
        }
    }

    debug!("Collection loop stopped after {} cycles", cycles);
    cycles
}
