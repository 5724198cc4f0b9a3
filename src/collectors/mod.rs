//! Metrics Collectors
//!
//! One poll cycle is controller discovery followed by a logical-drive query
//! per discovered slot. Each step asks the [`CommandRunner`] for output,
//! parses it, and publishes gauges into the [`MetricsStore`].
//!
//! # Error Handling
//!
//! Failures are non-fatal and scoped: a failed discovery ends the cycle,
//! a failed slot query skips only that slot. Nothing here stops the
//! collection loop.

use crate::config::CollectorConfig;
use crate::metrics::MetricsStore;
use crate::ssacli::{CommandRunner, ControllerSlot};
use std::collections::BTreeSet;
use tracing::{info, warn};

pub mod controller;
pub mod logical_drive;

pub use controller::collect_controllers;
pub use logical_drive::{collect_logical_drives, DriveOutcome};

/// Shared context passed to all collectors
///
/// All fields are immutable references, so no invariants can be violated.
pub struct CollectionContext<'a, R> {
    /// Runs ssacli (or a stand-in)
    pub runner: &'a R,
    pub metrics: &'a MetricsStore,
    pub config: &'a CollectorConfig,
}

// Derived impls would demand `R: Copy`
impl<R> Clone for CollectionContext<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for CollectionContext<'_, R> {}

/// Status of a metrics collection operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    /// Metrics were successfully collected and updated
    Success,
    /// Collection failed but is non-fatal (already logged as warning)
    Failed,
}

/// Result type for collector functions
///
/// - `Ok(CollectionStatus::Success)` = Collection succeeded
/// - `Ok(CollectionStatus::Failed)` = Collection failed but non-fatal (logged as warning)
/// - `Err(_)` = Fatal error (should propagate)
pub type CollectionResult = Result<CollectionStatus, anyhow::Error>;

/// Helper to reduce boilerplate in collectors
///
/// - On success: processes the output, returns `CollectionStatus::Success`
/// - On error: logs a warning, returns `CollectionStatus::Failed`
///
/// # Examples
///
/// ```no_run
/// # use ssacli_exporter::collectors::*;
/// # use ssacli_exporter::ssacli::{controller_list_args, CommandRunner};
/// async fn example<R: CommandRunner>(ctx: &CollectionContext<'_, R>) -> CollectionResult {
///     let args = controller_list_args();
///     collect_with_handler("controllers", ctx.runner.run(&args), |output| {
///         println!("{output}");
///     })
///     .await
/// }
/// ```
pub async fn collect_with_handler<T, F, P, E>(
    name: &str,
    query_future: F,
    process: P,
) -> CollectionResult
where
    F: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: FnOnce(T),
{
    match query_future.await {
        Ok(data) => {
            process(data);
            Ok(CollectionStatus::Success)
        }
        Err(e) => {
            warn!("Failed to query {}: {}", name, e);
            Ok(CollectionStatus::Failed)
        }
    }
}

/// Summary of one poll cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Whether `ctrl all show` succeeded
    pub discovered: bool,
    /// Slots queried, in discovery order (duplicates included)
    pub slots: Vec<ControllerSlot>,
    pub failed_slots: Vec<ControllerSlot>,
    pub drives_updated: usize,
    pub drives_skipped: usize,
    pub drives_pruned: usize,
}

/// Runs one full poll cycle: discovery, then every slot's logical drives.
pub async fn collect_cycle<R: CommandRunner>(ctx: &CollectionContext<'_, R>) -> CycleReport {
    let mut report = CycleReport::default();

    let Some(slots) = collect_controllers(ctx).await else {
        ctx.metrics.set_up(false);
        return report;
    };
    ctx.metrics.set_up(true);
    report.discovered = true;

    let mut refreshed: BTreeSet<ControllerSlot> = BTreeSet::new();
    let mut seen: BTreeSet<(ControllerSlot, u32)> = BTreeSet::new();

    for slot in slots {
        report.slots.push(slot);
        match collect_logical_drives(ctx, slot).await {
            Some(outcome) => {
                report.drives_updated += outcome.updated.len();
                report.drives_skipped += outcome.skipped;
                refreshed.insert(slot);
                seen.extend(outcome.updated.into_iter().map(|number| (slot, number)));
            }
            None => report.failed_slots.push(slot),
        }
    }

    if ctx.config.prune_stale_drives {
        report.drives_pruned = prune_stale_drives(ctx.metrics, &report.slots, &refreshed, &seen);
    }

    info!(
        "Collected {} logical drives from {} controllers ({} failed, {} skipped)",
        report.drives_updated,
        report.slots.len(),
        report.failed_slots.len(),
        report.drives_skipped
    );

    report
}

/// Removes series whose controller is gone, or whose controller was re-read
/// without listing the drive. Slots that failed this cycle keep their series.
fn prune_stale_drives(
    metrics: &MetricsStore,
    discovered: &[ControllerSlot],
    refreshed: &BTreeSet<ControllerSlot>,
    seen: &BTreeSet<(ControllerSlot, u32)>,
) -> usize {
    let mut pruned = 0;

    for (slot, number) in metrics.drive_keys() {
        let slot_gone = !discovered.contains(&slot);
        let drive_gone = refreshed.contains(&slot) && !seen.contains(&(slot, number));
        if (slot_gone || drive_gone) && metrics.remove_drive(slot, number) {
            info!(
                "Removed stale logical drive {} on controller slot {}",
                number, slot
            );
            pruned += 1;
        }
    }

    pruned
}
