//! Logical Drive Metrics Collector
//!
//! Runs `ssacli ctrl slot=N ld all show` for one controller.
//!
//! # Metrics Produced
//! - `logical_device_status` - 0 = OK, 1 = anything else
//! - `logical_device_capacity` - Capacity in MB
//! - `logical_device_raid` - RAID level, -1 for non-numeric labels
//!
//! All labelled by controller_slot, logical_device_number.

use super::{collect_with_handler, CollectionContext, CollectionStatus};
use crate::ssacli::{logical_drive_args, logical_drive_matches, CommandRunner, ControllerSlot};
use tracing::{debug, warn};

/// What a successful slot query published
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriveOutcome {
    /// Drive numbers written to the store, in textual order
    pub updated: Vec<u32>,
    /// Records dropped because their capacity could not be read
    pub skipped: usize,
}

/// Collects logical drive metrics for one controller slot.
///
/// A record whose capacity does not parse is skipped rather than published
/// with a sentinel. Prior values for the same key are overwritten.
///
/// # Returns
///
/// * `Some(outcome)` - ssacli ran; `outcome` lists what was published
/// * `None` - ssacli failed for this slot (logged as warning); nothing was updated
pub async fn collect_logical_drives<R: CommandRunner>(
    ctx: &CollectionContext<'_, R>,
    slot: ControllerSlot,
) -> Option<DriveOutcome> {
    let args = logical_drive_args(slot);
    let name = format!("logical drives on slot {slot}");
    let mut outcome = DriveOutcome::default();

    let status = collect_with_handler(&name, ctx.runner.run(&args), |output| {
        for record in logical_drive_matches(&output) {
            let Some(sample) = record.normalize() else {
                warn!(
                    "Skipping logical drive {} on slot {}: unreadable capacity {:?}",
                    record.number, slot, record.capacity_raw
                );
                outcome.skipped += 1;
                continue;
            };

            ctx.metrics.set_drive_metrics(slot, record.number, sample);
            debug!(
                "Updated logical drive {} on slot {}: {:?}",
                record.number, slot, sample
            );
            outcome.updated.push(record.number);
        }
    })
    .await;

    match status {
        Ok(CollectionStatus::Success) => Some(outcome),
        _ => None,
    }
}
