//! Controller Discovery
//!
//! Runs `ssacli ctrl all show` and lists the controller slots.
//!
//! # Metrics Produced
//! - `num_controllers` - Number of `Slot <n>` matches in the output

use super::{collect_with_handler, CollectionContext, CollectionStatus};
use crate::ssacli::{controller_list_args, parse_controller_slots, CommandRunner, ControllerSlot};
use tracing::debug;

/// Discovers attached controllers and publishes the controller count.
///
/// The count is the number of textual matches, which may exceed the number
/// of returned slots when a slot number does not parse.
///
/// # Returns
///
/// * `Some(slots)` - Slots in discovery order, duplicates preserved
/// * `None` - ssacli could not be run (logged as warning); nothing was updated
pub async fn collect_controllers<R: CommandRunner>(
    ctx: &CollectionContext<'_, R>,
) -> Option<Vec<ControllerSlot>> {
    let args = controller_list_args();
    let mut slots = None;

    let status = collect_with_handler("controllers", ctx.runner.run(&args), |output| {
        let scan = parse_controller_slots(&output);
        ctx.metrics.set_controller_count(scan.matches);
        debug!(
            "Found {} controller matches, slots {:?}",
            scan.matches, scan.slots
        );
        slots = Some(scan.slots);
    })
    .await;

    match status {
        Ok(CollectionStatus::Success) => slots,
        _ => None,
    }
}
