//! ssacli Output Parser
//!
//! Scans the human-readable output of `ssacli` for the handful of lines the
//! exporter cares about. Nothing here performs I/O; text that does not match
//! simply yields no records.
//!
//! # Example
//!
//! ```text
//! Smart Array P440ar in Slot 0 (Embedded)   (sn: PDNLH0BRH8X1CV)
//!
//!    Array A
//!
//!       logicaldrive 1 (279.4 GB, RAID 1, OK)
//! ```

use super::types::{ControllerScan, LogicalDriveRecord};
use regex::{CaptureMatches, Regex};
use std::sync::LazyLock;
use tracing::debug;

static CONTROLLER_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Slot ([0-9]+)").expect("Invalid controller slot regex"));

// Captures are greedy and line-bounded: ssacli prints one drive per line.
static LOGICAL_DRIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"logicaldrive ([0-9]+) \((.*B), RAID (.*), (.*)\)")
        .expect("Invalid logical drive regex")
});

/// Extracts controller slots from `ctrl all show` output.
///
/// [`ControllerScan::matches`] counts every `Slot <digits>` occurrence, while
/// [`ControllerScan::slots`] keeps only those that fit a 64-bit slot number,
/// so the two can differ when a number overflows.
pub fn parse_controller_slots(text: &str) -> ControllerScan {
    let mut scan = ControllerScan::default();

    for caps in CONTROLLER_SLOT.captures_iter(text) {
        scan.matches += 1;
        match caps[1].parse() {
            Ok(slot) => scan.slots.push(slot),
            Err(e) => debug!("Skipping controller slot {:?}: {}", &caps[1], e),
        }
    }

    scan
}

/// Lazy iterator over the logical drives in `ctrl slot=N ld all show` output
pub struct LogicalDriveMatches<'t> {
    captures: CaptureMatches<'static, 't>,
}

impl Iterator for LogicalDriveMatches<'_> {
    type Item = LogicalDriveRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for caps in self.captures.by_ref() {
            let number = match caps[1].parse() {
                Ok(number) => number,
                Err(e) => {
                    debug!("Skipping logical drive {:?}: {}", &caps[1], e);
                    continue;
                }
            };

            return Some(LogicalDriveRecord {
                number,
                capacity_raw: caps[2].to_string(),
                raid_level_raw: caps[3].to_string(),
                status_raw: caps[4].to_string(),
            });
        }
        None
    }
}

/// Scans for `logicaldrive <n> (<capacity>, RAID <level>, <status>)` lines in
/// textual order. Records with an unreadable drive number are skipped.
pub fn logical_drive_matches(text: &str) -> LogicalDriveMatches<'_> {
    LogicalDriveMatches {
        captures: LOGICAL_DRIVE.captures_iter(text),
    }
}

/// Collects [`logical_drive_matches`] into a `Vec`.
pub fn parse_logical_drives(text: &str) -> Vec<LogicalDriveRecord> {
    logical_drive_matches(text).collect()
}
