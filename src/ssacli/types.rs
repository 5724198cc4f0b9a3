//! ssacli Record Types
//!
//! Typed views over the text `ssacli` prints. Records carry the raw captured
//! strings; numeric conversion happens in [`super::units`] so the parser stays
//! a pure scanner.
//!
//! # Output Covered
//!
//! - `ctrl all show` → [`ControllerScan`]
//! - `ctrl slot=N ld all show` → [`LogicalDriveRecord`]
//! - Normalized gauge values → [`DriveSample`]

use super::units::{parse_raid_level, parse_status, try_parse_capacity};

/// Physical controller bay identifier
pub type ControllerSlot = u64;

/// Result of scanning `ctrl all show` output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerScan {
    /// Number of `Slot <n>` matches, including ones whose number did not parse
    pub matches: usize,
    /// Slots that parsed, in textual order, duplicates preserved
    pub slots: Vec<ControllerSlot>,
}

/// One `logicaldrive` line from `ctrl slot=N ld all show`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalDriveRecord {
    pub number: u32,
    /// e.g. `279.4 GB`
    pub capacity_raw: String,
    /// e.g. `1` or `1+0`
    pub raid_level_raw: String,
    /// e.g. `OK`, `Failed`, `Interim Recovery Mode`
    pub status_raw: String,
}

/// Gauge values derived from a [`LogicalDriveRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveSample {
    /// 0 = healthy, 1 = anything else
    pub status: i64,
    pub capacity_mb: u64,
    /// Numeric RAID level, or -1 for labels such as `1+0`
    pub raid_level: i64,
}

impl LogicalDriveRecord {
    /// Converts the raw fields into gauge values.
    ///
    /// Returns `None` when the capacity cannot be read; a bad RAID label is
    /// not an error and maps to -1.
    pub fn normalize(&self) -> Option<DriveSample> {
        let capacity_mb = try_parse_capacity(&self.capacity_raw)?;
        Some(DriveSample {
            status: parse_status(&self.status_raw),
            capacity_mb,
            raid_level: parse_raid_level(&self.raid_level_raw),
        })
    }
}
