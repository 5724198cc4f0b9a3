//! Unit and status normalization
//!
//! ssacli reports sizes as `<decimal> <unit>` (`279.4 GB`, `1.5 TB`) and
//! health as free-form labels. Everything here is pure.

/// Returned by [`parse_capacity`] when the input cannot be read
pub const CAPACITY_UNPARSEABLE: i64 = -1;

/// Returned by [`parse_raid_level`] for non-numeric RAID labels
pub const RAID_UNPARSEABLE: i64 = -1;

const MB_PER_GB: f64 = 1024.0;
const MB_PER_TB: f64 = 1024.0 * 1024.0;

/// Parses a capacity string into whole megabytes.
///
/// Only the first character of the unit is inspected: `T` and `G` scale,
/// anything else is taken as megabytes already. The result is truncated
/// toward zero.
///
/// Returns `None` if there is no space separator, the magnitude is not a
/// finite decimal, or the magnitude is negative.
///
/// # Examples
///
/// ```
/// use ssacli_exporter::ssacli::units::try_parse_capacity;
///
/// assert_eq!(try_parse_capacity("279.4 GB"), Some(286105));
/// assert_eq!(try_parse_capacity("1.5 TB"), Some(1572864));
/// assert_eq!(try_parse_capacity("garbage"), None);
/// ```
pub fn try_parse_capacity(s: &str) -> Option<u64> {
    let (magnitude, unit) = s.split_once(' ')?;
    let magnitude: f64 = magnitude.parse().ok()?;
    if !magnitude.is_finite() || magnitude < 0.0 {
        return None;
    }

    let megabytes = match unit.chars().next() {
        Some('T') => magnitude * MB_PER_TB,
        Some('G') => magnitude * MB_PER_GB,
        _ => magnitude,
    };

    // `as` truncates toward zero and saturates at u64::MAX
    Some(megabytes as u64)
}

/// Sentinel form of [`try_parse_capacity`]: failures become [`CAPACITY_UNPARSEABLE`].
pub fn parse_capacity(s: &str) -> i64 {
    try_parse_capacity(s)
        .and_then(|mb| i64::try_from(mb).ok())
        .unwrap_or(CAPACITY_UNPARSEABLE)
}

/// `OK` is healthy (0); every other label, known or not, is unhealthy (1).
pub fn parse_status(s: &str) -> i64 {
    match s {
        "OK" => 0,
        _ => 1,
    }
}

/// Numeric RAID levels parse as-is; composite labels such as `1+0` or
/// `5 ADM` become [`RAID_UNPARSEABLE`].
pub fn parse_raid_level(s: &str) -> i64 {
    s.parse::<i64>().unwrap_or(RAID_UNPARSEABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_units() {
        assert_eq!(parse_capacity("1.5 TB"), 1_572_864);
        assert_eq!(parse_capacity("279.4 GB"), 286_105);
        assert_eq!(parse_capacity("512 MB"), 512);
        assert_eq!(parse_capacity("512.9 MB"), 512);
    }

    #[test]
    fn test_unknown_unit_is_megabytes() {
        assert_eq!(parse_capacity("100 KB"), 100);
        assert_eq!(parse_capacity("42 "), 42);
    }

    #[test]
    fn test_capacity_sentinel() {
        assert_eq!(parse_capacity("garbage"), CAPACITY_UNPARSEABLE);
        assert_eq!(parse_capacity("abc GB"), CAPACITY_UNPARSEABLE);
        assert_eq!(parse_capacity(""), CAPACITY_UNPARSEABLE);
        assert_eq!(parse_capacity("-3 GB"), CAPACITY_UNPARSEABLE);
        assert_eq!(parse_capacity("NaN GB"), CAPACITY_UNPARSEABLE);
    }

    #[test]
    fn test_status() {
        assert_eq!(parse_status("OK"), 0);
        assert_eq!(parse_status("Failed"), 1);
        assert_eq!(parse_status(""), 1);
        assert_eq!(parse_status("Degraded"), 1);
        assert_eq!(parse_status("ok"), 1);
    }

    #[test]
    fn test_raid_level() {
        assert_eq!(parse_raid_level("1"), 1);
        assert_eq!(parse_raid_level("6"), 6);
        assert_eq!(parse_raid_level("1+0"), RAID_UNPARSEABLE);
        assert_eq!(parse_raid_level("5 ADM"), RAID_UNPARSEABLE);
    }
}
