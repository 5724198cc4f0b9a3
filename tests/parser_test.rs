//! Parser and normalizer tests against realistic ssacli output

use ssacli_exporter::ssacli::units::{
    parse_capacity, parse_raid_level, parse_status, CAPACITY_UNPARSEABLE,
};
use ssacli_exporter::ssacli::{parse_controller_slots, parse_logical_drives};

const CTRL_ALL_SHOW: &str = "
Smart Array P440ar in Slot 0 (Embedded)   (sn: PDNLH0BRH8X1CV)
Smart HBA H240 in Slot 3                  (sn: PDNNF0ARH6P03X)
";

#[test]
fn test_capacity_examples() {
    assert_eq!(parse_capacity("1.5 TB"), 1_572_864);
    assert_eq!(parse_capacity("279.4 GB"), 286_105);
    assert_eq!(parse_capacity("512 MB"), 512);
}

#[test]
fn test_capacity_failures_return_sentinel() {
    assert_eq!(parse_capacity("garbage"), CAPACITY_UNPARSEABLE);
    assert_eq!(parse_capacity("abc GB"), CAPACITY_UNPARSEABLE);
}

#[test]
fn test_status_is_binary() {
    assert_eq!(parse_status("OK"), 0);
    for label in ["Failed", "", "Degraded", "Interim Recovery Mode"] {
        assert_eq!(parse_status(label), 1, "label {label:?}");
    }
}

#[test]
fn test_controller_slots_ignore_surrounding_text() {
    // Given: Discovery output with serial numbers and other noise
    // When: Parsing slots
    let scan = parse_controller_slots(CTRL_ALL_SHOW);

    // Then: Slots come back in textual order
    assert_eq!(scan.slots, vec![0, 3]);
    assert_eq!(scan.matches, 2);
}

#[test]
fn test_logical_drives_from_two_lines() {
    // Given: Two logical drive lines
    let text = "logicaldrive 1 (279.4 GB, RAID 1, OK)\n\
                logicaldrive 2 (1.5 TB, RAID 0, Failed)\n";

    // When: Parsing and normalizing
    let drives = parse_logical_drives(text);
    let samples: Vec<_> = drives.iter().filter_map(|d| d.normalize()).collect();

    // Then: Numbers, capacities, RAID levels and statuses line up
    assert_eq!(drives.iter().map(|d| d.number).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(
        samples.iter().map(|s| s.capacity_mb).collect::<Vec<_>>(),
        vec![286_105, 1_572_864]
    );
    assert_eq!(
        samples.iter().map(|s| s.raid_level).collect::<Vec<_>>(),
        vec![1, 0]
    );
    assert_eq!(
        samples.iter().map(|s| s.status).collect::<Vec<_>>(),
        vec![0, 1]
    );
}

#[test]
fn test_composite_raid_label_maps_to_minus_one() {
    let drives = parse_logical_drives("logicaldrive 3 (838.3 GB, RAID 1+0, OK)");
    assert_eq!(drives.len(), 1);
    assert_eq!(parse_raid_level(&drives[0].raid_level_raw), -1);
    assert_eq!(drives[0].normalize().map(|s| s.raid_level), Some(-1));
}

#[test]
fn test_multiword_status_captured_whole() {
    let drives = parse_logical_drives(
        "logicaldrive 1 (558.9 GB, RAID 5, Interim Recovery Mode)",
    );
    assert_eq!(drives[0].status_raw, "Interim Recovery Mode");
    assert_eq!(drives[0].normalize().map(|s| s.status), Some(1));
}

#[test]
fn test_unrelated_output_parses_to_nothing() {
    let text = "Error: The controller identified by \"slot=9\" was not detected.";
    assert!(parse_logical_drives(text).is_empty());
    assert_eq!(parse_controller_slots(text).matches, 0);
}
