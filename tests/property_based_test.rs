//! Property-based tests using proptest
//!
//! Tests that verify properties hold for arbitrary inputs.

use proptest::prelude::*;
use ssacli_exporter::metrics::MetricsStore;
use ssacli_exporter::ssacli::units::{parse_capacity, parse_status, try_parse_capacity};
use ssacli_exporter::ssacli::{parse_controller_slots, parse_logical_drives, DriveSample};

proptest! {
    #[test]
    fn test_capacity_scales_by_unit(magnitude in 0.0f64..100_000.0, unit in prop::sample::select(vec!["TB", "GB", "MB"])) {
        // Given: A well-formed capacity string
        let input = format!("{magnitude} {unit}");
        let factor = match unit {
            "TB" => 1_048_576.0,
            "GB" => 1024.0,
            _ => 1.0,
        };

        // Then: The result is the truncated product
        prop_assert_eq!(parse_capacity(&input), (magnitude * factor) as i64);
    }

    #[test]
    fn test_capacity_without_space_is_rejected(input in "[^ ]*") {
        prop_assert_eq!(try_parse_capacity(&input), None);
        prop_assert_eq!(parse_capacity(&input), -1);
    }

    #[test]
    fn test_any_non_ok_status_is_unhealthy(status in "\\PC*") {
        prop_assume!(status != "OK");
        prop_assert_eq!(parse_status(&status), 1);
    }

    #[test]
    fn test_slot_parser_never_panics(text in "\\PC*") {
        let scan = parse_controller_slots(&text);
        prop_assert!(scan.slots.len() <= scan.matches);
    }

    #[test]
    fn test_slots_round_trip(slots in prop::collection::vec(0u64..1024, 0..8)) {
        let text: String = slots.iter().map(|s| format!("Smart Array in Slot {s} (sn: X)\n")).collect();
        let scan = parse_controller_slots(&text);
        prop_assert_eq!(scan.matches, slots.len());
        prop_assert_eq!(scan.slots, slots);
    }

    #[test]
    fn test_logical_drive_parser_never_panics(text in "\\PC*") {
        let _ = parse_logical_drives(&text);
    }

    #[test]
    fn test_any_drive_sample_renders(
        slot in 0u64..64,
        number in 0u32..64,
        capacity_mb in 0u64..u64::MAX,
        raid_level in -1i64..60,
    ) {
        // Given: A metrics store and an arbitrary sample
        let metrics = MetricsStore::new().expect("Failed to create metrics store");
        let sample = DriveSample { status: 1, capacity_mb, raid_level };

        // When: Publishing it
        metrics.set_drive_metrics(slot, number, sample);

        // Then: Rendering should not fail and the sample reads back
        prop_assert!(metrics.render().is_ok());
        prop_assert_eq!(metrics.drive(slot, number), Some(sample));
    }
}
