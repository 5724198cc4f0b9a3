//! Prometheus Metrics Store
//!
//! Holds the latest gauge values published by the collector and renders them
//! for `/metrics`.
//!
//! # Series
//!
//! - `num_controllers` - Number of Smart Array controllers found by discovery
//! - `logical_device_status` - 0 = OK, 1 = any other state
//!   - Labels: controller_slot, logical_device_number
//! - `logical_device_capacity` - Logical drive capacity in MB
//!   - Labels: controller_slot, logical_device_number
//! - `logical_device_raid` - Numeric RAID level, -1 if the label is not a number
//!   - Labels: controller_slot, logical_device_number
//!
//! # Consistency
//!
//! The three per-drive gauges are written together under the write side of a
//! `RwLock`, and [`MetricsStore::render`] gathers under the read side, so a
//! scrape sees each drive's (status, capacity, raid) triple either entirely
//! before or entirely after an update. Keys are only added or overwritten;
//! removal happens solely through [`MetricsStore::remove_drive`].

use crate::error::Result;
use crate::ssacli::{ControllerSlot, DriveSample};
use prometheus::{Encoder, IntGauge, IntGaugeVec, Opts, Registry, TextEncoder};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

const DRIVE_LABELS: &[&str] = &["controller_slot", "logical_device_number"];

/// `(controller slot, logical drive number)`
pub type DriveKey = (ControllerSlot, u32);

/// Metrics store shared between the collection loop and the HTTP handlers
#[derive(Clone)]
pub struct MetricsStore {
    registry: Arc<Registry>,
    drives: Arc<RwLock<BTreeMap<DriveKey, DriveSample>>>,
    up: Arc<AtomicBool>,

    num_controllers: Arc<IntGauge>,
    logical_device_status: Arc<IntGaugeVec>,
    logical_device_capacity: Arc<IntGaugeVec>,
    logical_device_raid: Arc<IntGaugeVec>,
}

impl MetricsStore {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let num_controllers = IntGauge::with_opts(Opts::new(
            "num_controllers",
            "Number of smart storage array controllers.",
        ))?;

        let logical_device_status = IntGaugeVec::new(
            Opts::new("logical_device_status", "Status of logical device. 0 = OK"),
            DRIVE_LABELS,
        )?;

        let logical_device_capacity = IntGaugeVec::new(
            Opts::new(
                "logical_device_capacity",
                "Capacity of logical device in MB",
            ),
            DRIVE_LABELS,
        )?;

        let logical_device_raid = IntGaugeVec::new(
            Opts::new("logical_device_raid", "RAID level of logical device"),
            DRIVE_LABELS,
        )?;

        registry.register(Box::new(num_controllers.clone()))?;
        registry.register(Box::new(logical_device_status.clone()))?;
        registry.register(Box::new(logical_device_capacity.clone()))?;
        registry.register(Box::new(logical_device_raid.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            drives: Arc::new(RwLock::new(BTreeMap::new())),
            up: Arc::new(AtomicBool::new(false)),
            num_controllers: Arc::new(num_controllers),
            logical_device_status: Arc::new(logical_device_status),
            logical_device_capacity: Arc::new(logical_device_capacity),
            logical_device_raid: Arc::new(logical_device_raid),
        })
    }

    // Nothing under the write guard can panic, so poisoning never hides a torn triple
    fn read_drives(&self) -> RwLockReadGuard<'_, BTreeMap<DriveKey, DriveSample>> {
        self.drives.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_drives(&self) -> RwLockWriteGuard<'_, BTreeMap<DriveKey, DriveSample>> {
        self.drives.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_controller_count(&self, count: usize) {
        self.num_controllers.set(i64::try_from(count).unwrap_or(i64::MAX));
    }

    pub fn controller_count(&self) -> i64 {
        self.num_controllers.get()
    }

    /// Publishes one drive's gauges, replacing whatever was there before.
    pub fn set_drive_metrics(&self, slot: ControllerSlot, number: u32, sample: DriveSample) {
        let slot_label = slot.to_string();
        let number_label = number.to_string();
        let labels = [slot_label.as_str(), number_label.as_str()];

        let mut drives = self.write_drives();
        self.logical_device_status
            .with_label_values(&labels)
            .set(sample.status);
        self.logical_device_capacity
            .with_label_values(&labels)
            .set(i64::try_from(sample.capacity_mb).unwrap_or(i64::MAX));
        self.logical_device_raid
            .with_label_values(&labels)
            .set(sample.raid_level);
        drives.insert((slot, number), sample);
    }

    /// Drops one drive's series. Returns whether it was present.
    pub fn remove_drive(&self, slot: ControllerSlot, number: u32) -> bool {
        let slot_label = slot.to_string();
        let number_label = number.to_string();
        let labels = [slot_label.as_str(), number_label.as_str()];

        let mut drives = self.write_drives();
        if drives.remove(&(slot, number)).is_none() {
            return false;
        }
        // Label sets exist whenever the map entry did
        let _ = self.logical_device_status.remove_label_values(&labels);
        let _ = self.logical_device_capacity.remove_label_values(&labels);
        let _ = self.logical_device_raid.remove_label_values(&labels);
        true
    }

    /// Latest published sample for a drive
    pub fn drive(&self, slot: ControllerSlot, number: u32) -> Option<DriveSample> {
        self.read_drives().get(&(slot, number)).copied()
    }

    /// All keys currently exposed, in (slot, number) order
    pub fn drive_keys(&self) -> Vec<DriveKey> {
        self.read_drives().keys().copied().collect()
    }

    /// Records whether the most recent controller discovery succeeded.
    pub fn set_up(&self, up: bool) {
        self.up.store(up, Ordering::Relaxed);
    }

    pub fn is_up(&self) -> bool {
        self.up.load(Ordering::Relaxed)
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = {
            let _drives = self.read_drives();
            self.registry.gather()
        };
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl Default for MetricsStore {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics store")
    }
}
