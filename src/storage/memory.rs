//! In-memory storage backend.
//!
//! All state lives behind a single [`RwLock`]: writers (enroll, enable,
//! disable, record) take it exclusively, readers (list, lookup, aggregate)
//! share it. Nothing is persisted and nothing is ever evicted.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Local, Utc};
use parking_lot::RwLock;
use tracing::debug;

use super::{Storage, StorageError};
use crate::models::{AggregatedTemperatureData, DailyAccumulator, TemperatureReading};

// ---

#[derive(Debug, Default)]
struct Inner {
    /// device id -> enrolled/enabled flag
    devices: HashMap<String, bool>,
    /// device id -> readings in insertion order
    readings: HashMap<String, Vec<TemperatureReading>>,
}

/// [`Storage`] backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    inner: RwLock<Inner>,
}

impl InMemoryStorage {
    // ---
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reading with an explicit epoch-seconds timestamp.
    pub fn record_temperature_at(&self, device_id: &str, temperature: f64, timestamp: i64) {
        // ---
        let mut inner = self.inner.write();
        inner
            .readings
            .entry(device_id.to_string())
            .or_default()
            .push(TemperatureReading {
                timestamp,
                temperature,
            });
    }

    fn set_enabled(&self, device_id: &str, enabled: bool) -> Result<(), StorageError> {
        // ---
        let mut inner = self.inner.write();
        match inner.devices.get_mut(device_id) {
            Some(flag) => {
                *flag = enabled;
                debug!(device_id, enabled, "device state changed");
                Ok(())
            }
            None => {
                debug!(device_id, "device not found");
                Err(StorageError::DeviceNotFound(device_id.to_string()))
            }
        }
    }
}

impl Storage for InMemoryStorage {
    // ---
    fn enroll_device(&self, device_id: &str) {
        // ---
        self.inner.write().devices.insert(device_id.to_string(), true);
        debug!(device_id, "device enrolled");
    }

    fn list_devices(&self) -> HashMap<String, bool> {
        self.inner.read().devices.clone()
    }

    fn enable_device(&self, device_id: &str) -> Result<(), StorageError> {
        self.set_enabled(device_id, true)
    }

    fn disable_device(&self, device_id: &str) -> Result<(), StorageError> {
        self.set_enabled(device_id, false)
    }

    fn is_device_enrolled(&self, device_id: &str) -> bool {
        self.inner
            .read()
            .devices
            .get(device_id)
            .copied()
            .unwrap_or(false)
    }

    fn record_temperature(&self, device_id: &str, temperature: f64) {
        self.record_temperature_at(device_id, temperature, Utc::now().timestamp());
    }

    fn get_daily_aggregated_data(
        &self,
        date: DateTime<Local>,
    ) -> HashMap<String, AggregatedTemperatureData> {
        // ---
        let (year, ordinal) = (date.year(), date.ordinal());
        let inner = self.inner.read();

        inner
            .readings
            .iter()
            .filter_map(|(device_id, readings)| {
                let mut acc = DailyAccumulator::default();
                for reading in readings {
                    if falls_on_day(reading.timestamp, year, ordinal) {
                        acc.push(reading.temperature);
                    }
                }
                acc.finish().map(|agg| (device_id.clone(), agg))
            })
            .collect()
    }
}

/// Whether an epoch-seconds timestamp lands on (`year`, `ordinal`) in
/// server-local time.
fn falls_on_day(timestamp: i64, year: i32, ordinal: u32) -> bool {
    // ---
    DateTime::from_timestamp(timestamp, 0)
        .map(|utc| utc.with_timezone(&Local))
        .is_some_and(|local| local.year() == year && local.ordinal() == ordinal)
}
