//! Storage gateway for device enrollment state and temperature readings.
//!
//! Routes depend only on the [`Storage`] trait, so a different backend can be
//! wired in from `main.rs` without touching any handler. The only backend
//! shipped today is [`InMemoryStorage`].

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::models::AggregatedTemperatureData;

mod memory;

pub use memory::InMemoryStorage;

// ---

/// Errors surfaced by storage operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("device {0} not found")]
    DeviceNotFound(String),
}

/// Storage handle shared by every route.
pub type SharedStorage = Arc<dyn Storage>;

/// Device registry plus per-device reading history.
///
/// Enrollment and the enabled state share one flag: enrolling sets it to
/// `true`, enable/disable flip it, and [`Storage::is_device_enrolled`] reads
/// it back.
pub trait Storage: Send + Sync {
    /// Mark `device_id` as enrolled (and enabled). Idempotent.
    fn enroll_device(&self, device_id: &str);

    /// Snapshot of every enrolled device and its current flag.
    fn list_devices(&self) -> HashMap<String, bool>;

    fn enable_device(&self, device_id: &str) -> Result<(), StorageError>;

    fn disable_device(&self, device_id: &str) -> Result<(), StorageError>;

    /// `false` both for unknown devices and for disabled ones.
    fn is_device_enrolled(&self, device_id: &str) -> bool;

    /// Append a reading stamped with the current server time.
    ///
    /// Does not check enrollment; callers decide whether to accept the value.
    fn record_temperature(&self, device_id: &str, temperature: f64);

    /// High/low/average per device over readings on `date`'s local calendar
    /// day. Devices without a reading that day are left out.
    fn get_daily_aggregated_data(
        &self,
        date: DateTime<Local>,
    ) -> HashMap<String, AggregatedTemperatureData>;
}
