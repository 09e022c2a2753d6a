//! Data models shared by the storage engine and the HTTP routes.

use serde::{Deserialize, Serialize};

// ---

/// A single temperature sample reported by a device.
///
/// `timestamp` is assigned by the server at write time (seconds since the
/// Unix epoch); the device only supplies the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReading {
    // ---
    pub timestamp: i64,
    pub temperature: f64,
}

/// Per-device high/low/average over one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatedTemperatureData {
    // ---
    pub high: f64,
    pub low: f64,
    pub average: f64,
}

/// Body of `POST /temperature`.
///
/// Absent fields fall back to their zero values, so `{}` decodes to an empty
/// device ID (which is then rejected as not enrolled).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmitTemperatureRequest {
    // ---
    pub device_id: String,
    pub temperature: f64,
}

/// Body returned by `POST /devices/{id}`.
#[derive(Debug, Serialize)]
pub struct EnrollResponse {
    // ---
    pub device_id: String,
}

/// Running high/low/sum/count over the readings of one day.
#[derive(Debug, Default)]
pub(crate) struct DailyAccumulator {
    high: f64,
    low: f64,
    sum: f64,
    count: u64,
}

impl DailyAccumulator {
    // ---
    pub(crate) fn push(&mut self, temperature: f64) {
        // ---
        if self.count == 0 || temperature > self.high {
            self.high = temperature;
        }
        if self.count == 0 || temperature < self.low {
            self.low = temperature;
        }
        self.sum += temperature;
        self.count += 1;
    }

    /// Returns `None` when nothing was pushed, so empty days stay out of
    /// the result instead of reporting NaN.
    pub(crate) fn finish(&self) -> Option<AggregatedTemperatureData> {
        // ---
        (self.count > 0).then(|| AggregatedTemperatureData {
            high: self.high,
            low: self.low,
            average: self.sum / self.count as f64,
        })
    }
}
