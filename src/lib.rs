//! `weather-monitoring`: enrollment and daily temperature aggregation for
//! IoT weather devices.
//!
//! Module layout follows the Explicit Module Boundary Pattern (EMBP): each
//! sibling module exposes its public surface through the re-exports below,
//! and `routes/*.rs` reach shared types only via `crate::`, never via each
//! other's internals.

pub mod config;
pub mod models;
pub mod routes;
pub mod storage;

pub use config::Config;
pub use models::{
    AggregatedTemperatureData, EnrollResponse, SubmitTemperatureRequest, TemperatureReading,
};
pub use routes::{router, ApiError};
pub use storage::{InMemoryStorage, SharedStorage, Storage, StorageError};
