//! Core domain entities.
//!
//! Entities here are received, not owned: the tracking provider creates them
//! per request and this service only displays or forwards them.
//!
//! - [`TrackingRecord`] - Status snapshot of a shipment
//! - [`TrackingEvent`] - One entry of the shipment's scan history
//! - [`TrackingSummary`] - Display fields derived from a record
//! - [`ProviderFields`] - Provider fields forwarded without interpretation

pub mod tracking;

pub use tracking::{NOT_AVAILABLE, ProviderFields, TrackingEvent, TrackingRecord, TrackingSummary};
