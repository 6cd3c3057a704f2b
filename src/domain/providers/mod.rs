//! Interfaces to external services the domain depends on.
//!
//! Implementations live in `crate::infrastructure`; mocks are generated with
//! `mockall` for unit tests.

pub mod tracking_provider;

pub use tracking_provider::{ProviderError, TrackingProvider};

#[cfg(test)]
pub use tracking_provider::MockTrackingProvider;
