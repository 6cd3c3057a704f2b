//! ShipEngine tracking integration.
//!
//! Provides [`ShipEngineClient`], the production
//! [`crate::domain::providers::TrackingProvider`].

mod api_error;
mod client;

pub use client::{DEFAULT_BASE_URL, ShipEngineClient};
