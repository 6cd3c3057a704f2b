//! Application layer services implementing business logic.
//!
//! Services sit between the HTTP/CLI entry points and the domain's provider
//! traits, so handlers stay free of validation and logging concerns.
//!
//! # Available Services
//!
//! - [`services::tracking_service::TrackingService`] - Shipment tracking lookups

pub mod services;
