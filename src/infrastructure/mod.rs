//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`shipengine`] - ShipEngine REST client implementing
//!   [`crate::domain::providers::TrackingProvider`]

pub mod shipengine;
