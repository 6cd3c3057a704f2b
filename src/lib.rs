//! # Shipment Tracker
//!
//! A small tracking service built with Axum: a web page and a JSON endpoint
//! that look up a shipment's status by label identifier through the
//! ShipEngine tracking API.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Tracking record and provider trait
//! - **Application Layer** ([`application`]) - Lookup validation, logging and metrics
//! - **Infrastructure Layer** ([`infrastructure`]) - ShipEngine REST client
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Tracking page and its state machine
//!
//! ## Quick Start
//!
//! ```bash
//! export SHIPENGINE_API_KEY="TEST_xxxxxxxxxxxxxxxxxxxx"
//!
//! # Start the service
//! cargo run
//!
//! # Or look up a label from the terminal
//! cargo run --bin track -- se-28529731
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::TrackingService;
    pub use crate::domain::entities::{TrackingEvent, TrackingRecord, TrackingSummary};
    pub use crate::domain::providers::{ProviderError, TrackingProvider};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
