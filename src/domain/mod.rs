//! Domain layer containing the tracking data model and provider contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. It defines:
//!
//! - [`entities`] - Tracking record received from the provider
//! - [`providers`] - Trait implemented by external tracking services
//!
//! Business logic on top of these lives in [`crate::application::services`].

pub mod entities;
pub mod providers;
