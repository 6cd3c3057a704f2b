//! Provider trait for shipment tracking lookups.

use crate::domain::entities::TrackingRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by a tracking provider.
///
/// Callers treat every variant the same way; the distinction only feeds logs
/// and the error detail returned to clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (connect, TLS, timeout).
    #[error("Tracking provider request failed: {0}")]
    Transport(String),

    /// The provider answered 2xx with a body that is not a tracking record.
    #[error("Unexpected response from tracking provider: {0}")]
    Decode(String),

    /// The label cannot be addressed at the provider, so no request was sent.
    #[error("Invalid label ID: {0}")]
    InvalidLabel(String),

    /// The client could not be built from its settings.
    #[error("Invalid tracking provider configuration: {0}")]
    Configuration(String),
}

/// External shipping service able to report a shipment's tracking status.
///
/// # Implementations
///
/// - [`crate::infrastructure::shipengine::ShipEngineClient`] - ShipEngine REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackingProvider: Send + Sync {
    /// Human-readable provider name, used by the health endpoint.
    fn name(&self) -> &str;

    /// Looks up tracking information for a label identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] for any non-success outcome, including
    /// unknown or malformed label identifiers.
    async fn track_by_label_id(&self, label_id: &str) -> Result<TrackingRecord, ProviderError>;
}
