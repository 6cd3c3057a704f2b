//! Shipment tracking service.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::entities::TrackingRecord;
use crate::domain::providers::TrackingProvider;
use crate::error::AppError;

/// Looks up shipment tracking status through an external provider.
///
/// Shared by the JSON endpoint, the tracking page and the CLI, so every entry
/// point validates and logs lookups the same way. The service holds no state
/// between calls.
pub struct TrackingService {
    provider: Arc<dyn TrackingProvider>,
}

impl TrackingService {
    /// Creates a new tracking service backed by `provider`.
    pub fn new(provider: Arc<dyn TrackingProvider>) -> Self {
        Self { provider }
    }

    /// Name of the backing provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Tracks a shipment by its label identifier.
    ///
    /// The record is returned exactly as the provider produced it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingFields`] if `label_id` is empty; the provider
    /// is not called in that case.
    /// Returns [`AppError::Provider`] for any provider failure.
    pub async fn track(&self, label_id: &str) -> Result<TrackingRecord, AppError> {
        if label_id.is_empty() {
            metrics::counter!("tracking_lookups_total", "outcome" => "invalid").increment(1);
            return Err(AppError::MissingFields);
        }

        match self.provider.track_by_label_id(label_id).await {
            Ok(record) => {
                metrics::counter!("tracking_lookups_total", "outcome" => "success").increment(1);
                info!(
                    label_id,
                    tracking_number = %record.tracking_number,
                    status = %record.status_description,
                    "Tracking lookup succeeded"
                );
                debug!(?record, "Tracking record");
                Ok(record)
            }
            Err(e) => {
                metrics::counter!("tracking_lookups_total", "outcome" => "failure").increment(1);
                error!(label_id, error = %e, "Tracking lookup failed");
                Err(AppError::Provider(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::{MockTrackingProvider, ProviderError};

    fn delivered() -> TrackingRecord {
        TrackingRecord {
            tracking_number: "1Z999".to_string(),
            status_description: "Delivered".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_track_success_returns_provider_record() {
        let mut mock_provider = MockTrackingProvider::new();

        mock_provider
            .expect_track_by_label_id()
            .withf(|label_id| label_id == "se-123")
            .times(1)
            .returning(|_| Ok(delivered()));

        let service = TrackingService::new(Arc::new(mock_provider));

        let record = service.track("se-123").await.unwrap();

        assert_eq!(record, delivered());
    }

    #[tokio::test]
    async fn test_track_empty_label_skips_provider() {
        let mut mock_provider = MockTrackingProvider::new();

        mock_provider.expect_track_by_label_id().never();

        let service = TrackingService::new(Arc::new(mock_provider));

        let result = service.track("").await;

        assert!(matches!(result, Err(AppError::MissingFields)));
    }

    #[tokio::test]
    async fn test_track_provider_failure() {
        let mut mock_provider = MockTrackingProvider::new();

        mock_provider.expect_track_by_label_id().returning(|_| {
            Err(ProviderError::Api {
                status: 400,
                message: "Invalid label_id".to_string(),
            })
        });

        let service = TrackingService::new(Arc::new(mock_provider));

        let result = service.track("not-a-label").await;

        match result {
            Err(AppError::Provider(e)) => assert_eq!(e.to_string(), "Invalid label_id"),
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[test]
    fn test_provider_name_is_forwarded() {
        let mut mock_provider = MockTrackingProvider::new();

        mock_provider.expect_name().return_const("ShipEngine".to_string());

        let service = TrackingService::new(Arc::new(mock_provider));

        assert_eq!(service.provider_name(), "ShipEngine");
    }
}
