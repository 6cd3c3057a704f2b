//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::TrackingService;
use crate::domain::providers::TrackingProvider;

/// Handler state. Cloning is cheap; every request shares the same service.
#[derive(Clone)]
pub struct AppState {
    pub tracking_service: Arc<TrackingService>,
}

impl AppState {
    /// Builds the state around a tracking provider.
    pub fn new(provider: Arc<dyn TrackingProvider>) -> Self {
        Self {
            tracking_service: Arc::new(TrackingService::new(provider)),
        }
    }
}
