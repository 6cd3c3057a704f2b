#![allow(dead_code)]

use async_trait::async_trait;
use shipment_tracker::domain::entities::{TrackingEvent, TrackingRecord};
use shipment_tracker::domain::providers::{ProviderError, TrackingProvider};
use shipment_tracker::state::AppState;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Provider returning a fixed outcome and recording every label it was asked for.
pub struct StubProvider {
    outcome: Result<TrackingRecord, ProviderError>,
    calls: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn succeeding(record: TrackingRecord) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(record),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: ProviderError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrackingProvider for StubProvider {
    fn name(&self) -> &str {
        "Stub"
    }

    async fn track_by_label_id(&self, label_id: &str) -> Result<TrackingRecord, ProviderError> {
        self.calls.lock().unwrap().push(label_id.to_string());
        self.outcome.clone()
    }
}

pub fn create_test_state(provider: Arc<StubProvider>) -> AppState {
    AppState::new(provider)
}

/// A delivered shipment with every display field present.
pub fn delivered_record() -> TrackingRecord {
    let mut record = TrackingRecord {
        tracking_number: "1Z932R800392060079".to_string(),
        status_description: "Delivered".to_string(),
        carrier_status_description: Some("Delivered, Front Door/Porch".to_string()),
        estimated_delivery_date: Some("2024-03-01T17:00:00Z".to_string()),
        actual_delivery_date: Some("2024-03-01T14:32:00Z".to_string()),
        events: vec![TrackingEvent {
            occurred_at: Some("2024-03-01T14:32:00Z".to_string()),
            description: Some("Delivered".to_string()),
            city_locality: Some("AUSTIN".to_string()),
            state_province: Some("TX".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };
    record.extra.insert("status_code", json!("DE"));
    record.extra.insert("carrier_code", json!("ups"));
    record
}

/// A shipment accepted by the carrier, with no carrier status or dates yet.
pub fn accepted_record() -> TrackingRecord {
    let mut record = TrackingRecord {
        tracking_number: "9400111899223197428490".to_string(),
        status_description: "Accepted".to_string(),
        ..Default::default()
    };
    record.extra.insert("status_code", json!("AC"));
    record
}

pub fn not_found_error() -> ProviderError {
    ProviderError::Api {
        status: 404,
        message: "label_id se-0 was not found".to_string(),
    }
}
