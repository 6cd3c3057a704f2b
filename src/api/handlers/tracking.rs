//! Handlers for shipment tracking lookups.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::entities::TrackingRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the provider's tracking record for a label.
///
/// # Endpoint
///
/// `GET /api/shipengine/tracking/{label_id}`
///
/// # Response
///
/// The provider's record, unmodified, with `200 OK`.
///
/// # Errors
///
/// Returns 400 Bad Request with `{"error": "Missing required fields"}` if the
/// label is empty.
/// Returns 500 Internal Server Error with `{"error": <detail>}` on any
/// provider failure.
pub async fn tracking_handler(
    State(state): State<AppState>,
    Path(label_id): Path<String>,
) -> Result<Json<TrackingRecord>, AppError> {
    let record = state.tracking_service.track(&label_id).await?;

    Ok(Json(record))
}

/// Rejects a lookup whose label segment is absent.
///
/// # Endpoint
///
/// `GET /api/shipengine/tracking`
pub async fn missing_label_handler() -> AppError {
    AppError::MissingFields
}
