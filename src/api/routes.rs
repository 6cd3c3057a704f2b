//! API route configuration.

use crate::api::handlers::{missing_label_handler, tracking_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /shipengine/tracking/{label_id}` - Tracking record for a label
/// - `GET /shipengine/tracking`            - Label omitted; always `400`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shipengine/tracking", get(missing_label_handler))
        .route("/shipengine/tracking/{label_id}", get(tracking_handler))
}
