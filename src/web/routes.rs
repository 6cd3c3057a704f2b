//! Tracking page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, track_submit_handler, tracking_page_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET  /`         - Redirects to the tracking page
/// - `GET  /tracking` - Tracking page; looks up `?labelId=` when present
/// - `POST /tracking` - Form submission
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler)).route(
        "/tracking",
        get(tracking_page_handler).post(track_submit_handler),
    )
}
