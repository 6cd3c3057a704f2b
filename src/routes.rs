//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET  /health`                           - Health check (public)
//! - `GET  /api/shipengine/tracking/{label}`  - Tracking lookup (JSON)
//! - `GET  /tracking`, `POST /tracking`       - Tracking page
//! - `/static/*`                              - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API and the page (optional)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::RateLimitSettings;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - per-IP limits for the API and page routes; `None`
///   disables rate limiting
pub fn app_router(state: AppState, rate_limit: Option<RateLimitSettings>) -> NormalizePath<Router> {
    let mut api_router = api::routes::routes();
    let mut web_router = web::routes::routes();

    if let Some(settings) = rate_limit {
        api_router = rate_limit::apply(api_router, &settings);
        web_router = rate_limit::apply(web_router, &settings);
    }

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
