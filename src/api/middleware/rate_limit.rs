//! Rate limiting middleware using token bucket algorithm.
//!
//! Lookups are forwarded to a metered third-party API, so the public routes
//! are limited per client IP. Requests exceeding the limit receive
//! `429 Too Many Requests`.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::config::RateLimitSettings;
use crate::state::AppState;

/// Wraps `router` with a per-IP limiter built from `settings`.
///
/// With `behind_proxy` the client IP is read from `X-Forwarded-For`,
/// `X-Real-IP` or `Forwarded` before falling back to the peer address;
/// otherwise only the socket peer address is used.
///
/// Each call creates an independent bucket set, so routers wrapped
/// separately do not share quotas.
pub fn apply(router: Router<AppState>, settings: &RateLimitSettings) -> Router<AppState> {
    if settings.behind_proxy {
        router.layer(layer(SmartIpKeyExtractor, settings))
    } else {
        router.layer(layer(PeerIpKeyExtractor, settings))
    }
}

/// Creates a rate limiter keyed by `key_extractor`.
///
/// # Limits
///
/// - **Replenish**: one token every `settings.replenish_secs` seconds
/// - **Burst**: `settings.burst` requests
///
/// # Panics
///
/// Panics if `replenish_secs` or `burst` is zero; [`crate::config::Config::validate`]
/// rejects both.
pub fn layer<K>(
    key_extractor: K,
    settings: &RateLimitSettings,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(settings.replenish_secs)
            .burst_size(settings.burst)
            .finish()
            .expect("rate limit period and burst must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
