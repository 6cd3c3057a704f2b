mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use shipment_tracker::api::middleware::rate_limit;
use shipment_tracker::api::routes::routes;
use shipment_tracker::config::RateLimitSettings;

const FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

#[tokio::test]
async fn test_rate_limit_rejects_after_burst() {
    let provider = common::StubProvider::succeeding(common::accepted_record());
    let settings = RateLimitSettings {
        replenish_secs: 60,
        burst: 2,
        behind_proxy: true,
    };
    let app = axum::Router::new()
        .nest("/api", rate_limit::apply(routes(), &settings))
        .with_state(common::create_test_state(provider.clone()));

    let server = TestServer::new(app).unwrap();

    for _ in 0..2 {
        server
            .get("/api/shipengine/tracking/se-1")
            .add_header(FORWARDED_FOR, HeaderValue::from_static("203.0.113.7"))
            .await
            .assert_status_ok();
    }

    let response = server
        .get("/api/shipengine/tracking/se-1")
        .add_header(FORWARDED_FOR, HeaderValue::from_static("203.0.113.7"))
        .await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);

    // Another client still has its own bucket
    server
        .get("/api/shipengine/tracking/se-1")
        .add_header(FORWARDED_FOR, HeaderValue::from_static("198.51.100.4"))
        .await
        .assert_status_ok();

    assert_eq!(provider.calls().len(), 3);
}
