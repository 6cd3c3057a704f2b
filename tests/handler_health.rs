mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shipment_tracker::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let provider = common::StubProvider::succeeding(common::accepted_record());
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state(provider.clone()));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["provider"]["status"], "ok");
    assert_eq!(json["checks"]["provider"]["message"], "Stub");

    // Health checks never spend a provider lookup
    assert!(provider.calls().is_empty());
}
