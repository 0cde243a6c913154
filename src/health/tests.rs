use crate::health::responses::HealthCheckResponse;
use crate::http::tests::test_server;

#[tokio::test]
async fn test_health_check_counts_sessions() {
    let server = test_server();

    let response = server.get("/health/check").await;
    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse {
        error: false,
        active_sessions: 0,
    });

    server.post("/sessions").await.assert_status_ok();

    server.get("/health/check").await.assert_json(&HealthCheckResponse {
        error: false,
        active_sessions: 1,
    });
}
