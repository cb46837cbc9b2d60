// ==========================================
// HttpPortalBackend 集成测试
// ==========================================
// 使用本地一次性 TCP 桩服务，验证请求格式与响应解析
// ==========================================

mod helpers;

use blood_donation_portal::client::{ClientError, HttpPortalBackend, PortalBackend};
use blood_donation_portal::config::PortalConfig;
use blood_donation_portal::logging;
use helpers::http_stub::{self, StubResponse};

fn config_for(base_url: &str, csrf_token: Option<&str>) -> PortalConfig {
    PortalConfig {
        base_url: format!("{}/", base_url),
        csrf_token: csrf_token.map(str::to_string),
        request_timeout_secs: 5,
        use_system_proxy: false,
        ..PortalConfig::default()
    }
}

#[tokio::test]
async fn test_update_inventory_posts_form_with_csrf_token() {
    logging::init_test();
    let stub = http_stub::start(vec![StubResponse::json(
        200,
        r#"{"success": true, "message": "A+ inventory updated successfully!", "data": {"id": 7, "blood_group": "A+", "units": 15}}"#,
    )])
    .await;
    let backend = HttpPortalBackend::new(&config_for(&stub.base_url, Some("tok-123"))).unwrap();

    let response = backend.update_inventory(7, 15).await.unwrap();

    assert!(response.success);
    assert_eq!(response.resolved_units(), Some(15));

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let request = requests[0].to_ascii_lowercase();
    assert!(request.starts_with("post /hospital/inventory/update/7 "));
    assert!(request.contains("x-csrftoken: tok-123"));
    assert!(request.contains("application/x-www-form-urlencoded"));
    assert!(request.ends_with("units=15"));
}

#[tokio::test]
async fn test_update_inventory_decodes_error_status_body() {
    logging::init_test();
    let stub = http_stub::start(vec![StubResponse::json(
        400,
        r#"{"success": false, "message": "Invalid units value. Please enter a positive number."}"#,
    )])
    .await;
    let backend = HttpPortalBackend::new(&config_for(&stub.base_url, None)).unwrap();

    let response = backend.update_inventory(7, -1).await.unwrap();

    assert!(!response.success);
    assert_eq!(
        response.error_message(),
        Some("Invalid units value. Please enter a positive number.")
    );
    assert!(!stub.requests()[0].to_ascii_lowercase().contains("x-csrftoken"));
}

#[tokio::test]
async fn test_non_json_body_is_unexpected_response() {
    logging::init_test();
    let stub = http_stub::start(vec![StubResponse::json(500, "<html>oops</html>")]).await;
    let backend = HttpPortalBackend::new(&config_for(&stub.base_url, None)).unwrap();

    let err = backend.update_inventory(1, 1).await.unwrap_err();

    assert!(matches!(err, ClientError::UnexpectedResponse { status: 500, .. }));
}

#[tokio::test]
async fn test_empty_error_body_is_http_status() {
    logging::init_test();
    let stub = http_stub::start(vec![StubResponse::json(403, "")]).await;
    let backend = HttpPortalBackend::new(&config_for(&stub.base_url, None)).unwrap();

    let err = backend.notification_count().await.unwrap_err();

    assert!(matches!(err, ClientError::HttpStatus { status: 403 }));
}

#[tokio::test]
async fn test_count_endpoints() {
    logging::init_test();
    let stub = http_stub::start(vec![
        StubResponse::json(200, r#"{"count": 3}"#),
        StubResponse::json(200, r#"{"count": 0}"#),
    ])
    .await;
    let backend = HttpPortalBackend::new(&config_for(&stub.base_url, None)).unwrap();

    assert_eq!(backend.notification_count().await.unwrap().count, 3);
    assert_eq!(backend.pending_donation_count().await.unwrap().count, 0);

    let requests = stub.requests();
    assert!(requests[0].starts_with("GET /donor/notifications/count "));
    assert!(requests[1].starts_with("GET /hospital/donations/pending/count "));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    logging::init_test();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpPortalBackend::new(&config_for(&format!("http://{}", addr), None)).unwrap();
    let err = backend.notification_count().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}
