use mockito::{Matcher, Server};
use serde_json::json;
use v20_client::application::config::{
    Config, Credentials, RateLimiterConfig, RestApiConfig, StreamConfig,
};
use v20_client::error::AppError;
use v20_client::model::http::{ApiRequest, HttpClient, Transport};
use v20_client::model::retry::RetryConfig;
use v20_client::presentation::primitives::AcceptDatetimeFormat;

// Config pointing both endpoints at the mock server
fn create_test_config(server_url: &str) -> Config {
    Config {
        credentials: Credentials {
            access_token: "test-token".to_string(),
            account_id: "101-004-1-001".to_string(),
        },
        rest_api: RestApiConfig {
            base_url: server_url.to_string(),
            stream_url: server_url.to_string(),
            timeout: 5,
            datetime_format: AcceptDatetimeFormat::Unix,
        },
        rate_limiter: RateLimiterConfig {
            max_requests: 1000,
            period_seconds: 1,
            burst_size: 100,
        },
        stream: StreamConfig::default(),
    }
}

fn create_transport(server_url: &str, retry: RetryConfig) -> HttpClient {
    HttpClient::new(create_test_config(server_url))
        .unwrap()
        .with_retry_config(retry)
}

#[tokio::test]
async fn test_request_sends_auth_and_datetime_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/accounts")
        .match_header("authorization", "Bearer test-token")
        .match_header("accept-datetime-format", "UNIX")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"accounts":[{"id":"101-004-1-001","tags":[]}]}"#)
        .create_async()
        .await;

    let transport = create_transport(&server.url(), RetryConfig::disabled());
    let raw = transport.request(ApiRequest::get("/v3/accounts")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(raw.status, 200);
    assert!(raw.is_success());
    assert_eq!(raw.content_type.as_deref(), Some("application/json"));
    assert!(raw.body.contains("101-004-1-001"));
}

#[tokio::test]
async fn test_request_sends_query_and_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v3/accounts/001/trades/7/close")
        .match_query(Matcher::UrlEncoded("dryRun".into(), "false".into()))
        .match_body(Matcher::Json(json!({"units": "ALL"})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let transport = create_transport(&server.url(), RetryConfig::disabled());
    let request = ApiRequest::put("/v3/accounts/001/trades/7/close")
        .with_query(vec![("dryRun".to_string(), "false".to_string())])
        .with_body(&json!({"units": "ALL"}))
        .unwrap();
    let raw = transport.request(request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(raw.status, 200);
}

#[tokio::test]
async fn test_error_status_is_returned_not_raised() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v3/accounts/001/orders")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errorCode":"MARKET_HALTED","errorMessage":"market halted"}"#)
        .create_async()
        .await;

    let transport = create_transport(&server.url(), RetryConfig::disabled());
    let raw = transport
        .request(ApiRequest::post("/v3/accounts/001/orders"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(raw.status, 400);
    assert!(!raw.is_success());
    assert!(raw.body.contains("MARKET_HALTED"));
}

#[tokio::test]
async fn test_rate_limited_without_retries() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/accounts")
        .with_status(429)
        .expect(1)
        .create_async()
        .await;

    let transport = create_transport(&server.url(), RetryConfig::disabled());
    let err = transport
        .request(ApiRequest::get("/v3/accounts"))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, AppError::RateLimitExceeded));
}

#[tokio::test]
async fn test_rate_limited_retries_then_gives_up() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/accounts")
        .with_status(429)
        .expect(3)
        .create_async()
        .await;

    let transport = create_transport(
        &server.url(),
        RetryConfig::with_max_retries_and_delay(2, 0),
    );
    let err = transport
        .request(ApiRequest::get("/v3/accounts"))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, AppError::RateLimitExceeded));
}

#[tokio::test]
async fn test_stream_hands_over_every_byte() {
    let body = "{\"type\":\"HEARTBEAT\",\"time\":\"1\"}\n{\"type\":\"PRICE\",\"instrument\":\"EUR_USD\"}\n";
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/accounts/001/pricing/stream")
        .match_query(Matcher::UrlEncoded("instruments".into(), "EUR_USD".into()))
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(body)
        .create_async()
        .await;

    let transport = create_transport(&server.url(), RetryConfig::disabled());
    let request = ApiRequest::get("/v3/accounts/001/pricing/stream")
        .with_query(vec![("instruments".to_string(), "EUR_USD".to_string())]);
    let mut received = Vec::new();
    let raw = transport
        .stream(request, &mut |chunk: &[u8]| {
            received.extend_from_slice(chunk);
            Ok(())
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(raw.status, 200);
    assert!(raw.body.is_empty());
    assert_eq!(received, body.as_bytes());
}

#[tokio::test]
async fn test_refused_stream_returns_error_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v3/accounts/001/transactions/stream")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errorMessage":"Insufficient authorization to perform request."}"#)
        .create_async()
        .await;

    let transport = create_transport(&server.url(), RetryConfig::disabled());
    let mut chunks = 0;
    let raw = transport
        .stream(
            ApiRequest::get("/v3/accounts/001/transactions/stream"),
            &mut |_: &[u8]| {
                chunks += 1;
                Ok(())
            },
        )
        .await
        .unwrap();

    assert_eq!(raw.status, 401);
    assert!(raw.body.contains("Insufficient authorization"));
    assert_eq!(chunks, 0);
}

#[tokio::test]
async fn test_stream_callback_error_ends_stream() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v3/accounts/001/transactions/stream")
        .with_status(200)
        .with_body("{\"type\":\"HEARTBEAT\"}\n")
        .create_async()
        .await;

    let transport = create_transport(&server.url(), RetryConfig::disabled());
    let err = transport
        .stream(
            ApiRequest::get("/v3/accounts/001/transactions/stream"),
            &mut |_: &[u8]| Err(AppError::InvalidInput("enough".to_string())),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(message) if message == "enough"));
}
