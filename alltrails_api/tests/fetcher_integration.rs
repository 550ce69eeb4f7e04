use std::time::Duration;

use alltrails_api::{FetchConfig, FetchError, FetchErrorKind, Fetcher, ParkSlug, TrailSlug};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PARK: &str = "us/tennessee/great-smoky-mountains-national-park";
const TRAIL: &str = "us/tennessee/alum-cave-trail-to-mount-leconte";

fn park() -> ParkSlug {
    ParkSlug::new(PARK).unwrap()
}

fn trail() -> TrailSlug {
    TrailSlug::new(TRAIL).unwrap()
}

#[tokio::test]
async fn fetch_park_page_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/parks/{}", PARK)))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>ok</body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::with_base_url(&mock_server.uri()).unwrap();
    let body = fetcher.fetch_park_page(&park()).await.unwrap();
    assert!(body.contains("ok"));
}

#[tokio::test]
async fn fetch_trail_page_uses_trail_template() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/trail/{}", TRAIL)))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>trail</h1>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::with_base_url(&mock_server.uri()).unwrap();
    let body = fetcher.fetch_trail_page(&trail()).await.unwrap();
    assert_eq!(body, "<h1>trail</h1>");
}

#[tokio::test]
async fn configured_user_agent_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "trail-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::with_config(FetchConfig {
        base_url: mock_server.uri(),
        user_agent: Some("trail-test/1.0".to_string()),
        ..FetchConfig::default()
    })
    .unwrap();
    let body = fetcher.fetch_trail_page(&trail()).await.unwrap();
    assert_eq!(body, "hello");
}

#[tokio::test]
async fn not_found_status_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::with_base_url(&mock_server.uri()).unwrap();
    let err = fetcher.fetch_trail_page(&trail()).await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::HttpStatus);
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn throttling_status_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::with_base_url(&mock_server.uri()).unwrap();
    let err = fetcher.fetch_park_page(&park()).await.unwrap_err();
    match err {
        FetchError::HttpStatus { status, url } => {
            assert_eq!(status, 429);
            assert!(url.ends_with(PARK));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::with_base_url(&mock_server.uri()).unwrap();
    let err = fetcher.fetch_park_page(&park()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn slow_server_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html></html>")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::with_config(FetchConfig {
        base_url: mock_server.uri(),
        timeout: Duration::from_millis(200),
        ..FetchConfig::default()
    })
    .unwrap();
    let err = fetcher.fetch_park_page(&park()).await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Timeout);
    assert!(matches!(
        err,
        FetchError::Timeout { timeout, .. } if timeout == Duration::from_millis(200)
    ));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Port 1 is reserved and nothing listens on it in test environments.
    let fetcher = Fetcher::with_config(FetchConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout: Duration::from_secs(5),
        ..FetchConfig::default()
    })
    .unwrap();
    let err = fetcher.fetch_park_page(&park()).await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Network);
}
