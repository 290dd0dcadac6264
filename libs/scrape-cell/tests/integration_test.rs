use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scrape_cell::router::scrape_routes;
use shared_config::AppConfig;

fn test_config(stats_site_base_url: &str) -> AppConfig {
    AppConfig {
        r6data_base_url: String::new(),
        stats_site_base_url: stats_site_base_url.to_string(),
        port: 3000,
    }
}

fn create_test_app(config: AppConfig) -> Router {
    scrape_routes(Arc::new(config))
}

fn profile_page() -> &'static str {
    r#"<html><body>
        <div class="trn-defstat">
            <span class="trn-defstat__name">Level</span>
            <span class="trn-defstat__value"> 50 </span>
        </div>
        <div class="trn-defstat">
            <span class="trn-defstat__name">KD</span>
            <span class="trn-defstat__value">1.25</span>
        </div>
        <div class="trn-defstat">
            <span class="trn-defstat__name">Wins</span>
            <span class="trn-defstat__value">100</span>
        </div>
        <div class="trn-defstat">
            <span class="trn-defstat__name">Losses</span>
            <span class="trn-defstat__value">80</span>
        </div>
        <div class="trn-defstat">
            <span class="trn-defstat__name">Win %</span>
            <span class="trn-defstat__value">55%</span>
        </div>
        <div class="trn-defstat">
            <span class="trn-defstat__name">Matches</span>
            <span class="trn-defstat__value">180</span>
        </div>
    </body></html>"#
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn scraped_values_bind_positionally() {
    let mock_server = MockServer::start().await;
    let app = create_test_app(test_config(&mock_server.uri()));

    Mock::given(method("GET"))
        .and(path("/profile/pc/Alice"))
        .respond_with(ResponseTemplate::new(200).set_body_string(profile_page()))
        .mount(&mock_server)
        .await;

    let (status, body) = get(app, "/pc/Alice").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "Alice");
    assert_eq!(body["platform"], "pc");
    assert_eq!(body["level"], "50");
    assert_eq!(body["kd"], "1.25");
    assert_eq!(body["wins"], "100");
    assert_eq!(body["losses"], "80");
    assert_eq!(body["winPercent"], "55%");
    assert_eq!(body["matchesPlayed"], "180");
}

#[tokio::test]
async fn sends_browser_like_headers() {
    let mock_server = MockServer::start().await;
    let app = create_test_app(test_config(&mock_server.uri()));

    Mock::given(method("GET"))
        .and(path("/profile/pc/Alice"))
        .and(header("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"))
        .respond_with(ResponseTemplate::new(200).set_body_string(profile_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, _) = get(app, "/pc/Alice").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn repeated_request_within_ttl_hits_cache() {
    let mock_server = MockServer::start().await;
    let app = create_test_app(test_config(&mock_server.uri()));

    Mock::given(method("GET"))
        .and(path("/profile/pc/Alice"))
        .respond_with(ResponseTemplate::new(200).set_body_string(profile_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (first_status, first_body) = get(app.clone(), "/pc/Alice").await;
    let (second_status, second_body) = get(app, "/pc/Alice").await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first_body, second_body);
}

#[tokio::test]
async fn page_without_stats_is_player_not_found() {
    let mock_server = MockServer::start().await;
    let app = create_test_app(test_config(&mock_server.uri()));

    Mock::given(method("GET"))
        .and(path("/profile/pc/Ghost"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><h1>No results</h1></body></html>"),
        )
        .mount(&mock_server)
        .await;

    let (status, body) = get(app, "/pc/Ghost").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Player not found or stats not available");
}

#[tokio::test]
async fn upstream_failure_surfaces_as_fetch_error() {
    let mock_server = MockServer::start().await;
    let app = create_test_app(test_config(&mock_server.uri()));

    Mock::given(method("GET"))
        .and(path("/profile/pc/Alice"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let (status, body) = get(app, "/pc/Alice").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to fetch stats");
}
