// tests/support/helpers.rs
use super::mocks::SpyArticleService;
use article_api::application::ports::ArticleServicePort;
use article_api::presentation::http::{routes::build_router_with_origins, state::HttpState};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

pub fn make_router_with_state(state: HttpState) -> Router {
    build_router_with_origins(state, &[TEST_ORIGIN.to_string()])
}

pub fn make_test_router(spy: &Arc<SpyArticleService>) -> Router {
    let articles: Arc<ArticleServicePort> = spy.clone();
    make_router_with_state(HttpState::new(articles))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(req).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body_bytes(resp).await;
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

pub fn cursor_header(resp: &Response) -> Option<String> {
    resp.headers()
        .get("x-cursor")
        .map(|v| v.to_str().expect("ascii cursor").to_string())
}

/// Assert that a response is an error JSON body `{"message": ...}` with the expected status.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_message: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    assert_eq!(json, serde_json::json!({ "message": expected_message }));
}
