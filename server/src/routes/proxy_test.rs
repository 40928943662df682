use super::*;
use axum::Router;
use axum::http::header::{CONNECTION, CONTENT_TYPE, COOKIE, HOST, SET_COOKIE};
use axum::routing::{get, post};

use crate::config::ServerConfig;

async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

fn state_for(upstream: String) -> AppState {
    AppState::new(&ServerConfig { port: 0, api_upstream: upstream, proxy_timeout_secs: 5 }).unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// Pure helpers
// =============================================================================

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://backend:5000", "/api/events?page=2"), "http://backend:5000/api/events?page=2");
    assert_eq!(upstream_url("http://backend:5000/", "/api/user/login"), "http://backend:5000/api/user/login");
    assert_eq!(upstream_url("http://backend:5000", "api/categories"), "http://backend:5000/api/categories");
}

#[test]
fn hop_by_hop_headers_are_not_forwarded() {
    assert!(!is_forwardable(&CONNECTION));
    assert!(!is_forwardable(&HOST));
    assert!(!is_forwardable(&CONTENT_LENGTH));
    assert!(is_forwardable(&COOKIE));
    assert!(is_forwardable(&SET_COOKIE));
    assert!(is_forwardable(&CONTENT_TYPE));
}

#[test]
fn error_statuses() {
    assert_eq!(proxy_error_to_status(&ProxyError::Timeout), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(proxy_error_to_status(&ProxyError::Upstream("refused".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(proxy_error_to_status(&ProxyError::Body("too big".into())), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================================
// Relay
// =============================================================================

#[tokio::test]
async fn relay_passes_cookie_body_and_set_cookie() {
    let upstream = Router::new().route(
        "/api/user/login",
        post(|headers: HeaderMap, body: String| async move {
            let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned();
            ([(SET_COOKIE, "token=abc; HttpOnly; Path=/")], format!("{cookie}|{body}"))
        }),
    );
    let state = state_for(spawn_upstream(upstream).await);

    let request = Request::builder()
        .method("POST")
        .uri("/api/user/login")
        .header(COOKIE, "sid=1")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"a@college.edu"}"#))
        .unwrap();
    let response = relay(&state, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(SET_COOKIE).unwrap(), "token=abc; HttpOnly; Path=/");
    assert_eq!(body_text(response).await, r#"sid=1|{"email":"a@college.edu"}"#);
}

#[tokio::test]
async fn relay_keeps_query_and_upstream_status() {
    let upstream = Router::new().route(
        "/api/user/check-auth",
        get(|uri: axum::http::Uri| async move {
            (StatusCode::UNAUTHORIZED, format!("denied {}", uri.query().unwrap_or_default()))
        }),
    );
    let state = state_for(spawn_upstream(upstream).await);

    let request = Request::builder().uri("/api/user/check-auth?t=1").body(Body::empty()).unwrap();
    let response = relay(&state, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(response).await, "denied t=1");
}

#[tokio::test]
async fn relay_reports_unreachable_upstream() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let state = state_for(format!("http://{addr}"));

    let request = Request::builder().uri("/api/events").body(Body::empty()).unwrap();
    let err = relay(&state, request).await.unwrap_err();

    assert!(matches!(err, ProxyError::Upstream(_)));
}
