//! Same-origin relay for the REST backend.
//!
//! DESIGN
//! ======
//! The browser talks to `/api/*` on this host so the backend's session cookie
//! stays first-party. Each request is replayed against `API_UPSTREAM` with the
//! same method, path, query, body and end-to-end headers; the upstream status,
//! headers (including `Set-Cookie`) and body are returned unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_LENGTH;
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::Response;

use crate::state::AppState;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Connection-scoped headers that must not cross the relay.
const HOP_BY_HOP: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    #[error("request body unreadable: {0}")]
    Body(String),

    #[error("upstream timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("response assembly failed: {0}")]
    Response(String),
}

pub(crate) fn proxy_error_to_status(err: &ProxyError) -> StatusCode {
    match err {
        ProxyError::Body(_) => StatusCode::PAYLOAD_TOO_LARGE,
        ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        ProxyError::ClientBuild(_) | ProxyError::Response(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Absolute upstream URL for a local `path?query`.
pub fn upstream_url(upstream: &str, path_and_query: &str) -> String {
    let upstream = upstream.trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{upstream}{path_and_query}")
    } else {
        format!("{upstream}/{path_and_query}")
    }
}

/// End-to-end headers are relayed; hop-by-hop and length headers are not.
pub fn is_forwardable(name: &HeaderName) -> bool {
    name != CONTENT_LENGTH && !HOP_BY_HOP.contains(&name.as_str())
}

fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in headers {
        if is_forwardable(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Handler for `/api/{*path}`.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, StatusCode> {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    relay(&state, request).await.map_err(|e| {
        tracing::warn!(%method, %path, error = %e, "api relay failed");
        proxy_error_to_status(&e)
    })
}

pub(crate) async fn relay(state: &AppState, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or(parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.api_upstream, path_and_query);
    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    tracing::debug!(method = %parts.method, %url, "relaying api request");
    let upstream = state
        .http
        .request(parts.method, url.as_str())
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| if e.is_timeout() { ProxyError::Timeout } else { ProxyError::Upstream(e.to_string()) })?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;

    let mut builder = Response::builder().status(status);
    if let Some(out) = builder.headers_mut() {
        out.extend(headers);
    }
    builder.body(Body::from(bytes)).map_err(|e| ProxyError::Response(e.to_string()))
}
