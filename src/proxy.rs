//! `/api/*` pass-through to the backend service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app talks to a same-origin `/api`. This host forwards those
//! calls verbatim to `API_UPSTREAM_URL`, including the `Authorization`
//! header the client attached. No credential is inspected here.
//!
//! ERROR HANDLING
//! ==============
//! Upstream connection and read failures become `502 Bad Gateway`; upstream
//! HTTP errors are relayed with their original status and body.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::config::HostConfig;

/// Headers scoped to a single hop that must not be forwarded.
static HOP_BY_HOP: [HeaderName; 9] = [
    header::CONNECTION,
    header::HOST,
    header::CONTENT_LENGTH,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("HTTP client build failed: {0}")]
    Client(reqwest::Error),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Shared proxy state, injected via the `State` extractor.
#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    upstream: Arc<str>,
}

impl ProxyState {
    pub fn new(config: &HostConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()
            .map_err(ProxyError::Client)?;
        Ok(Self { http, upstream: Arc::from(config.api_upstream_url.as_str()) })
    }

    async fn send(&self, method: Method, uri: &Uri, headers: &HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
        let url = upstream_url(&self.upstream, uri);
        let upstream = self
            .http
            .request(method, url)
            .headers(forwardable_headers(headers))
            .body(body)
            .send()
            .await?;
        let status = upstream.status();
        let headers = forwardable_headers(upstream.headers());
        let bytes = upstream.bytes().await?;
        Ok((status, headers, bytes).into_response())
    }
}

/// Target URL for an inbound request: upstream origin + original path and query.
pub(crate) fn upstream_url(upstream: &str, uri: &Uri) -> String {
    let path = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{upstream}{path}")
}

/// Copy of `headers` without hop-by-hop entries.
pub(crate) fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !HOP_BY_HOP.contains(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Axum handler for `/api/{*rest}`.
pub async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let label = format!("{method} {}", uri.path());
    match state.send(method, &uri, &headers, body).await {
        Ok(resp) => {
            tracing::debug!(request = %label, status = %resp.status(), "api proxied");
            resp
        }
        Err(e) => {
            tracing::warn!(request = %label, error = %e, "api proxy failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
