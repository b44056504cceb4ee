//! REST API client for the `/api` backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Call sites never pass credentials. Each request reads the current token
//! from its `TokenSource` immediately before sending and runs it through
//! `authorize`.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so a failed fetch
//! renders as a message rather than breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;

use super::authorizer::{Headers, authorize, default_headers};
use super::types::{LoginResponse, ServiceRequest};
use crate::session::storage::SessionStorage;
use crate::state::auth::{AuthStore, BrowserAuthStore};

/// Path prefix shared by every backend endpoint.
pub const API_BASE: &str = "/api";

const LOGIN_PATH: &str = "/auth/login";
const SERVICE_REQUESTS_PATH: &str = "/service-requests";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not signed in")]
    Unauthorized,
    #[error("access denied")]
    Forbidden,
    #[error("request failed: {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx HTTP status.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            other => Self::Status(other),
        }
    }
}

/// Anything that can report the bearer token to send right now.
pub trait TokenSource {
    /// Current token; empty when signed out.
    fn current_token(&self) -> String;
}

impl<S: SessionStorage> TokenSource for AuthStore<S> {
    fn current_token(&self) -> String {
        self.token().to_owned()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for &T {
    fn current_token(&self) -> String {
        (**self).current_token()
    }
}

impl TokenSource for RwSignal<BrowserAuthStore> {
    fn current_token(&self) -> String {
        self.try_with_untracked(|auth| auth.token().to_owned())
            .unwrap_or_default()
    }
}

/// HTTP client rooted at `base` that authorizes every request from `tokens`.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base: String,
    tokens: T,
}

/// The client as wired into the browser app.
pub type BrowserApiClient = ApiClient<RwSignal<BrowserAuthStore>>;

impl<T: TokenSource> ApiClient<T> {
    pub fn new(base: impl Into<String>, tokens: T) -> Self {
        let base = base.into().trim_end_matches('/').to_owned();
        Self { base, tokens }
    }

    /// Absolute request path for an endpoint relative to the API base.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// Headers for a request about to be sent. Reads the token on every call.
    #[must_use]
    pub fn request_headers(&self) -> Headers {
        let mut headers = default_headers();
        authorize(&mut headers, &self.tokens.current_token());
        headers
    }

    /// Exchange credentials for a session via `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails, the server rejects the
    /// credentials, or the response body is malformed.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::LoginRequest { email: email.to_owned(), password: password.to_owned() };
            let request = self
                .builder(gloo_net::http::Method::POST, LOGIN_PATH)
                .json(&body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, self.url(LOGIN_PATH));
            Err(ApiError::Unavailable)
        }
    }

    /// List service requests visible to the current session via
    /// `GET /api/service-requests`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the session is rejected.
    pub async fn service_requests(&self) -> Result<Vec<ServiceRequest>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .builder(gloo_net::http::Method::GET, SERVICE_REQUESTS_PATH)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.url(SERVICE_REQUESTS_PATH);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    fn builder(&self, method: gloo_net::http::Method, path: &str) -> gloo_net::http::RequestBuilder {
        let url = self.url(path);
        log::debug!("{method} {url}");
        self.request_headers()
            .iter()
            .fold(gloo_net::http::RequestBuilder::new(&url).method(method), |req, (name, value)| {
                req.header(name, value)
            })
    }
}

/// Path of the download endpoint for an attached document.
#[must_use]
pub fn document_href(document_id: i64) -> String {
    format!("{API_BASE}/documents/{document_id}")
}

#[cfg(feature = "hydrate")]
async fn decode<R: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<R, ApiError> {
    if !resp.ok() {
        return Err(ApiError::from_status(resp.status()));
    }
    resp.json::<R>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
