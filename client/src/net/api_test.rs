use super::*;
use crate::net::authorizer::{AUTHORIZATION, CONTENT_TYPE};
use crate::session::storage::MemoryStorage;

fn store_with_token(token: &str) -> AuthStore<MemoryStorage> {
    let mut auth = AuthStore::load(MemoryStorage::new());
    auth.login(token, "a@b.com", "Admin");
    auth
}

#[test]
fn url_joins_base_and_path() {
    let api = ApiClient::new(API_BASE, store_with_token(""));
    assert_eq!(api.url("/service-requests"), "/api/service-requests");
    assert_eq!(api.url("auth/login"), "/api/auth/login");
}

#[test]
fn url_tolerates_trailing_slash_on_base() {
    let api = ApiClient::new("https://desk.example.com/api/", store_with_token(""));
    assert_eq!(api.url("/service-requests"), "https://desk.example.com/api/service-requests");
}

#[test]
fn request_headers_include_json_content_type() {
    let api = ApiClient::new(API_BASE, store_with_token(""));
    let headers = api.request_headers();
    assert_eq!(headers.get(CONTENT_TYPE).map(String::as_str), Some("application/json"));
    assert!(!headers.contains_key(AUTHORIZATION));
}

#[test]
fn request_headers_carry_bearer_when_signed_in() {
    let api = ApiClient::new(API_BASE, store_with_token("abc123"));
    assert_eq!(
        api.request_headers().get(AUTHORIZATION).map(String::as_str),
        Some("Bearer abc123")
    );
}

#[test]
fn request_headers_read_token_per_request() {
    let mut auth = AuthStore::load(MemoryStorage::new());
    {
        let api = ApiClient::new(API_BASE, &auth);
        assert!(!api.request_headers().contains_key(AUTHORIZATION));
    }
    auth.login("fresh", "c@d.com", "Client");
    {
        let api = ApiClient::new(API_BASE, &auth);
        assert_eq!(
            api.request_headers().get(AUTHORIZATION).map(String::as_str),
            Some("Bearer fresh")
        );
    }
}

#[test]
fn api_error_from_status_classifies_auth_failures() {
    assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403), ApiError::Forbidden);
    assert_eq!(ApiError::from_status(500), ApiError::Status(500));
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(502).to_string(), "request failed: 502");
    assert_eq!(ApiError::Unauthorized.to_string(), "not signed in");
}

#[test]
fn document_href_formats_expected_path() {
    assert_eq!(document_href(42), "/api/documents/42");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let api = ApiClient::new(API_BASE, store_with_token("tok"));
    let login = block_on_ready(api.login("a@b.com", "pw"));
    assert_eq!(login, Err(ApiError::Unavailable));
    let list = block_on_ready(api.service_requests());
    assert_eq!(list, Err(ApiError::Unavailable));
}

/// Drive a future that never suspends (the SSR stubs return immediately).
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future unexpectedly pending"),
    }
}
