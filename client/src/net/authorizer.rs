//! Attach the current bearer token to outgoing API requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` calls `authorize` for every request right before it is sent,
//! so a login or logout between two requests shows up on the very next one.

#[cfg(test)]
#[path = "authorizer_test.rs"]
mod authorizer_test;

use std::collections::BTreeMap;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Outgoing request headers, keyed by canonical header name.
pub type Headers = BTreeMap<String, String>;

/// Headers every API request starts from.
#[must_use]
pub fn default_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert(CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned());
    headers
}

/// Format the `Authorization` value for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Set `Authorization: Bearer <token>` when `token` is non-empty.
///
/// With an empty token no `Authorization` header is sent, even if one was
/// carried over from an earlier request description.
pub fn authorize(headers: &mut Headers, token: &str) {
    if token.is_empty() {
        headers.remove(AUTHORIZATION);
    } else {
        headers.insert(AUTHORIZATION.to_owned(), bearer(token));
    }
}
