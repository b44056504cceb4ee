//! Pre-navigation auth check.
//!
//! Every navigation, including the first page load and the redirect to
//! `/login` itself, goes through `before_each`. Protection is binary:
//! any authenticated session may enter any protected route.
//!
//! Until the session has been read from browser storage no decision can be
//! made; `access` reports `Pending` and protected views stay unrendered.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{LOGIN, RouteEntry, resolve};
use crate::state::auth::Session;

/// Outcome of a navigation check. Exactly one per attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Continue to the requested target unchanged.
    Proceed,
    /// Cancel the attempt and go here instead.
    Redirect(&'static str),
}

/// Decide whether navigation to `to` may proceed for `session`.
#[must_use]
pub fn guard(to: &RouteEntry, session: &Session) -> Navigation {
    if to.requires_auth && !session.is_authenticated() {
        Navigation::Redirect(LOGIN.path)
    } else {
        Navigation::Proceed
    }
}

/// Resolve `to_path` in the route table and run `guard`. Paths outside the
/// table carry no protection flag and proceed.
#[must_use]
pub fn before_each(to_path: &str, from_path: Option<&str>, session: &Session) -> Navigation {
    let outcome = resolve(to_path).map_or(Navigation::Proceed, |to| guard(to, session));
    if let Navigation::Redirect(target) = outcome {
        log::debug!("blocked {to_path} (from {}), redirecting to {target}", from_path.unwrap_or("-"));
    }
    outcome
}

/// Render decision for a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Session not read yet; render neither the view nor a redirect.
    Pending,
    Granted,
    Redirect(&'static str),
}

/// Decide what a route's view slot shows, given whether the session is loaded.
#[must_use]
pub fn access(loaded: bool, to: &RouteEntry, session: &Session) -> Access {
    if !loaded {
        return Access::Pending;
    }
    match guard(to, session) {
        Navigation::Proceed => Access::Granted,
        Navigation::Redirect(target) => Access::Redirect(target),
    }
}
