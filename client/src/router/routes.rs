//! Named routes and their protection metadata.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::auth::Session;

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    /// Navigation needs an authenticated session.
    pub requires_auth: bool,
}

pub const HOME: RouteEntry = RouteEntry { path: "/", name: "home", requires_auth: false };
pub const LOGIN: RouteEntry = RouteEntry { path: "/login", name: "login", requires_auth: false };
pub const ADMIN: RouteEntry = RouteEntry { path: "/admin", name: "admin", requires_auth: true };
pub const CLIENTS: RouteEntry = RouteEntry { path: "/clients", name: "clients", requires_auth: true };

pub const ROUTES: [RouteEntry; 4] = [HOME, LOGIN, ADMIN, CLIENTS];

/// Look up the route for a location path. Query strings, fragments and a
/// trailing slash are ignored.
#[must_use]
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    ROUTES.iter().find(|route| route.path == normalized)
}

/// Where to send a user right after signing in.
#[must_use]
pub fn landing_path(session: &Session) -> &'static str {
    if session.is_admin() {
        ADMIN.path
    } else if session.is_client() {
        CLIENTS.path
    } else {
        HOME.path
    }
}
