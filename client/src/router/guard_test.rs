use super::*;
use crate::router::routes::{ADMIN, CLIENTS, HOME, LOGIN, ROUTES};
use crate::session::storage::MemoryStorage;
use crate::state::auth::AuthStore;

fn signed_in(role: &str) -> Session {
    Session { token: "tok".to_owned(), user_email: "a@b.com".to_owned(), role: role.to_owned() }
}

// =============================================================
// guard
// =============================================================

#[test]
fn protected_routes_redirect_when_signed_out() {
    let anon = Session::default();
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(guard(route, &anon), Navigation::Redirect("/login"), "{}", route.path);
    }
}

#[test]
fn unprotected_routes_always_proceed() {
    for session in [Session::default(), signed_in("Admin"), signed_in("Client")] {
        for route in ROUTES.iter().filter(|r| !r.requires_auth) {
            assert_eq!(guard(route, &session), Navigation::Proceed, "{}", route.path);
        }
    }
}

#[test]
fn protected_routes_proceed_when_signed_in() {
    for role in ["Admin", "Client", ""] {
        let session = signed_in(role);
        assert_eq!(guard(&ADMIN, &session), Navigation::Proceed);
        assert_eq!(guard(&CLIENTS, &session), Navigation::Proceed);
    }
}

#[test]
fn redirect_target_itself_proceeds() {
    let anon = Session::default();
    let Navigation::Redirect(target) = before_each("/admin", None, &anon) else {
        panic!("expected redirect");
    };
    assert_eq!(before_each(target, Some("/admin"), &anon), Navigation::Proceed);
}

// =============================================================
// before_each
// =============================================================

#[test]
fn unknown_paths_proceed() {
    assert_eq!(before_each("/does-not-exist", None, &Session::default()), Navigation::Proceed);
}

#[test]
fn before_each_normalizes_path() {
    assert_eq!(before_each("/clients/?tab=open", Some("/"), &Session::default()), Navigation::Redirect("/login"));
}

#[test]
fn scenario_client_session_can_enter_admin_route() {
    let mut auth = AuthStore::load(MemoryStorage::new());
    auth.login("abc123", "a@b.com", "Client");
    assert!(auth.is_authenticated());
    assert!(auth.is_client());
    assert!(!auth.is_admin());

    // No role-based restriction: any authenticated session passes.
    assert_eq!(before_each(ADMIN.path, Some(HOME.path), auth.session()), Navigation::Proceed);
}

#[test]
fn scenario_no_login_home_proceeds_clients_redirects() {
    let auth = AuthStore::load(MemoryStorage::new());
    assert_eq!(before_each("/", None, auth.session()), Navigation::Proceed);
    assert_eq!(before_each("/clients", Some("/"), auth.session()), Navigation::Redirect("/login"));
}

#[test]
fn logout_revokes_access_to_protected_routes() {
    let mut auth = AuthStore::load(MemoryStorage::new());
    auth.login("tok", "a@b.com", "Admin");
    assert_eq!(before_each("/admin", None, auth.session()), Navigation::Proceed);
    auth.logout();
    assert_eq!(before_each("/admin", None, auth.session()), Navigation::Redirect("/login"));
}

// =============================================================
// access
// =============================================================

#[test]
fn access_is_pending_until_loaded() {
    for session in [Session::default(), signed_in("Admin")] {
        for route in &ROUTES {
            assert_eq!(access(false, route, &session), Access::Pending, "{}", route.path);
        }
    }
}

#[test]
fn access_redirects_anonymous_from_protected_routes() {
    let anon = Session::default();
    assert_eq!(access(true, &ADMIN, &anon), Access::Redirect("/login"));
    assert_eq!(access(true, &CLIENTS, &anon), Access::Redirect("/login"));
    assert_eq!(access(true, &LOGIN, &anon), Access::Granted);
    assert_eq!(access(true, &HOME, &anon), Access::Granted);
}

#[test]
fn access_granted_to_any_signed_in_role() {
    assert_eq!(access(true, &ADMIN, &signed_in("Client")), Access::Granted);
    assert_eq!(access(true, &CLIENTS, &signed_in("Admin")), Access::Granted);
}

#[test]
fn access_follows_logout_on_protected_route() {
    let mut auth = AuthStore::load(MemoryStorage::new());
    auth.login("tok", "a@b.com", "Client");
    assert_eq!(access(auth.is_loaded(), &CLIENTS, auth.session()), Access::Granted);
    auth.logout();
    assert_eq!(access(auth.is_loaded(), &CLIENTS, auth.session()), Access::Redirect("/login"));
}
