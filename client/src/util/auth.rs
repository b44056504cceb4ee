//! Leptos wiring for the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route views are wrapped in `Protected`, which decides before the
//! view is built: a placeholder while the session is unread, a `Redirect`
//! when the guard says so, the page otherwise. `RouteGuard` is mounted once
//! inside `<Router>` and re-runs `router::guard::before_each` on location and
//! auth changes, which is how a logout on a protected page ends up at
//! `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_location, use_navigate};

use crate::router::guard::{Access, Navigation, access, before_each};
use crate::router::routes::RouteEntry;
use crate::state::auth::{AuthStore, BrowserAuthStore};

/// Redirects replace the blocked entry so Back does not bounce into it again.
pub(crate) fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Where to send the user after a move to `to_path`, if anywhere.
///
/// Nothing is decided until the store has read storage, so the first render
/// never bounces a signed-in user to `/login`.
pub(crate) fn pending_redirect<S>(
    auth: &AuthStore<S>,
    to_path: &str,
    from_path: Option<&str>,
) -> Option<&'static str> {
    if !auth.is_loaded() {
        return None;
    }
    match before_each(to_path, from_path, auth.session()) {
        Navigation::Redirect(target) => Some(target),
        Navigation::Proceed => None,
    }
}

/// Re-check the current location whenever it or the session changes.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<BrowserAuthStore>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |from: Option<String>| {
        let to = location.pathname.get();
        let target = auth.with(|state| pending_redirect(state, &to, from.as_deref()));
        if let Some(target) = target {
            navigate(target, redirect_options());
        }
        to
    });
}

/// Render `children` only when the session may enter `route`.
#[component]
pub fn Protected(route: RouteEntry, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<BrowserAuthStore>>();
    let decision = Memo::new(move |_| auth.with(|a| access(a.is_loaded(), &route, a.session())));

    move || match decision.get() {
        Access::Pending => view! { <p class="route-pending">"Checking session..."</p> }.into_any(),
        Access::Redirect(target) => view! { <Redirect path=target options=redirect_options()/> }.into_any(),
        Access::Granted => children().into_any(),
    }
}

/// Clear the session. `Protected` and `RouteGuard` then move the user off
/// any protected page.
pub fn sign_out(auth: RwSignal<BrowserAuthStore>) {
    let was = auth.with_untracked(|a| a.session().to_string());
    auth.update(BrowserAuthStore::logout);
    log::info!("signed out ({was})");
}
