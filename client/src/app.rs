//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::net::api::{API_BASE, ApiClient};
use crate::pages::{admin::AdminPage, clients::ClientsPage, home::HomePage, login::LoginPage};
use crate::router::routes::{ADMIN, CLIENTS};
use crate::state::auth::BrowserAuthStore;
use crate::util::auth::{Protected, RouteGuard};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth session and the API client as context, and mounts the
/// route guard inside the router. The session starts unread on both server
/// and browser; storage is read after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(BrowserAuthStore::unhydrated());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    Effect::new(move || auth.update(BrowserAuthStore::reload));
    provide_context(ApiClient::new(API_BASE, auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/servicedesk.css"/>
        <Title text="Service Desk"/>

        <Router>
            <RouteGuard/>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <Protected route=ADMIN><AdminPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("clients")
                        view=|| view! { <Protected route=CLIENTS><ClientsPage/></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
