//! Public landing page.

use leptos::prelude::*;

use crate::router::routes::{LOGIN, landing_path};
use crate::state::auth::BrowserAuthStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<BrowserAuthStore>>();
    let dashboard = move || auth.with(|a| landing_path(a.session()));

    view! {
        <section class="home">
            <h1>"Service Desk"</h1>
            <p>"Request services, track their status and share documents with our team."</p>
            <Show when=move || auth.with(BrowserAuthStore::is_loaded)>
                <Show
                    when=move || auth.with(BrowserAuthStore::is_authenticated)
                    fallback=|| view! { <a class="home__cta" href=LOGIN.path>"Sign in"</a> }
                >
                    <a class="home__cta" href=dashboard>"Go to your dashboard"</a>
                </Show>
            </Show>
        </section>
    }
}
