//! Top navigation with the signed-in identity and a logout action.

use leptos::prelude::*;

use crate::router::routes::{ADMIN, CLIENTS, HOME, LOGIN};
use crate::state::auth::BrowserAuthStore;
use crate::util::auth::sign_out;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<BrowserAuthStore>>();

    // Role links and the identity wait for the session read so the first
    // render matches the server's.
    let loaded = move || auth.with(BrowserAuthStore::is_loaded);
    let signed_in = move || auth.with(BrowserAuthStore::is_authenticated);
    let identity = move || auth.with(|a| format!("{} ({})", a.user_email(), a.role()));
    let on_logout = move |_| sign_out(auth);

    view! {
        <nav class="nav">
            <a class="nav__brand" href=HOME.path>"Service Desk"</a>
            <Show when=move || loaded() && auth.with(BrowserAuthStore::is_admin)>
                <a class="nav__link" href=ADMIN.path>"Admin"</a>
            </Show>
            <Show when=move || loaded() && auth.with(BrowserAuthStore::is_client)>
                <a class="nav__link" href=CLIENTS.path>"My requests"</a>
            </Show>
            <span class="nav__spacer"></span>
            <Show when=loaded>
                <Show
                    when=signed_in
                    fallback=|| view! { <a class="nav__link" href=LOGIN.path>"Sign in"</a> }
                >
                    <span class="nav__identity">{identity}</span>
                    <button class="nav__logout" on:click=on_logout>"Log out"</button>
                </Show>
            </Show>
        </nav>
    }
}
