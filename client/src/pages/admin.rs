//! Admin dashboard listing every service request.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard only requires a session. Non-admin sessions reach this
//! page and see a notice instead of the table; the backend enforces the
//! real restriction on `/api/service-requests`.

use leptos::prelude::*;

use crate::components::service_request_table::ServiceRequestTable;
use crate::net::api::BrowserApiClient;
use crate::state::auth::BrowserAuthStore;
use crate::state::requests::{RequestsState, format_price};

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<BrowserAuthStore>>();
    let api = expect_context::<BrowserApiClient>();
    let requests = RwSignal::new(RequestsState::default());
    let loaded = move || auth.with(BrowserAuthStore::is_loaded);
    let is_admin = move || auth.with(BrowserAuthStore::is_admin);

    load_requests(api, requests, move || loaded() && is_admin());

    view! {
        <section class="admin">
            <h1>"Admin dashboard"</h1>
            <Show
                when=loaded
                fallback=|| view! { <p class="admin__loading">"Loading session..."</p> }
            >
                <Show
                    when=is_admin
                    fallback=|| view! {
                        <p class="admin__notice">"This dashboard is for administrators."</p>
                    }
                >
                    <p class="admin__summary">
                        {move || requests.with(|s| format!(
                            "{} requests, {} total",
                            s.items.len(),
                            format_price(s.total_value()),
                        ))}
                    </p>
                    <ServiceRequestTable requests=requests show_client=true/>
                </Show>
            </Show>
        </section>
    }
}

/// Fetch the request list once `should_load` allows it. Re-runs when the
/// signals it reads change, so a session read after mount still triggers it.
pub(crate) fn load_requests(
    api: BrowserApiClient,
    requests: RwSignal<RequestsState>,
    should_load: impl Fn() -> bool + 'static,
) {
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if !should_load() {
            return;
        }
        requests.update(RequestsState::begin);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.service_requests().await;
            if let Err(e) = &result {
                log::warn!("service request fetch failed: {e}");
            }
            requests.update(|s| s.finish(result));
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, requests, should_load);
    }
}
