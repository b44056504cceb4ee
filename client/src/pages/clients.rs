//! Client area: the signed-in client's own service requests.

use leptos::prelude::*;

use crate::components::service_request_table::ServiceRequestTable;
use crate::net::api::BrowserApiClient;
use crate::pages::admin::load_requests;
use crate::state::auth::BrowserAuthStore;
use crate::state::requests::RequestsState;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<BrowserAuthStore>>();
    let api = expect_context::<BrowserApiClient>();
    let requests = RwSignal::new(RequestsState::default());

    load_requests(api, requests, move || auth.with(|a| a.is_loaded() && a.is_authenticated()));

    view! {
        <section class="clients">
            <h1>"My service requests"</h1>
            <p class="clients__identity">{move || auth.with(|a| a.user_email().to_owned())}</p>
            <ServiceRequestTable requests=requests/>
        </section>
    }
}
