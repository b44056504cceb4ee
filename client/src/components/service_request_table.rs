//! Table of service requests with status, price and attached documents.

use leptos::prelude::*;

use crate::net::api::document_href;
use crate::state::requests::{RequestsState, format_price};

/// Render `requests` as a table. `show_client` adds the client-name column
/// used on the admin dashboard.
#[component]
pub fn ServiceRequestTable(requests: RwSignal<RequestsState>, #[prop(optional)] show_client: bool) -> impl IntoView {
    let rows = move || requests.with(|s| s.items.clone());

    view! {
        <Show when=move || requests.with(|s| s.loading)>
            <p class="requests__status">"Loading service requests..."</p>
        </Show>
        <Show when=move || requests.with(|s| s.error.is_some())>
            <p class="requests__status requests__status--error">
                {move || requests.with(|s| s.error.clone().unwrap_or_default())}
            </p>
        </Show>
        <Show when=move || requests.with(|s| !s.loading && s.error.is_none() && s.items.is_empty())>
            <p class="requests__status">"No service requests yet."</p>
        </Show>
        <table class="requests">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Service"</th>
                    {show_client.then(|| view! { <th>"Client"</th> })}
                    <th>"Price"</th>
                    <th>"Status"</th>
                    <th>"Created"</th>
                    <th>"Documents"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|r| r.id
                    children=move |req| {
                        let client = req.client_name.clone().unwrap_or_else(|| "-".to_owned());
                        let documents = req
                            .documents()
                            .iter()
                            .map(|doc| {
                                view! {
                                    <a class="requests__doc" href=document_href(doc.id)>
                                        {doc.file_name.clone()}
                                    </a>
                                }
                            })
                            .collect_view();
                        view! {
                            <tr>
                                <td>{req.id}</td>
                                <td>
                                    {req.service_name}
                                    {req.notes.map(|n| view! { <span class="requests__notes">{n}</span> })}
                                </td>
                                {show_client.then(|| view! { <td>{client}</td> })}
                                <td>{format_price(req.price)}</td>
                                <td class="requests__state">{req.status}</td>
                                <td>{req.created_at}</td>
                                <td>{documents}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
