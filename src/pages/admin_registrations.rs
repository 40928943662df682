//! Admin view of everyone registered for one event.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading::LoadingIndicator;
use crate::net::api::HttpGateway;
use crate::routes::paths;
use crate::util::format;

#[component]
pub fn AdminRegistrationsPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let params = use_params_map();
    let event_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    let title = {
        let gateway = gateway.clone();
        LocalResource::new(move || {
            let id = event_id();
            let gateway = gateway.clone();
            async move { gateway.get_event(&id).await.map_or_else(|_| "Event".to_owned(), |e| e.title) }
        })
    };

    let registrations = LocalResource::new(move || {
        let id = event_id();
        let gateway = gateway.clone();
        async move { gateway.event_registrations(&id).await }
    });

    view! {
        <div class="registrants-page">
            <a href=paths::ADMIN_DASHBOARD class="back-link">"← Dashboard"</a>
            <header class="page-header">
                <h1>
                    <Suspense fallback=|| "Registrations">{move || title.get()}</Suspense>
                </h1>
            </header>
            <Suspense fallback=move || view! { <LoadingIndicator label="Loading registrations..."/> }>
                {move || {
                    registrations
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="empty-state">"No one has registered yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <p class="registrants-page__count">{list.len()} " registrations"</p>
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Email"</th>
                                                <th>"Status"</th>
                                                <th>"Registered"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|r| {
                                                    let user = r.user.clone().unwrap_or_default();
                                                    view! {
                                                        <tr>
                                                            <td>{user.name.unwrap_or_else(|| "Unknown".to_owned())}</td>
                                                            <td>{user.email.unwrap_or_default()}</td>
                                                            <td>{r.status.clone().unwrap_or_default()}</td>
                                                            <td>{format::display_date(r.created_at.as_deref())}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="error-state" role="alert">
                                        {e.user_message("Failed to load registrations.")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
