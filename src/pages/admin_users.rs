//! Admin list of every account, with a client-side name/email filter.

#[cfg(test)]
#[path = "admin_users_test.rs"]
mod admin_users_test;

use leptos::prelude::*;

use crate::components::loading::LoadingIndicator;
use crate::net::api::HttpGateway;
use crate::net::types::UserRecord;
use crate::util::format;

/// Keep users whose name or email contains `needle`, ignoring case.
fn filter_users(users: Vec<UserRecord>, needle: &str) -> Vec<UserRecord> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return users;
    }
    users
        .into_iter()
        .filter(|u| u.name.to_lowercase().contains(&needle) || u.email.to_lowercase().contains(&needle))
        .collect()
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let filter = RwSignal::new(String::new());

    let users = LocalResource::new(move || {
        let gateway = gateway.clone();
        async move { gateway.list_users().await }
    });

    view! {
        <div class="users-page">
            <header class="page-header">
                <h1>"Users"</h1>
                <input
                    type="search"
                    placeholder="Filter by name or email"
                    prop:value=move || filter.get()
                    on:input=move |ev| filter.set(event_target_value(&ev))
                />
            </header>
            <Suspense fallback=move || view! { <LoadingIndicator label="Loading users..."/> }>
                {move || {
                    users
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let rows = filter_users(list, &filter.get());
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Email"</th>
                                                <th>"Role"</th>
                                                <th>"Verified"</th>
                                                <th>"Joined"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|user| {
                                                    view! {
                                                        <tr>
                                                            <td>{user.name}</td>
                                                            <td>{user.email}</td>
                                                            <td>{user.role.label()}</td>
                                                            <td>{if user.is_verified { "Yes" } else { "No" }}</td>
                                                            <td>{format::display_date(user.created_at.as_deref())}</td>
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
                                    <p class="error-state" role="alert">{e.user_message("Failed to load users.")}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
