//! Admin landing: event overview with status changes and registrant links.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::loading::LoadingIndicator;
use crate::components::verification_banner::VerificationBanner;
use crate::net::api::HttpGateway;
use crate::net::types::{Event, EventQuery, EventStatus};
use crate::routes::paths;
use crate::util::format;
use crate::util::task::spawn_in_browser;

const OVERVIEW_LIMIT: u32 = 50;

fn parse_status(value: &str) -> Option<EventStatus> {
    EventStatus::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(value.trim()))
}

/// Event count per status, in `EventStatus::ALL` order.
fn status_counts(events: &[Event]) -> Vec<(EventStatus, usize)> {
    EventStatus::ALL.into_iter().map(|status| (status, events.iter().filter(|e| e.status == status).count())).collect()
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>().signal();
    let gateway = expect_context::<HttpGateway>();
    let error = RwSignal::new(String::new());

    let events = {
        let gateway = gateway.clone();
        LocalResource::new(move || {
            let gateway = gateway.clone();
            async move {
                let query = EventQuery { limit: OVERVIEW_LIMIT, ..EventQuery::default() };
                gateway.list_events(&query).await.map(|list| list.events)
            }
        })
    };

    let change_status = Callback::new(move |(id, value): (String, String)| {
        let Some(status) = parse_status(&value) else {
            log::warn!("admin: ignoring unknown status {value}");
            return;
        };
        error.set(String::new());
        let gateway = gateway.clone();
        spawn_in_browser(async move {
            match gateway.update_event_status(&id, status).await {
                Ok(_) => events.refetch(),
                Err(e) => error.set(e.user_message("Could not update the event status.")),
            }
        });
    });

    let greeting = move || session.with(|s| s.identity().map(|i| i.first_name().to_owned())).unwrap_or_default();

    view! {
        <div class="dashboard dashboard--admin">
            <VerificationBanner/>
            <header class="page-header">
                <h1>"Admin dashboard"</h1>
                <p>"Signed in as " {greeting}</p>
            </header>

            <nav class="quick-links">
                <a href=paths::EVENTS class="quick-links__item">"Public events"</a>
                <a href=paths::ADMIN_USERS class="quick-links__item">"Users"</a>
            </nav>

            <Show when=move || !error.get().is_empty()>
                <p class="error-state" role="alert">{move || error.get()}</p>
            </Show>

            <Suspense fallback=move || view! { <LoadingIndicator label="Loading events..."/> }>
                {move || {
                    events
                        .get()
                        .map(|result| match result {
                            Ok(list) => view! { <EventOverview events=list on_status=change_status/> }.into_any(),
                            Err(e) => {
                                view! {
                                    <p class="error-state" role="alert">{e.user_message("Failed to load events.")}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn EventOverview(events: Vec<Event>, on_status: Callback<(String, String)>) -> impl IntoView {
    let counts = status_counts(&events);

    view! {
        <section class="overview">
            <ul class="overview__stats">
                <li class="overview__stat">
                    <span class="overview__count">{events.len()}</span>
                    <span>"Total"</span>
                </li>
                {counts
                    .into_iter()
                    .map(|(status, count)| {
                        view! {
                            <li class="overview__stat">
                                <span class="overview__count">{count}</span>
                                <span>{status.as_str()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Event"</th>
                        <th>"Starts"</th>
                        <th>"Seats"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {events.into_iter().map(|event| view! { <EventRow event=event on_status=on_status/> }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn EventRow(event: Event, on_status: Callback<(String, String)>) -> impl IntoView {
    let id = event.id.clone();
    let current = event.status;
    let detail = paths::event_detail(&event.id);
    let registrants = paths::admin_event_registrations(&event.id);
    let starts = format::display_datetime(event.start_date.as_deref());
    let seats = format::seats_label(event.available_seats, event.total_seats);

    view! {
        <tr>
            <td>
                <a href=detail>{event.title}</a>
            </td>
            <td>{starts}</td>
            <td>{seats}</td>
            <td>
                <select on:change=move |ev| on_status.run((id.clone(), event_target_value(&ev)))>
                    {EventStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option value=status.as_str() selected={status == current}>
                                    {status.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
            <td>
                <a href=registrants>"Registrations"</a>
            </td>
        </tr>
    }
}
