//! Student landing: greeting, quick links and the next few registrations.

#[cfg(test)]
#[path = "student_dashboard_test.rs"]
mod student_dashboard_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::event_card::EventCard;
use crate::components::loading::LoadingIndicator;
use crate::components::verification_banner::VerificationBanner;
use crate::net::api::HttpGateway;
use crate::net::types::{Event, Registration};
use crate::routes::paths;

const UPCOMING_LIMIT: usize = 3;

/// Active registrations with a populated event, earliest start first.
fn upcoming_events(registrations: Vec<Registration>, limit: usize) -> Vec<Event> {
    let mut events: Vec<Event> =
        registrations.into_iter().filter(Registration::is_active).filter_map(|r| r.event().cloned()).collect();
    events.sort_by(|a, b| a.start_date.cmp(&b.start_date));
    events.truncate(limit);
    events
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>().signal();
    let gateway = expect_context::<HttpGateway>();

    let greeting = move || {
        session.with(|s| s.identity().map_or_else(|| "Welcome".to_owned(), |i| format!("Welcome, {}", i.first_name())))
    };

    let upcoming = LocalResource::new(move || {
        let gateway = gateway.clone();
        async move { gateway.my_registrations().await }
    });

    view! {
        <div class="dashboard">
            <VerificationBanner/>
            <header class="page-header">
                <h1>{greeting}</h1>
                <p>"Here's what's coming up for you."</p>
            </header>

            <nav class="quick-links">
                <a href=paths::EVENTS class="quick-links__item">"Browse events"</a>
                <a href=paths::STUDENT_MY_BOOKINGS class="quick-links__item">"My bookings"</a>
                <a href=paths::STUDENT_PROFILE class="quick-links__item">"Profile"</a>
            </nav>

            <section class="dashboard__section">
                <h2>"Upcoming events"</h2>
                <Suspense fallback=move || view! { <LoadingIndicator label="Loading your events..."/> }>
                    {move || {
                        upcoming
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    let events = upcoming_events(list, UPCOMING_LIMIT);
                                    if events.is_empty() {
                                        view! {
                                            <p class="empty-state">
                                                "You haven't registered for any events yet. "
                                                <a href=paths::EVENTS>"Find one"</a>
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="event-grid">
                                                {events
                                                    .into_iter()
                                                    .map(|event| view! { <EventCard event=event/> })
                                                    .collect_view()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(e) => {
                                    view! {
                                        <p class="error-state" role="alert">
                                            {e.user_message("Failed to load your registrations.")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
