//! Single event view with the student registration action.
//!
//! After a successful registration the event is fetched again so the seat
//! count shown is the server's, never a local decrement.

#[cfg(test)]
#[path = "event_detail_test.rs"]
mod event_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::AppSession;
use crate::components::loading::LoadingIndicator;
use crate::net::api::HttpGateway;
use crate::net::types::{Event, EventStatus, category_label};
use crate::routes::{landing, paths};
use crate::state::session::SessionState;
use crate::util::format;
use crate::util::task::spawn_in_browser;

/// What the registration panel offers for this event and session.
#[derive(Clone, Debug, PartialEq, Eq)]
enum BookingAction {
    /// Signed out; link to login and come back here.
    SignIn { href: String },
    /// Signed in but email not verified yet.
    Verify,
    /// Admins manage events, they don't book them.
    Manage,
    /// Event is not open for registration.
    Closed,
    SoldOut,
    Book,
}

fn booking_action(session: &SessionState, event: &Event) -> BookingAction {
    let Some(identity) = session.identity() else {
        return BookingAction::SignIn { href: landing::login_redirect(&paths::event_detail(&event.id)) };
    };
    if identity.is_admin() {
        return BookingAction::Manage;
    }
    if !identity.verified {
        return BookingAction::Verify;
    }
    if event.status != EventStatus::Published {
        return BookingAction::Closed;
    }
    if event.available_seats == Some(0) {
        return BookingAction::SoldOut;
    }
    BookingAction::Book
}

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let session = expect_context::<AppSession>().signal();
    let params = use_params_map();
    let event_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    let event = {
        let gateway = gateway.clone();
        LocalResource::new(move || {
            let id = event_id();
            let gateway = gateway.clone();
            async move { gateway.get_event(&id).await }
        })
    };

    let notice = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);

    let on_register = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        notice.set(None);
        let id = event_id();
        let gateway = gateway.clone();
        spawn_in_browser(async move {
            match gateway.register_for_event(&id).await {
                Ok(()) => {
                    notice.set(Some(Ok("You're registered for this event.".to_owned())));
                    event.refetch();
                }
                Err(e) => notice.set(Some(Err(e.user_message("Registration failed. Please try again.")))),
            }
            busy.set(false);
        });
    };

    let render_action = move |ev: &Event| {
        let action = session.with(|s| booking_action(s, ev));
        match action {
            BookingAction::SignIn { href } => view! {
                <a href=href class="button">"Sign in to register"</a>
            }
            .into_any(),
            BookingAction::Verify => view! {
                <p class="booking__hint">"Verify your email to register for events."</p>
                <a href=paths::VERIFY_EMAIL class="button button--small">"Verify now"</a>
            }
            .into_any(),
            BookingAction::Manage => {
                let href = paths::admin_event_registrations(&ev.id);
                view! { <a href=href class="button button--ghost">"View registrations"</a> }.into_any()
            }
            BookingAction::Closed => view! { <p class="booking__hint">"Registration is closed."</p> }.into_any(),
            BookingAction::SoldOut => view! { <p class="booking__hint">"This event is full."</p> }.into_any(),
            BookingAction::Book => view! {
                <button type="button" class="button" disabled=move || busy.get() on:click=on_register.clone()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
            }
            .into_any(),
        }
    };

    view! {
        <div class="event-detail">
            <a href=paths::EVENTS class="back-link">"← All events"</a>
            <Suspense fallback=move || view! { <LoadingIndicator label="Loading event..."/> }>
                {move || {
                    event
                        .get()
                        .map(|result| match result {
                            Ok(ev) => {
                                let action = render_action(&ev);
                                view! {
                                    <EventSummary event=ev/>
                                    <section class="booking">{action}</section>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="error-state" role="alert">{e.user_message("Event not found.")}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            {move || {
                notice
                    .get()
                    .map(|n| match n {
                        Ok(message) => view! { <p class="notice notice--success">{message}</p> }.into_any(),
                        Err(message) => view! { <p class="notice notice--error" role="alert">{message}</p> }.into_any(),
                    })
            }}
        </div>
    }
}

#[component]
fn EventSummary(event: Event) -> impl IntoView {
    let category = category_label(event.category.as_ref());
    let organizer = event.organizer_name().unwrap_or("Organizer TBA").to_owned();
    let venue = event.venue().unwrap_or("Venue TBA").to_owned();
    let starts = format::display_datetime(event.start_date.as_deref());
    let ends = format::display_datetime(event.end_date.as_deref());
    let price = format::price_label(event.price);
    let seats = format::seats_label(event.available_seats, event.total_seats);

    view! {
        <article class="event-summary">
            <span class="event-summary__category">{category}</span>
            <h1>{event.title}</h1>
            <dl class="event-summary__meta">
                <dt>"Starts"</dt>
                <dd>{starts}</dd>
                <dt>"Ends"</dt>
                <dd>{ends}</dd>
                <dt>"Venue"</dt>
                <dd>{venue}</dd>
                <dt>"Organizer"</dt>
                <dd>{organizer}</dd>
                <dt>"Price"</dt>
                <dd>{price}</dd>
                <dt>"Seats"</dt>
                <dd>{seats}</dd>
            </dl>
            <p class="event-summary__description">{event.description}</p>
        </article>
    }
}
