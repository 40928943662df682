//! The signed-in student's registrations with cancellation.

use leptos::prelude::*;

use crate::components::loading::LoadingIndicator;
use crate::net::api::HttpGateway;
use crate::net::types::Registration;
use crate::routes::paths;
use crate::util::format;
use crate::util::task::spawn_in_browser;

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let error = RwSignal::new(String::new());
    let cancelling = RwSignal::new(None::<String>);

    let bookings = {
        let gateway = gateway.clone();
        LocalResource::new(move || {
            let gateway = gateway.clone();
            async move { gateway.my_registrations().await }
        })
    };

    let cancel = Callback::new(move |id: String| {
        if cancelling.get_untracked().is_some() {
            return;
        }
        cancelling.set(Some(id.clone()));
        error.set(String::new());
        let gateway = gateway.clone();
        spawn_in_browser(async move {
            match gateway.cancel_registration(&id).await {
                Ok(()) => bookings.refetch(),
                Err(e) => error.set(e.user_message("Could not cancel the booking.")),
            }
            cancelling.set(None);
        });
    });

    view! {
        <div class="bookings-page">
            <header class="page-header">
                <h1>"My bookings"</h1>
            </header>
            <Show when=move || !error.get().is_empty()>
                <p class="error-state" role="alert">{move || error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <LoadingIndicator label="Loading bookings..."/> }>
                {move || {
                    bookings
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <p class="empty-state">
                                        "No bookings yet. "
                                        <a href=paths::EVENTS>"Browse events"</a>
                                    </p>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="booking-list">
                                        {list
                                            .into_iter()
                                            .map(|registration| {
                                                view! { <BookingRow registration=registration cancelling=cancelling on_cancel=cancel/> }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="error-state" role="alert">{e.user_message("Failed to load bookings.")}</p>
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
fn BookingRow(
    registration: Registration,
    cancelling: RwSignal<Option<String>>,
    on_cancel: Callback<String>,
) -> impl IntoView {
    let active = registration.is_active();
    let id = registration.id.clone();
    let busy_id = id.clone();
    let busy = move || cancelling.with(|c| c.as_deref() == Some(busy_id.as_str()));
    let status = registration.status.clone().unwrap_or_else(|| "REGISTERED".to_owned());
    let booked_on = format::display_date(registration.created_at.as_deref());

    let (title, href, when) = match registration.event() {
        Some(event) => (
            event.title.clone(),
            Some(paths::event_detail(&event.id)),
            format::display_datetime(event.start_date.as_deref()),
        ),
        None => ("Event unavailable".to_owned(), None, format::display_datetime(None)),
    };

    view! {
        <li class="booking-list__item">
            <div>
                {match href {
                    Some(href) => view! { <a href=href class="booking-list__title">{title}</a> }.into_any(),
                    None => view! { <span class="booking-list__title">{title}</span> }.into_any(),
                }}
                <p class="booking-list__meta">{when} " · booked " {booked_on}</p>
            </div>
            <span class="badge">{status}</span>
            <Show when=move || active>
                <button
                    type="button"
                    class="button button--ghost"
                    disabled=busy.clone()
                    on:click={
                        let id = id.clone();
                        move |_| on_cancel.run(id.clone())
                    }
                >
                    {
                        let busy = busy.clone();
                        move || if busy() { "Cancelling..." } else { "Cancel" }
                    }
                </button>
            </Show>
        </li>
    }
}
