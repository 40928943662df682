use leptos::prelude::*;

use crate::net::types::{Event, category_label};
use crate::routes::paths;
use crate::util::format;

/// Summary card linking to an event's detail view.
#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let href = paths::event_detail(&event.id);
    let category = category_label(event.category.as_ref());
    let when = format::display_datetime(event.start_date.as_deref());
    let venue = event.venue().unwrap_or("Venue TBA").to_owned();
    let price = format::price_label(event.price);
    let seats = format::seats_label(event.available_seats, event.total_seats);
    let mut summary: String = event.description.chars().take(140).collect();
    if event.description.chars().count() > 140 {
        summary.push('…');
    }

    view! {
        <a href=href class="event-card">
            <span class="event-card__category">{category}</span>
            <h3 class="event-card__title">{event.title}</h3>
            <p class="event-card__summary">{summary}</p>
            <dl class="event-card__meta">
                <dt>"When"</dt>
                <dd>{when}</dd>
                <dt>"Where"</dt>
                <dd>{venue}</dd>
                <dt>"Price"</dt>
                <dd>{price}</dd>
                <dt>"Seats"</dt>
                <dd>{seats}</dd>
            </dl>
        </a>
    }
}
