//! Public events list with search, category and status filters.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::loading::LoadingIndicator;
use crate::net::api::HttpGateway;
use crate::net::error::ApiResult;
use crate::net::types::{Category, EventList, EventQuery, EventStatus};

/// Build the list query for the current filter inputs.
fn events_query(search: &str, category: &str, status: &str, page: u32) -> EventQuery {
    EventQuery {
        search: search.trim().to_owned(),
        category: category.trim().to_owned(),
        status: status.trim().to_owned(),
        page: page.max(1),
        ..EventQuery::default()
    }
}

/// The category filter degrades to "All categories" when the list fails.
fn categories_or_empty(result: ApiResult<Vec<Category>>) -> Vec<Category> {
    result.unwrap_or_else(|e| {
        log::warn!("events: category list unavailable: {e}");
        Vec::new()
    })
}

/// "Page X of Y" summary; `None` when everything fits on one page.
fn page_summary(list: &EventList) -> Option<String> {
    let total = list.pagination.total_pages();
    (total > 1).then(|| format!("Page {} of {total}", list.pagination.page.max(1)))
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();

    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let page = RwSignal::new(1_u32);

    let categories = {
        let gateway = gateway.clone();
        LocalResource::new(move || {
            let gateway = gateway.clone();
            async move { categories_or_empty(gateway.list_categories().await) }
        })
    };

    let events = LocalResource::new(move || {
        let query = events_query(&search.get(), &category.get(), &status.get(), page.get());
        let gateway = gateway.clone();
        async move { gateway.list_events(&query).await }
    });

    let total_pages = move || events.get().and_then(Result::ok).map_or(1, |l| l.pagination.total_pages());

    let on_search = move |ev: leptos::ev::Event| {
        search.set(event_target_value(&ev));
        page.set(1);
    };
    let on_category = move |ev: leptos::ev::Event| {
        category.set(event_target_value(&ev));
        page.set(1);
    };
    let on_status = move |ev: leptos::ev::Event| {
        status.set(event_target_value(&ev));
        page.set(1);
    };

    view! {
        <div class="events-page">
            <header class="page-header">
                <h1>"Events"</h1>
                <p>"Discover what's happening on campus."</p>
            </header>

            <div class="filters">
                <input
                    type="search"
                    class="filters__search"
                    placeholder="Search events..."
                    prop:value=move || search.get()
                    on:change=on_search
                />
                <select class="filters__category" on:change=on_category>
                    <option value="">"All categories"</option>
                    <Suspense fallback=|| ()>
                        {move || {
                            categories
                                .get()
                                .map(|list: Vec<Category>| {
                                    list.into_iter()
                                        .map(|c| view! { <option value=c.id.clone()>{c.name}</option> })
                                        .collect_view()
                                })
                        }}
                    </Suspense>
                </select>
                <select class="filters__status" on:change=on_status>
                    <option value="">"All statuses"</option>
                    {EventStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Suspense fallback=move || view! { <LoadingIndicator label="Loading events..."/> }>
                {move || {
                    events
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let summary = page_summary(&list);
                                if list.events.is_empty() {
                                    view! { <p class="empty-state">"No events found."</p> }.into_any()
                                } else {
                                    view! {
                                        <div class="event-grid">
                                            {list
                                                .events
                                                .into_iter()
                                                .map(|event| view! { <EventCard event=event/> })
                                                .collect_view()}
                                        </div>
                                        <p class="pagination__summary">{summary}</p>
                                    }
                                        .into_any()
                                }
                            }
                            Err(e) => {
                                view! {
                                    <p class="error-state" role="alert">
                                        {e.user_message("Failed to load events.")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <nav class="pagination">
                <button
                    type="button"
                    class="button button--ghost"
                    disabled=move || page.get() <= 1
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <button
                    type="button"
                    class="button button--ghost"
                    disabled=move || page.get() >= total_pages()
                    on:click=move |_| page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </nav>
        </div>
    }
}
