//! Public landing page. Signed-in users are forwarded to their dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::app::AppSession;
use crate::components::loading::LoadingIndicator;
use crate::config;
use crate::routes::guard::{self, GuardDecision};
use crate::routes::paths;

const FEATURES: [(&str, &str); 4] = [
    ("Seminars", "Talks and industry insights in one place."),
    ("Workshops", "Hands-on sessions and skill-building."),
    ("Festivals", "Cultural and annual college events."),
    ("Club activities", "Clubs, societies, and competitions."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<AppSession>().signal();
    let decision = Memo::new(move |_| session.with(guard::evaluate_home));

    move || match decision.get() {
        GuardDecision::Loading => view! { <LoadingIndicator/> }.into_any(),
        GuardDecision::Render => view! { <HomeContent/> }.into_any(),
        redirect => {
            let target = redirect.target().unwrap_or_else(|| paths::HOME.to_owned());
            view! { <Redirect path=target options=NavigateOptions { replace: true, ..NavigateOptions::default() }/> }
                .into_any()
        }
    }
}

#[component]
fn HomeContent() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"One place for all college events"</h1>
            <p>
                "Seminars, workshops, festivals, and club activities. "
                "Stay informed, register easily, and never miss an event."
            </p>
            <div class="hero__actions">
                <a href=paths::EVENTS class="button">"Browse events"</a>
                <a href=paths::REGISTER class="button button--accent">"Get started"</a>
            </div>
        </section>
        <section class="features">
            <h2>"What you can do on " {config::APP_NAME}</h2>
            <ul class="features__grid">
                {FEATURES
                    .iter()
                    .map(|(title, desc)| {
                        view! {
                            <li class="features__item">
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
