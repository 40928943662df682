//! Route gate wrapping the router outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits between `<Router>` and `<Routes>`. On every location change it looks
//! up the route's declared access and asks the guard what to do. The session
//! store is passed in explicitly rather than looked up from context.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::app::AppSession;
use crate::components::loading::LoadingIndicator;
use crate::routes::guard::{self, GuardDecision};
use crate::routes::table;

/// Join a pathname and a raw search string into one requested location.
fn requested_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

#[component]
pub fn RouteGate(session: AppSession, children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let state = session.signal();

    let decision = Memo::new(move |_| {
        let pathname = location.pathname.get();
        let requested = requested_location(&pathname, &location.search.get());
        state.with(|s| guard::evaluate(s, table::access_for(&pathname), &requested))
    });

    move || match decision.get() {
        GuardDecision::Loading => view! { <LoadingIndicator/> }.into_any(),
        GuardDecision::Render => children().into_any(),
        redirect => {
            let target = redirect.target().unwrap_or_default();
            log::debug!("guard: redirecting to {target}");
            view! { <Redirect path=target options=NavigateOptions { replace: true, ..NavigateOptions::default() }/> }
                .into_any()
        }
    }
}
