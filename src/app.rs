//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::route_gate::RouteGate;
use crate::config;
use crate::net::api::HttpGateway;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_registrations::AdminRegistrationsPage, admin_users::AdminUsersPage,
    event_detail::EventDetailPage, events::EventsPage, home::HomePage, login::LoginPage, my_bookings::MyBookingsPage,
    not_found::NotFoundPage, profile::ProfilePage, register::RegisterPage, student_dashboard::StudentDashboardPage,
    verify_email::VerifyEmailPage,
};
use crate::state::session::SessionStore;

/// Session store wired to the browser gateway.
pub type AppSession = SessionStore<HttpGateway>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the session store once, starts the boot identity check in the
/// browser, passes the store explicitly to the route gate and provides it
/// (with the gateway) to views for read-only use.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let gateway = HttpGateway::default();
    let session: AppSession = SessionStore::new(gateway.clone());
    provide_context(gateway);
    provide_context(session.clone());

    let boot = session.clone();
    crate::util::task::spawn_in_browser(async move { boot.initialize().await });

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-events.css"/>
        <Title text=config::APP_NAME/>

        <Router>
            <Layout>
                <RouteGate session=session>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("events") view=EventsPage/>
                        <Route path=(StaticSegment("events"), ParamSegment("id")) view=EventDetailPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                        <Route path=StaticSegment("404") view=NotFoundPage/>
                        <Route path=(StaticSegment("student"), StaticSegment("dashboard")) view=StudentDashboardPage/>
                        <Route path=(StaticSegment("student"), StaticSegment("profile")) view=ProfilePage/>
                        <Route path=(StaticSegment("student"), StaticSegment("my-bookings")) view=MyBookingsPage/>
                        <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                        <Route path=(StaticSegment("admin"), StaticSegment("users")) view=AdminUsersPage/>
                        <Route
                            path=(
                                StaticSegment("admin"),
                                StaticSegment("events"),
                                ParamSegment("id"),
                                StaticSegment("registrations"),
                            )
                            view=AdminRegistrationsPage
                        />
                    </Routes>
                </RouteGate>
            </Layout>
        </Router>
    }
}
