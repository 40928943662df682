//! Signed-in user menu with dashboard links and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::net::types::Identity;
use crate::routes::{landing, paths};
use crate::util::task::spawn_in_browser;

#[component]
pub fn UserMenu() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let state = session.signal();
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    let initials = move || state.with(|s| s.identity().map(Identity::initials).unwrap_or_default());
    let name = move || state.with(|s| s.identity().map(|i| i.name.clone()).unwrap_or_default());
    let email = move || state.with(|s| s.identity().map(|i| i.email.clone()).unwrap_or_default());
    let dashboard = move || state.with(|s| landing::landing_route(s.identity()).to_owned());

    let on_logout = move |_| {
        open.set(false);
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_in_browser(async move {
            // Identity is cleared whether or not the call succeeds.
            let _ = session.logout().await;
            navigate(paths::HOME, NavigateOptions::default());
        });
    };

    view! {
        <div class="user-menu">
            <button
                type="button"
                class="user-menu__toggle"
                aria-haspopup="true"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="user-menu__avatar">{initials}</span>
                <span class="user-menu__name">{name}</span>
            </button>
            <Show when=move || open.get()>
                <div class="user-menu__panel" on:click=move |_| open.set(false)>
                    <div class="user-menu__identity">
                        <p class="user-menu__panel-name">{name}</p>
                        <p class="user-menu__email">{email}</p>
                        <Show when=move || state.with(|s| s.is_admin())>
                            <span class="badge badge--admin">"Admin"</span>
                        </Show>
                    </div>
                    <a href=dashboard>"Dashboard"</a>
                    <a href=paths::STUDENT_PROFILE>"Profile"</a>
                </div>
            </Show>
            <button type="button" class="user-menu__logout" on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}
