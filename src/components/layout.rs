//! Page chrome: header with role-aware logo link, nav, and footer.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::user_menu::UserMenu;
use crate::config;
use crate::routes::{landing, paths};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <Header/>
            <main class="app__main">{children()}</main>
            <footer class="app__footer">
                <p>{config::APP_NAME}</p>
            </footer>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let session = expect_context::<AppSession>().signal();
    let logo_href = move || session.with(|s| landing::landing_route(s.identity()).to_owned());

    view! {
        <header class="header">
            <a href=logo_href class="header__logo">{config::APP_NAME}</a>
            <nav class="header__nav">
                <a href=paths::HOME>"Home"</a>
                <a href=paths::EVENTS>"Events"</a>
            </nav>
            <div class="header__account">
                <Show when=move || session.with(|s| s.is_ready())>
                    <Show
                        when=move || session.with(|s| s.is_authenticated())
                        fallback=|| {
                            view! {
                                <a href=paths::LOGIN class="header__link">"Login"</a>
                                <a href=paths::REGISTER class="header__cta">"Get started"</a>
                            }
                        }
                    >
                        <UserMenu/>
                    </Show>
                </Show>
            </div>
        </header>
    }
}
